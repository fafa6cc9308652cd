//! Data types page

use crate::collector::find_all_shapes;
use crate::markdown::{shape_doc, ShapeDoc};
use crate::render::{Navigation, Renderer, ServiceContext};
use botodocs_common::{Result, ShapeId};
use tracing::debug;

/// Write `data-types.md` for every shape reachable from the service's
/// shapes; no page and no sidebar entry when there is nothing to document
pub(crate) fn generate(renderer: &Renderer, svc: &ServiceContext, nav: &mut Navigation) -> Result<()> {
    let roots: Vec<ShapeId> = svc.graph.ids().collect();
    let shapes = find_all_shapes(svc.graph, &roots);
    if shapes.is_empty() {
        debug!(service = svc.client_name, "no data types, skipping page");
        return Ok(());
    }

    let docs: Vec<ShapeDoc> = shapes
        .iter()
        .map(|id| shape_doc(svc.graph, *id, &svc.shapes_path))
        .collect();

    let mut context = svc.context(renderer);
    context.insert("shapes", &docs);
    renderer.render("data_types.md", &context, &svc.shapes_path)?;

    nav.sidebar
        .push(format!("        - [Data Types]({})", svc.shapes_path));
    Ok(())
}
