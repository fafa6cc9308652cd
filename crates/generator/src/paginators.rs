//! Paginator index and pages

use crate::markdown::{accepts_redirect_link, client_function_name, client_function_path, returns_redirect_link};
use crate::render::{Navigation, Renderer, ServiceContext};
use botodocs_common::Result;

pub(crate) fn generate(renderer: &Renderer, svc: &ServiceContext, nav: &mut Navigation) -> Result<()> {
    let paginators = &svc.service.paginators;
    let Some(first) = paginators.first() else {
        return Ok(());
    };

    let paginators_path = format!("{}/paginators", svc.service_path);
    nav.sidebar
        .push(format!("          - [Paginators]({})", paginators_path));

    for paginator in paginators {
        let function = client_function_name(&paginator.name);
        let mut context = svc.context(renderer);
        context.insert("name", &paginator.name);
        context.insert("operation_path", &client_function_path(&svc.service_path, &function));
        // Tokens may carry a fallback expression: "NextMarker || Contents[-1].Key"
        let output_token = paginator
            .output_token
            .first()
            .and_then(|token| token.split("||").next())
            .map(str::trim);
        context.insert("output_token", &output_token);
        context.insert("result_keys", &paginator.result_key);
        context.insert(
            "accepts",
            &accepts_redirect_link(svc.client_name, &function, &svc.service_path),
        );
        context.insert(
            "returns",
            &returns_redirect_link(svc.client_name, &function, &svc.service_path),
        );
        renderer.render(
            "paginator.md",
            &context,
            &format!("{}/{}.md", paginators_path, function),
        )?;
    }

    let mut context = svc.context(renderer);
    context.insert("example", &first.name);
    context.insert("paginators", paginators);
    context.insert("paginators_path", &paginators_path);
    renderer.render("paginators.md", &context, &format!("{}.md", paginators_path))
}
