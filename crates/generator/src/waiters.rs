//! Waiter index and pages

use crate::markdown::{accepts_redirect_link, client_function_name, client_function_path};
use crate::render::{Navigation, Renderer, ServiceContext};
use botodocs_common::Result;

pub(crate) fn generate(renderer: &Renderer, svc: &ServiceContext, nav: &mut Navigation) -> Result<()> {
    let waiters = &svc.service.waiters;
    let Some(first) = waiters.first() else {
        return Ok(());
    };

    let waiters_path = format!("{}/waiters", svc.service_path);
    nav.sidebar
        .push(format!("          - [Waiters]({})", waiters_path));

    for waiter in waiters {
        let operation = client_function_name(&waiter.operation);
        let mut context = svc.context(renderer);
        context.insert("waiter", waiter);
        context.insert("operation_path", &client_function_path(&svc.service_path, &operation));
        context.insert(
            "accepts",
            &accepts_redirect_link(svc.client_name, &operation, &svc.service_path),
        );
        renderer.render(
            "waiter.md",
            &context,
            &format!("{}/{}.md", waiters_path, client_function_name(&waiter.name)),
        )?;
    }

    let mut context = svc.context(renderer);
    context.insert("example", &first.name);
    context.insert("waiters", waiters);
    context.insert("waiters_path", &waiters_path);
    renderer.render("waiters.md", &context, &format!("{}.md", waiters_path))
}
