use crate::context::{ExecutionContext, parse_route};
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;
use anyhow::Result;

/// Lists the navigation items; an unknown path is still shown, then reported as an error.
pub fn handle(ctx: &ExecutionContext, path: &str) -> Result<()> {
    let view_model = presenters::present_navigation(path);
    let known = view_model.content.active_route().is_some();
    ctx.renderer().render(view_model)?;

    if !known {
        parse_route(path)?;
    }
    Ok(())
}
