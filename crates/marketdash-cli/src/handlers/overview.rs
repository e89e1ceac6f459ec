use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let view_model = presenters::present_overview();
    ctx.renderer().render(view_model)
}
