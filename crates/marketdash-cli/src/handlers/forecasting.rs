use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;
use crate::types::TabName;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, tab: TabName) -> Result<()> {
    let view_model = presenters::present_forecasting(tab.into());
    ctx.renderer().render(view_model)
}
