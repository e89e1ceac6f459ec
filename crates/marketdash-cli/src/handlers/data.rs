use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, search: Option<String>) -> Result<()> {
    let query = search.unwrap_or_default();
    let view_model = presenters::present_data(&query, ctx.config.apply_search_filter);
    tracing::info!(
        query = %query,
        shown = view_model.content.search.shown,
        total = view_model.content.search.total,
        "data sources listed"
    );
    ctx.renderer().render(view_model)
}
