use crate::context::ExecutionContext;
use crate::presentation::renderers::{TuiOptions, TuiRenderer};
use anyhow::Result;
use marketdash_engine::ForecastTab;

pub fn handle(ctx: &ExecutionContext, route: Option<&str>) -> Result<()> {
    let route = ctx.resolve_route(route)?;

    let options = TuiOptions {
        route,
        tab: ForecastTab::default(),
        apply_search_filter: ctx.config.apply_search_filter,
        tick_rate: ctx.config.tick_rate(),
    };

    TuiRenderer::new(options).run()
}
