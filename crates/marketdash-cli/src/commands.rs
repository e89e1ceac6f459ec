use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::{Context, Result};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tui { route: None });
    let is_tui = matches!(command, Commands::Tui { .. });

    if !is_tui {
        logging::init_stderr(cli.log_level);
    }

    let (config, config_source) = Config::load(cli.config.as_deref())?;
    marketdash_engine::dataset::check_all().context("Built-in dataset is inconsistent")?;

    // Held until the dashboard exits so buffered log lines are flushed.
    let _log_guard = if is_tui {
        logging::init_file(cli.log_level, config.logging.file_path().as_deref())?
    } else {
        None
    };
    config_source.log();

    let ctx = ExecutionContext::new(config, cli.format.into(), cli.no_color);

    match command {
        Commands::Overview => handlers::overview::handle(&ctx),
        Commands::Data { search } => handlers::data::handle(&ctx, search),
        Commands::Forecasting { tab } => handlers::forecasting::handle(&ctx, tab),
        Commands::Reports => handlers::reports::handle(&ctx),
        Commands::Nav { path } => handlers::nav::handle(&ctx, &path),
        Commands::Tui { route } => handlers::tui::handle(&ctx, route.as_deref()),
    }
}
