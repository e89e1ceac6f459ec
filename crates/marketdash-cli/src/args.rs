use crate::types::{LogLevel, OutputFormat, TabName};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marketdash")]
#[command(about = "Market research analytics dashboard for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Configuration file (defaults to $MARKETDASH_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// KPI cards, demand forecast, market drivers and key insights
    Overview,

    /// Data sources, quality metrics and processing tasks
    Data {
        /// Case-insensitive filter on data source names
        #[arg(long)]
        search: Option<String>,
    },

    /// Model benchmarks, forecast with confidence band, and one tab
    Forecasting {
        #[arg(long, default_value = "models")]
        tab: TabName,
    },

    /// Insights, strategic initiatives, automation impact and generated reports
    Reports,

    /// Navigation items and which one is active for a path
    Nav {
        #[arg(long, default_value = "/")]
        path: String,
    },

    /// Interactive dashboard (default)
    Tui {
        /// Starting page: /, /data, /forecasting or /reports
        #[arg(long)]
        route: Option<String>,
    },
}
