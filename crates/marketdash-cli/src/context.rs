use crate::config::Config;
use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::OutputFormat;
use crate::presentation::views::Theme;
use crate::presentation::presenters::navigation::valid_paths;
use anyhow::{Result, anyhow};
use is_terminal::IsTerminal;
use marketdash_types::Route;
use std::str::FromStr;

pub struct ExecutionContext {
    pub config: Config,
    pub format: OutputFormat,
    pub color: bool,
}

impl ExecutionContext {
    pub fn new(config: Config, format: OutputFormat, no_color: bool) -> Self {
        let color = !no_color
            && format == OutputFormat::Text
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self {
            config,
            format,
            color,
        }
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format, Theme::new(self.color))
    }

    /// Starting page: explicit path first, then the configured default
    pub fn resolve_route(&self, explicit: Option<&str>) -> Result<Route> {
        let path = explicit.unwrap_or(&self.config.default_route);
        parse_route(path)
    }
}

pub fn parse_route(path: &str) -> Result<Route> {
    Route::from_str(path).map_err(|e| anyhow!("{}. Valid routes: {}", e, valid_paths()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_route_wins() {
        let ctx = ExecutionContext::new(
            Config {
                default_route: "/reports".to_string(),
                ..Config::default()
            },
            OutputFormat::Text,
            true,
        );
        assert_eq!(ctx.resolve_route(None).unwrap(), Route::Reports);
        assert_eq!(ctx.resolve_route(Some("/data")).unwrap(), Route::Data);
    }

    #[test]
    fn test_unknown_route_lists_valid_ones() {
        let err = parse_route("/settings").unwrap_err().to_string();
        assert!(err.contains("/settings"));
        assert!(err.contains("/, /data, /forecasting, /reports"));
    }

    #[test]
    fn test_json_never_colored() {
        let ctx = ExecutionContext::new(Config::default(), OutputFormat::Json, false);
        assert!(!ctx.color);
    }
}
