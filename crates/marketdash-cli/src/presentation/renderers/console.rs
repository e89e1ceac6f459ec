use std::io::{self, Write};

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, OutputFormat};
use crate::presentation::views::Theme;

pub struct ConsoleRenderer {
    format: OutputFormat,
    theme: Theme,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, theme: Theme) -> Self {
        Self { format, theme }
    }

    /// Write the result to `out` instead of stdout
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        let theme = self.theme;

        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), badge.label.style(theme.title()))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(theme))?;

        if !result.suggestions.is_empty() {
            writeln!(out, "\n{}", "💡 Tips:".style(theme.section()))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", cmd.style(theme.bar()))?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{present_data, present_navigation, present_overview};

    fn render<T: Serialize + CreateView>(
        format: OutputFormat,
        result: CommandResultViewModel<T>,
    ) -> String {
        let mut out = Vec::new();
        ConsoleRenderer::new(format, Theme::plain())
            .render_to(&mut out, &result)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_wraps_content() {
        let text = render(OutputFormat::Json, present_overview());
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["content"]["kpis"][0]["value"], "94.2%");
        assert_eq!(json["content"]["kpis"][0]["indicator"]["glyph"], "▲");
        assert!(json.get("badge").is_none());
        assert!(json["suggestions"].is_array());
    }

    #[test]
    fn test_json_search_block() {
        let text = render(OutputFormat::Json, present_data("sql", true));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["content"]["search"]["applied"], true);
        assert_eq!(json["content"]["search"]["shown"], 0);
        assert_eq!(json["badge"]["level"], "warning");
    }

    #[test]
    fn test_text_badge_and_tips() {
        let text = render(OutputFormat::Text, present_navigation("/nope"));
        assert!(text.starts_with("⚠️ No navigation item matches \"/nope\""));
        assert!(text.contains("💡 Tips:"));
        assert!(text.contains("Valid paths: /, /data, /forecasting, /reports"));
    }

    #[test]
    fn test_navigation_json_snapshot() {
        let result = present_navigation("/reports");
        let items: Vec<(&str, bool)> = result
            .content
            .items
            .iter()
            .map(|i| (i.href.as_str(), i.active))
            .collect();
        insta::assert_json_snapshot!(items, @r#"
        [
          [
            "/",
            false
          ],
          [
            "/data",
            false
          ],
          [
            "/forecasting",
            false
          ],
          [
            "/reports",
            true
          ]
        ]
        "#);
    }
}
