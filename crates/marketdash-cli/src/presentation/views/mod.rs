pub mod data;
pub mod forecasting;
pub mod navigation;
pub mod overview;
pub mod reports;
pub mod shared;
pub mod tui;

use marketdash_engine::{BadgeStyle, Tone};
use owo_colors::Style;

/// Text styling for console views. A colourless theme yields plain styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn pick(&self, style: Style) -> Style {
        if self.color { style } else { Style::new() }
    }

    pub fn title(&self) -> Style {
        self.pick(Style::new().bold())
    }

    pub fn section(&self) -> Style {
        self.pick(Style::new().bold().cyan())
    }

    pub fn muted(&self) -> Style {
        self.pick(Style::new().dimmed())
    }

    pub fn bar(&self) -> Style {
        self.pick(Style::new().cyan())
    }

    pub fn highlight(&self) -> Style {
        self.pick(Style::new().bold().green())
    }

    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Positive => self.pick(Style::new().green()),
            Tone::Negative => self.pick(Style::new().red()),
        }
    }

    pub fn badge(&self, style: BadgeStyle) -> Style {
        match style {
            BadgeStyle::Primary => self.pick(Style::new().bold().cyan()),
            BadgeStyle::Accent => self.pick(Style::new().bold().green()),
            BadgeStyle::Secondary => self.pick(Style::new().yellow()),
            BadgeStyle::Outline => self.pick(Style::new().dimmed()),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}
