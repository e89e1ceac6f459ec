//! TUI views and stateful page components
//!
//! Views are stateless ratatui `Widget`s over a borrowed view model. They do
//! no formatting beyond layout and colour mapping.
//!
//! Components own page-local UI state (search text, active tab), handle keys
//! and emit actions to the renderer.

pub mod chart;
pub mod components;
pub mod nav_bar;
pub mod widgets;

pub use chart::{ForecastChartView, ResidualPlotView};
pub use components::{
    DataAction, DataComponent, ForecastingComponent, OverviewComponent, ReportsComponent,
};
pub use nav_bar::{NavBarView, StatusLineView};
pub use widgets::{BarListView, BenchmarkListView, HeaderView, KpiCardView, NotesView};

use marketdash_engine::{BadgeStyle, Tone};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::presentation::view_models::BadgeViewModel;

pub(crate) fn badge_color(style: BadgeStyle) -> Color {
    match style {
        BadgeStyle::Primary => Color::Cyan,
        BadgeStyle::Accent => Color::Green,
        BadgeStyle::Secondary => Color::Yellow,
        BadgeStyle::Outline => Color::DarkGray,
    }
}

pub(crate) fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Negative => Color::Red,
    }
}

pub(crate) fn badge_span(badge: &BadgeViewModel) -> Span<'static> {
    Span::styled(
        format!(" {} ", badge.label),
        Style::default()
            .fg(Color::Black)
            .bg(badge_color(badge.style))
            .add_modifier(Modifier::BOLD),
    )
}

pub(crate) fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub(crate) fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
