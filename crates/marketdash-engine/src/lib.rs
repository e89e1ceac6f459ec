//! Derivation rules that turn static records into display-ready values.
//!
//! Every function here is total: odd inputs (zero targets, unknown statuses,
//! empty queries) resolve to a well-defined fallback instead of an error.

pub mod badge;
pub mod band;
pub mod bar;
pub mod dataset;
pub mod nav;
pub mod search;
pub mod tabs;
pub mod trend;

pub use badge::{BadgeContext, BadgeStyle, badge_style, badge_style_for_label};
pub use band::{ForecastChart, confidence_band};
pub use bar::{bar_width, cells, fill_width};
pub use nav::{active_item, is_active};
pub use search::filter_sources;
pub use tabs::{ForecastTab, TabState};
pub use trend::{Tone, TrendIndicator};
