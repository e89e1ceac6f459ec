//! marketdash: a terminal market-research analytics dashboard.
//!
//! Layers, top to bottom:
//! - `handlers` resolve config and arguments, call a presenter, pick a renderer
//! - `presentation::presenters` turn static datasets into view models
//! - `presentation::views` render view models as text or ratatui widgets
//! - `presentation::renderers` write to the console or drive the TUI loop

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
