pub mod data;
pub mod forecasting;
pub mod nav;
pub mod overview;
pub mod reports;
pub mod tui;
