pub mod common;
pub mod data;
pub mod forecasting;
pub mod navigation;
pub mod overview;
pub mod reports;
pub mod result;

pub use common::*;
pub use data::*;
pub use forecasting::*;
pub use navigation::*;
pub use overview::*;
pub use reports::*;
pub use result::CommandResultViewModel;

use std::fmt;

use crate::presentation::views::Theme;

/// Bridge from a view model to its text rendering
pub trait CreateView {
    fn create_view<'a>(&'a self, theme: Theme) -> Box<dyn fmt::Display + 'a>;
}
