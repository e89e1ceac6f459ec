pub mod domain;
pub mod error;
pub mod icon;
pub mod route;
pub mod status;

pub use domain::*;
pub use error::{Error, Result};
pub use icon::Icon;
pub use route::{NAV_ITEMS, NavItem, Route};
pub use status::Status;
