pub mod number;
pub mod text;

pub use number::{format_metric, format_pct, format_thousands};
pub use text::{text_bar, truncate};
