pub mod kpi;
pub mod model;
pub mod report;
pub mod series;
pub mod source;

pub use kpi::*;
pub use model::*;
pub use report::*;
pub use series::*;
pub use source::*;
