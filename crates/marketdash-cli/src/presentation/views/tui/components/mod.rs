pub mod data;
pub mod forecasting;
pub mod overview;
pub mod reports;

pub use data::{DataAction, DataComponent};
pub use forecasting::ForecastingComponent;
pub use overview::OverviewComponent;
pub use reports::ReportsComponent;
