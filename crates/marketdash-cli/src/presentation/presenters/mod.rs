pub mod data;
pub mod forecasting;
pub mod navigation;
pub mod overview;
pub mod reports;

pub use data::present_data;
pub use forecasting::present_forecasting;
pub use navigation::present_navigation;
pub use overview::present_overview;
pub use reports::present_reports;

use marketdash_engine::{bar_width, fill_width};
use marketdash_types::{BenchmarkMetric, Driver, Note, Scale};

use crate::presentation::view_models::{BarItemViewModel, BenchmarkViewModel, NoteViewModel};

pub(crate) fn benchmark(metric: BenchmarkMetric) -> BenchmarkViewModel {
    BenchmarkViewModel {
        width_pct: bar_width(metric.value, metric.target),
        metric: metric.metric,
        value: metric.value,
        target: metric.target,
        unit: metric.unit,
    }
}

pub(crate) fn bar_item(driver: Driver, scale: Scale) -> BarItemViewModel {
    let score_pct = scale.to_percent(driver.score);
    BarItemViewModel {
        label: driver.name,
        score: driver.score,
        score_pct,
        width_pct: fill_width(score_pct),
    }
}

pub(crate) fn note(note: Note) -> NoteViewModel {
    NoteViewModel {
        title: note.title,
        detail: note.detail,
        icon: note.icon,
    }
}
