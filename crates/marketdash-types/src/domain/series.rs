use serde::Serialize;

use crate::{Error, Result};

/// One period of a demand forecast series.
///
/// `actual` is `None` for periods beyond the last observation. Those periods
/// belong to the forecast horizon and must never be treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub period: String,
    pub actual: Option<f64>,
    pub forecast: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

impl ForecastPoint {
    pub fn observed(period: impl Into<String>, actual: f64, forecast: f64) -> Self {
        Self {
            period: period.into(),
            actual: Some(actual),
            forecast,
            lower: None,
            upper: None,
        }
    }

    pub fn projected(period: impl Into<String>, forecast: f64) -> Self {
        Self {
            period: period.into(),
            actual: None,
            forecast,
            lower: None,
            upper: None,
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = Some(lower);
        self.upper = Some(upper);
        self
    }

    pub fn has_band(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }
}

/// Verify the forecast horizon invariant: once a point has no actual, no
/// later point may have one.
pub fn check_forecast_horizon(points: &[ForecastPoint]) -> Result<()> {
    let mut horizon_start: Option<&str> = None;
    for point in points {
        match (horizon_start, point.actual) {
            (None, None) => horizon_start = Some(&point.period),
            (Some(start), Some(_)) => {
                return Err(Error::Invariant(format!(
                    "period '{}' has an actual value after the forecast horizon began at '{}'",
                    point.period, start
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Value range a driver or feature score is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Scores in [0, 100]
    Percent,
    /// Scores in [0, 1]
    Unit,
}

impl Scale {
    pub fn max(self) -> f64 {
        match self {
            Scale::Percent => 100.0,
            Scale::Unit => 1.0,
        }
    }

    /// Convert a score on this scale to a percentage.
    pub fn to_percent(self, score: f64) -> f64 {
        score / self.max() * 100.0
    }
}

/// Market driver or model feature with an impact/importance score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Driver {
    pub name: String,
    pub score: f64,
}

impl Driver {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Verify that every score in one chart is non-negative and within `scale`.
pub fn check_driver_scale(drivers: &[Driver], scale: Scale) -> Result<()> {
    for driver in drivers {
        if !driver.score.is_finite() || driver.score < 0.0 || driver.score > scale.max() {
            return Err(Error::Invariant(format!(
                "driver '{}' score {} is outside [0, {}]",
                driver.name,
                driver.score,
                scale.max()
            )));
        }
    }
    Ok(())
}

/// Performance metric measured against a target benchmark
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkMetric {
    pub metric: String,
    pub value: f64,
    pub target: f64,
    /// Suffix appended to value and target when displayed, e.g. "%"
    pub unit: String,
}

impl BenchmarkMetric {
    pub fn new(metric: impl Into<String>, value: f64, target: f64) -> Self {
        Self {
            metric: metric.into(),
            value,
            target,
            unit: String::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// Point on the residual scatter plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidualPoint {
    pub predicted: f64,
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_accepts_absent_suffix() {
        let points = vec![
            ForecastPoint::observed("Jan", 1.0, 1.0),
            ForecastPoint::observed("Feb", 2.0, 2.0),
            ForecastPoint::projected("Mar", 3.0),
            ForecastPoint::projected("Apr", 4.0),
        ];
        assert!(check_forecast_horizon(&points).is_ok());
    }

    #[test]
    fn test_horizon_rejects_actual_after_gap() {
        let points = vec![
            ForecastPoint::observed("Jan", 1.0, 1.0),
            ForecastPoint::projected("Feb", 2.0),
            ForecastPoint::observed("Mar", 3.0, 3.0),
        ];
        let err = check_forecast_horizon(&points).unwrap_err();
        assert!(err.to_string().contains("'Mar'"));
        assert!(err.to_string().contains("'Feb'"));
    }

    #[test]
    fn test_horizon_accepts_empty_and_all_projected() {
        assert!(check_forecast_horizon(&[]).is_ok());
        let points = vec![ForecastPoint::projected("Jan", 1.0)];
        assert!(check_forecast_horizon(&points).is_ok());
    }

    #[test]
    fn test_driver_scale() {
        let percent = vec![Driver::new("Price", 85.0), Driver::new("Season", 0.0)];
        assert!(check_driver_scale(&percent, Scale::Percent).is_ok());
        assert!(check_driver_scale(&percent, Scale::Unit).is_err());

        let negative = vec![Driver::new("Noise", -0.1)];
        assert!(check_driver_scale(&negative, Scale::Unit).is_err());
    }

    #[test]
    fn test_scale_to_percent() {
        assert!((Scale::Unit.to_percent(0.35) - 35.0).abs() < 1e-9);
        assert!((Scale::Percent.to_percent(72.0) - 72.0).abs() < 1e-9);
    }
}
