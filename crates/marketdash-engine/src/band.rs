use marketdash_types::ForecastPoint;
use serde::Serialize;

/// Plot-ready series for a forecast chart.
///
/// Each series is a list of `(x, y)` pairs where `x` is the period index, so
/// a series can skip periods without shifting the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastChart {
    pub periods: Vec<String>,
    pub actual: Vec<(f64, f64)>,
    pub predicted: Vec<(f64, f64)>,
    pub upper: Vec<(f64, f64)>,
    pub lower: Vec<(f64, f64)>,
    /// Index of the last period with an observed actual (reference line)
    pub boundary: Option<usize>,
    /// Smallest and largest y across all series, `None` when empty
    pub y_range: Option<(f64, f64)>,
}

impl ForecastChart {
    pub fn boundary_period(&self) -> Option<&str> {
        self.boundary
            .and_then(|idx| self.periods.get(idx))
            .map(String::as_str)
    }

    pub fn has_band(&self) -> bool {
        !self.upper.is_empty()
    }
}

/// Split a forecast series into actual, predicted and confidence-band lines.
///
/// Periods without an actual are left out of the actual line rather than
/// plotted as zero. Only periods carrying both bounds contribute to the band.
pub fn confidence_band(points: &[ForecastPoint]) -> ForecastChart {
    let mut chart = ForecastChart {
        periods: Vec::with_capacity(points.len()),
        actual: Vec::new(),
        predicted: Vec::with_capacity(points.len()),
        upper: Vec::new(),
        lower: Vec::new(),
        boundary: None,
        y_range: None,
    };

    for (idx, point) in points.iter().enumerate() {
        let x = idx as f64;
        chart.periods.push(point.period.clone());
        chart.predicted.push((x, point.forecast));

        if let Some(actual) = point.actual {
            chart.actual.push((x, actual));
            chart.boundary = Some(idx);
        }

        if let (Some(lower), Some(upper)) = (point.lower, point.upper) {
            chart.lower.push((x, lower));
            chart.upper.push((x, upper));
        }
    }

    chart.y_range = chart
        .actual
        .iter()
        .chain(&chart.predicted)
        .chain(&chart.upper)
        .chain(&chart.lower)
        .map(|&(_, y)| y)
        .fold(None, |range, y| match range {
            None => Some((y, y)),
            Some((lo, hi)) => Some((f64::min(lo, y), f64::max(hi, y))),
        });

    chart
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ForecastPoint> {
        vec![
            ForecastPoint::observed("Jan", 4200.0, 4150.0).with_bounds(3950.0, 4350.0),
            ForecastPoint::observed("Feb", 4500.0, 4480.0).with_bounds(4250.0, 4710.0),
            ForecastPoint::projected("Mar", 4800.0).with_bounds(4580.0, 5060.0),
            ForecastPoint::projected("Apr", 5100.0),
        ]
    }

    #[test]
    fn test_absent_actuals_are_not_plotted() {
        let chart = confidence_band(&sample());
        assert_eq!(chart.actual, vec![(0.0, 4200.0), (1.0, 4500.0)]);
        assert!(chart.actual.iter().all(|&(_, y)| y != 0.0));
        assert_eq!(chart.predicted.len(), 4);
    }

    #[test]
    fn test_band_only_where_both_bounds_exist() {
        let chart = confidence_band(&sample());
        assert_eq!(chart.upper.len(), 3);
        assert_eq!(chart.lower.len(), 3);
        assert_eq!(chart.upper[2], (2.0, 5060.0));
        assert!(chart.has_band());
    }

    #[test]
    fn test_boundary_is_last_observed_period() {
        let chart = confidence_band(&sample());
        assert_eq!(chart.boundary, Some(1));
        assert_eq!(chart.boundary_period(), Some("Feb"));
    }

    #[test]
    fn test_y_range_covers_band() {
        let chart = confidence_band(&sample());
        assert_eq!(chart.y_range, Some((3950.0, 5100.0)));
    }

    #[test]
    fn test_empty_series() {
        let chart = confidence_band(&[]);
        assert!(chart.periods.is_empty());
        assert_eq!(chart.boundary, None);
        assert_eq!(chart.y_range, None);
        assert!(!chart.has_band());
    }
}
