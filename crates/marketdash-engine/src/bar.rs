/// Width of a value-vs-target bar as a percentage of the track.
///
/// `min(value / target * 100, 100)`, floored at 0. A target that is not a
/// positive finite number yields an empty bar.
pub fn bar_width(value: f64, target: f64) -> f64 {
    if !(target.is_finite() && target > 0.0) {
        return 0.0;
    }
    fill_width(value / target * 100.0)
}

/// Clamp a plain percentage (quality score, confidence, importance) to [0, 100].
pub fn fill_width(pct: f64) -> f64 {
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, 100.0)
}

/// Number of filled cells for a bar `columns` wide.
pub fn cells(width_pct: f64, columns: u16) -> u16 {
    let filled = (fill_width(width_pct) / 100.0 * f64::from(columns)).round();
    (filled as u16).min(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_within_bounds_for_positive_targets() {
        let targets = [0.01, 0.85, 1.0, 8.0, 250.0, 300.0, 1e6];
        let values = [0.0, 0.5, 0.942, 5.8, 198.0, 245.0, 312.0, 1e7];
        for &target in &targets {
            for &value in &values {
                let width = bar_width(value, target);
                assert!((0.0..=100.0).contains(&width), "{value}/{target} -> {width}");
                let raw = value / target * 100.0;
                if raw <= 100.0 {
                    assert!((width - raw).abs() < 1e-9, "{value}/{target}: {width} != {raw}");
                } else {
                    assert_eq!(width, 100.0);
                }
            }
        }
    }

    #[test]
    fn test_r2_score_is_clamped() {
        // 0.942 / 0.85 is roughly 110.8%
        assert_eq!(bar_width(0.942, 0.85), 100.0);
    }

    #[test]
    fn test_rmse_below_target() {
        let width = bar_width(245.0, 300.0);
        assert!((width - 81.666_666_666).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_targets() {
        assert_eq!(bar_width(5.0, 0.0), 0.0);
        assert_eq!(bar_width(5.0, -1.0), 0.0);
        assert_eq!(bar_width(5.0, f64::NAN), 0.0);
        assert_eq!(bar_width(5.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_negative_value_floors_at_zero() {
        assert_eq!(bar_width(-10.0, 100.0), 0.0);
    }

    #[test]
    fn test_fill_width() {
        assert_eq!(fill_width(98.5), 98.5);
        assert_eq!(fill_width(120.0), 100.0);
        assert_eq!(fill_width(-3.0), 0.0);
        assert_eq!(fill_width(f64::NAN), 0.0);
    }

    #[test]
    fn test_cells() {
        assert_eq!(cells(100.0, 20), 20);
        assert_eq!(cells(50.0, 20), 10);
        assert_eq!(cells(0.0, 20), 0);
        assert_eq!(cells(250.0, 20), 20);
        assert_eq!(cells(50.0, 0), 0);
    }
}
