/// Group digits in threes: `12847` -> `12,847`
pub fn format_thousands(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage with one decimal place
pub fn format_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Benchmark value as written in the dataset, followed by its unit
pub fn format_metric(value: f64, unit: &str) -> String {
    format!("{}{}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(2156), "2,156");
        assert_eq!(format_thousands(12847), "12,847");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(35.0), "35.0%");
        assert_eq!(format_pct(98.5), "98.5%");
        assert_eq!(format_pct(7.000000000000001), "7.0%");
    }

    #[test]
    fn test_format_metric_keeps_literal() {
        assert_eq!(format_metric(0.942, ""), "0.942");
        assert_eq!(format_metric(245.0, ""), "245");
        assert_eq!(format_metric(5.8, "%"), "5.8%");
    }
}
