use marketdash_engine::cells;

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Fixed-width progress bar: filled cells then track
pub fn text_bar(width_pct: f64, columns: u16) -> (String, String) {
    let filled = cells(width_pct, columns);
    (
        "█".repeat(usize::from(filled)),
        "░".repeat(usize::from(columns - filled)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Customer Demographics", 40), "Customer Demographics");
        assert_eq!(truncate("Sales Transactions Q1-Q2 2025", 12), "Sales Tra...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_text_bar_cells() {
        let (filled, track) = text_bar(50.0, 20);
        assert_eq!(filled.chars().count(), 10);
        assert_eq!(track.chars().count(), 10);

        let (filled, track) = text_bar(110.8, 20);
        assert_eq!(filled.chars().count(), 20);
        assert!(track.is_empty());

        let (filled, _) = text_bar(0.0, 20);
        assert!(filled.is_empty());
    }
}
