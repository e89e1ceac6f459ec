use marketdash_types::DataSource;

/// Sources whose name contains `query`, ignoring case.
///
/// A blank query keeps every source. Order is preserved.
pub fn filter_sources<'a>(sources: &'a [DataSource], query: &str) -> Vec<&'a DataSource> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return sources.iter().collect();
    }

    sources
        .iter()
        .filter(|source| source.name.to_lowercase().contains(&needle))
        .collect()
}
