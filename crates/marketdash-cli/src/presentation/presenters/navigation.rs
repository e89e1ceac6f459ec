use marketdash_engine::dataset::{BRAND, LAST_UPDATED};
use marketdash_engine::is_active;
use marketdash_types::{NAV_ITEMS, Route};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, NavItemViewModel, NavigationViewModel, StatusBadge,
};

pub fn present_navigation(path: &str) -> CommandResultViewModel<NavigationViewModel> {
    let content = navigation(path);
    let mut result = CommandResultViewModel::new(content);

    if result.content.active_route().is_none() {
        result = result
            .with_badge(StatusBadge::warning(format!(
                "No navigation item matches \"{}\"",
                path
            )))
            .with_suggestion(Guidance::new(format!("Valid paths: {}", valid_paths())));
    }

    result
}

/// Shell state for the current path, without command guidance
pub fn navigation(path: &str) -> NavigationViewModel {
    NavigationViewModel {
        brand: BRAND.to_string(),
        last_updated: LAST_UPDATED.to_string(),
        current_path: path.to_string(),
        items: NAV_ITEMS
            .iter()
            .map(|item| NavItemViewModel {
                name: item.name.to_string(),
                href: item.href.to_string(),
                icon: item.icon,
                route: item.route,
                active: is_active(path, item.href),
            })
            .collect(),
    }
}

pub fn valid_paths() -> String {
    Route::ALL
        .iter()
        .map(|r| r.href())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_names(path: &str) -> Vec<String> {
        navigation(path)
            .items
            .into_iter()
            .filter(|i| i.active)
            .map(|i| i.name)
            .collect()
    }

    #[test]
    fn test_exactly_one_active_for_known_paths() {
        assert_eq!(active_names("/"), vec!["Overview"]);
        assert_eq!(active_names("/data"), vec!["Data"]);
        assert_eq!(active_names("/forecasting"), vec!["Forecasting"]);
        assert_eq!(active_names("/reports"), vec!["Reports"]);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(active_names("/data/").is_empty());
        assert!(active_names("/reports/q2").is_empty());
        assert!(active_names("").is_empty());
    }

    #[test]
    fn test_unknown_path_warns() {
        let result = present_navigation("/settings");
        assert!(result.badge.is_some());
        assert_eq!(result.content.active_route(), None);

        let result = present_navigation("/forecasting");
        assert!(result.badge.is_none());
        assert_eq!(result.content.active_route(), Some(Route::Forecasting));
    }

    #[test]
    fn test_valid_paths() {
        assert_eq!(valid_paths(), "/, /data, /forecasting, /reports");
    }
}
