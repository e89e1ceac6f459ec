use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Icon};

/// One of the four dashboard pages, addressed by its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Overview,
    Data,
    Forecasting,
    Reports,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Overview,
        Route::Data,
        Route::Forecasting,
        Route::Reports,
    ];

    pub fn href(self) -> &'static str {
        match self {
            Route::Overview => "/",
            Route::Data => "/data",
            Route::Forecasting => "/forecasting",
            Route::Reports => "/reports",
        }
    }

    /// Resolve a path by exact match against the route hrefs.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.href() == path)
    }

    pub fn index(self) -> usize {
        match self {
            Route::Overview => 0,
            Route::Data => 1,
            Route::Forecasting => 2,
            Route::Reports => 3,
        }
    }

    pub fn next(self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    pub fn previous(self) -> Route {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| Error::UnknownRoute(s.to_string()))
    }
}

/// Navigation bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    #[serde(skip)]
    pub route: Route,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "Overview",
        href: "/",
        icon: Icon::BarChart,
        route: Route::Overview,
    },
    NavItem {
        name: "Data",
        href: "/data",
        icon: Icon::Database,
        route: Route::Data,
    },
    NavItem {
        name: "Forecasting",
        href: "/forecasting",
        icon: Icon::TrendingUp,
        route: Route::Forecasting,
    },
    NavItem {
        name: "Reports",
        href: "/reports",
        icon: Icon::FileText,
        route: Route::Reports,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_is_exact() {
        assert_eq!(Route::from_path("/"), Some(Route::Overview));
        assert_eq!(Route::from_path("/data"), Some(Route::Data));
        assert_eq!(Route::from_path("/data/"), None);
        assert_eq!(Route::from_path("/Reports"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_parse_unknown_route_errors() {
        let err = "/settings".parse::<Route>().unwrap_err();
        assert_eq!(err, Error::UnknownRoute("/settings".to_string()));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(Route::Reports.next(), Route::Overview);
        assert_eq!(Route::Overview.previous(), Route::Reports);
        assert_eq!(Route::Data.next(), Route::Forecasting);
    }

    #[test]
    fn test_nav_items_match_routes() {
        for (item, route) in NAV_ITEMS.iter().zip(Route::ALL) {
            assert_eq!(item.route, route);
            assert_eq!(item.href, route.href());
        }
    }
}
