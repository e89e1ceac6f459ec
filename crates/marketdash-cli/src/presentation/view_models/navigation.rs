use marketdash_types::{Icon, Route};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavigationViewModel {
    pub brand: String,
    pub last_updated: String,
    pub current_path: String,
    pub items: Vec<NavItemViewModel>,
}

impl NavigationViewModel {
    pub fn active_route(&self) -> Option<Route> {
        self.items
            .iter()
            .find(|item| item.active)
            .map(|item| item.route)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItemViewModel {
    pub name: String,
    pub href: String,
    pub icon: Icon,
    pub route: Route,
    pub active: bool,
}
