use marketdash_types::{NAV_ITEMS, NavItem};

/// Whether a nav item is highlighted for the current path (exact match).
pub fn is_active(path: &str, href: &str) -> bool {
    path == href
}

/// The nav item highlighted for `path`, if any.
pub fn active_item(path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| is_active(path, item.href))
}
