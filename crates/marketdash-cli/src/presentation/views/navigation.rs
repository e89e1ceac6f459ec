use std::fmt;

use owo_colors::OwoColorize;

use super::Theme;
use crate::presentation::view_models::{CreateView, NavigationViewModel};

impl CreateView for NavigationViewModel {
    fn create_view<'a>(&'a self, theme: Theme) -> Box<dyn fmt::Display + 'a> {
        Box::new(NavigationView { data: self, theme })
    }
}

struct NavigationView<'a> {
    data: &'a NavigationViewModel,
    theme: Theme,
}

impl<'a> fmt::Display for NavigationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let theme = self.theme;
        writeln!(
            f,
            "{}  {}",
            self.data.brand.style(theme.title()),
            self.data.last_updated.style(theme.muted())
        )?;
        writeln!(f)?;
        for item in &self.data.items {
            let marker = if item.active { "▶" } else { " " };
            let line = format!("{} {} {:<12} {}", marker, item.icon.glyph(), item.name, item.href);
            if item.active {
                writeln!(f, "{}", line.style(theme.highlight()))?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
