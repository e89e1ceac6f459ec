use serde::Serialize;

use crate::{Error, Icon, Result};

/// Direction a KPI moved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Trend implied by the sign of a change string such as `"+20%"` or `"-35%"`.
    ///
    /// A leading `-` (or unicode minus) means down; anything else means up.
    pub fn implied_by(change: &str) -> Trend {
        match change.trim_start().chars().next() {
            Some('-') | Some('−') => Trend::Down,
            _ => Trend::Up,
        }
    }
}

/// Key performance indicator card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub title: String,
    /// Pre-formatted display value, e.g. "94.2%"
    pub value: String,
    /// Signed change, e.g. "+20%"
    pub change: String,
    pub trend: Trend,
    pub description: String,
    pub icon: Icon,
}

impl Kpi {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        trend: Trend,
        description: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
            trend,
            description: description.into(),
            icon,
        }
    }

    /// Verify that `trend` agrees with the sign of `change`.
    pub fn check(&self) -> Result<()> {
        let implied = Trend::implied_by(&self.change);
        if implied != self.trend {
            return Err(Error::Invariant(format!(
                "KPI '{}' has trend {:?} but change '{}' implies {:?}",
                self.title, self.trend, self.change, implied
            )));
        }
        Ok(())
    }
}
