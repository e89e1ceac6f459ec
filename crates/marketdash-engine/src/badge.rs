use marketdash_types::Status;
use serde::Serialize;

/// Visual style of a status badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Primary,
    Accent,
    #[default]
    Secondary,
    Outline,
}

/// Resolve the badge style for a status.
///
/// Every known status maps to exactly one style; anything else gets
/// [`BadgeStyle::default`].
pub fn badge_style(status: &Status) -> BadgeStyle {
    match status {
        Status::Active => BadgeStyle::Primary,
        Status::Processing => BadgeStyle::Secondary,
        Status::Training => BadgeStyle::Secondary,
        Status::Completed => BadgeStyle::Accent,
        Status::Running => BadgeStyle::Primary,
        Status::Ready => BadgeStyle::Accent,
        Status::InProgress => BadgeStyle::Primary,
        Status::Planned => BadgeStyle::Secondary,
        Status::Other(_) => BadgeStyle::default(),
    }
}

/// String-level entry point for [`badge_style`]
pub fn badge_style_for_label(label: &str) -> BadgeStyle {
    badge_style(&Status::from_label(label))
}

/// Where a badge is shown. Some pages colour the same status differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeContext {
    DataSource,
    Model,
    Task,
    Initiative,
}

impl BadgeContext {
    pub fn style(self, status: &Status) -> BadgeStyle {
        match (self, status) {
            // Healthy models are highlighted with the accent colour.
            (BadgeContext::Model, Status::Active) => BadgeStyle::Accent,
            _ => badge_style(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_map_to_one_style() {
        let expected = [
            ("active", BadgeStyle::Primary),
            ("processing", BadgeStyle::Secondary),
            ("training", BadgeStyle::Secondary),
            ("completed", BadgeStyle::Accent),
            ("running", BadgeStyle::Primary),
            ("ready", BadgeStyle::Accent),
            ("In Progress", BadgeStyle::Primary),
            ("Planned", BadgeStyle::Secondary),
        ];
        for (label, style) in expected {
            assert_eq!(badge_style_for_label(label), style, "{label}");
        }
    }

    #[test]
    fn test_unknown_statuses_fall_back_to_default() {
        for label in ["", "archived", "ACTIVE", "in progress", "失敗", "  "] {
            assert_eq!(badge_style_for_label(label), BadgeStyle::default(), "{label:?}");
        }
    }

    #[test]
    fn test_model_context_accents_active() {
        assert_eq!(BadgeContext::Model.style(&Status::Active), BadgeStyle::Accent);
        assert_eq!(
            BadgeContext::Model.style(&Status::Training),
            BadgeStyle::Secondary
        );
        assert_eq!(
            BadgeContext::DataSource.style(&Status::Active),
            BadgeStyle::Primary
        );
    }

    #[test]
    fn test_contexts_fall_back_for_unknown() {
        let unknown = Status::from_label("paused");
        for ctx in [
            BadgeContext::DataSource,
            BadgeContext::Model,
            BadgeContext::Task,
            BadgeContext::Initiative,
        ] {
            assert_eq!(ctx.style(&unknown), BadgeStyle::default());
        }
    }

    #[test]
    fn test_style_serializes_lowercase() {
        insta::assert_json_snapshot!(
            [BadgeStyle::Primary, BadgeStyle::Accent, BadgeStyle::Secondary, BadgeStyle::Outline],
            @r#"
        [
          "primary",
          "accent",
          "secondary",
          "outline"
        ]
        "#
        );
    }
}
