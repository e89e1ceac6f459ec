use serde::{Serialize, Serializer};
use std::fmt;

/// Lifecycle status shown as a badge next to sources, models, tasks, reports
/// and initiatives.
///
/// Parsing never fails: labels outside the known set are kept verbatim in
/// [`Status::Other`] so that badge resolution can fall back to a default style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Processing,
    Training,
    Completed,
    Running,
    Ready,
    InProgress,
    Planned,
    Other(String),
}

impl Status {
    /// Parse a status label. Matching is exact, as in the source data.
    pub fn from_label(label: &str) -> Self {
        match label {
            "active" => Status::Active,
            "processing" => Status::Processing,
            "training" => Status::Training,
            "completed" => Status::Completed,
            "running" => Status::Running,
            "ready" => Status::Ready,
            "In Progress" => Status::InProgress,
            "Planned" => Status::Planned,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Status::Active => "active",
            Status::Processing => "processing",
            Status::Training => "training",
            Status::Completed => "completed",
            Status::Running => "running",
            Status::Ready => "ready",
            Status::InProgress => "In Progress",
            Status::Planned => "Planned",
            Status::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Status::Other(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Status {
    fn from(label: &str) -> Self {
        Status::from_label(label)
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for label in [
            "active",
            "processing",
            "training",
            "completed",
            "running",
            "ready",
            "In Progress",
            "Planned",
        ] {
            let status = Status::from_label(label);
            assert!(status.is_known(), "{label} should be known");
            assert_eq!(status.label(), label);
        }
    }

    #[test]
    fn test_unknown_label_is_preserved() {
        let status = Status::from_label("archived");
        assert_eq!(status, Status::Other("archived".to_string()));
        assert!(!status.is_known());
        assert_eq!(status.to_string(), "archived");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(!Status::from_label("Active").is_known());
        assert!(!Status::from_label("in progress").is_known());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
