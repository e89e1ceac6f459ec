use std::fmt;

/// Result type for marketdash-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A static record violates one of its documented invariants
    Invariant(String),
    /// A path does not name any dashboard route
    UnknownRoute(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Invariant(msg) => write!(f, "Invariant violated: {}", msg),
            Error::UnknownRoute(path) => write!(f, "Unknown route: {}", path),
        }
    }
}

impl std::error::Error for Error {}
