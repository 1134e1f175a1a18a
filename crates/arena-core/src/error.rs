//! Errors raised at the input boundary
//!
//! Running a tournament cannot fail. These only come from turning
//! caller-supplied text into a roster.

use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A strategy name that is neither an identifier nor a display name.
    UnknownStrategy(String),
    /// The request could not be parsed.
    InvalidRequest(String),
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::UnknownStrategy(name) => write!(f, "unknown strategy: {:?}", name),
            ArenaError::InvalidRequest(reason) => write!(f, "invalid tournament request: {}", reason),
        }
    }
}

impl std::error::Error for ArenaError {}

impl From<serde_json::Error> for ArenaError {
    fn from(e: serde_json::Error) -> Self {
        ArenaError::InvalidRequest(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ArenaError::UnknownStrategy("Grim".into()).to_string(),
            "unknown strategy: \"Grim\""
        );
        assert_eq!(
            ArenaError::InvalidRequest("eof".into()).to_string(),
            "invalid tournament request: eof"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ArenaError::from(err), ArenaError::InvalidRequest(_)));
    }
}
