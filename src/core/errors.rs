//! Error types for catalog data access

use thiserror::Error;

/// Failure while reading catalog data.
///
/// `Clone` so a memoized result can be handed to every reader in a request
/// scope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The source answered with a non-success status
    #[error("Error {status}: {status_text}")]
    Fetch { status: u16, status_text: String },

    /// The source could not be reached at all
    #[error("Network error: {0}")]
    Network(String),

    /// The body was not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Fixture data could not be loaded
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl CatalogError {
    pub fn fetch(status: u16, status_text: impl Into<String>) -> Self {
        Self::Fetch {
            status,
            status_text: status_text.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_carries_status() {
        let err = CatalogError::fetch(500, "Internal Server Error");
        assert_eq!(err.to_string(), "Error 500: Internal Server Error");
        assert_eq!(err.status(), Some(500));
        assert_eq!(CatalogError::Network("refused".into()).status(), None);
    }
}
