//! Error types for the Craftbook catalog.

use thiserror::Error;

/// Main error type for catalog and query operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CraftError {
    /// No craft item has the requested id.
    #[error("Craft item '{id}' not found")]
    NotFound { id: String },

    /// An argument fell outside a controlled vocabulary.
    #[error("Invalid {field} '{value}': {message}")]
    InvalidArgument {
        field: String,
        value: String,
        message: String,
    },

    /// Random selection was requested from a catalog with no items.
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// A time total does not fit in the minute counter.
    #[error("Total time exceeds {} minutes", u32::MAX)]
    TimeOverflow,

    /// Catalog data failed validation at ingestion.
    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CraftError {
    /// Build a `NotFound` error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        CraftError::NotFound { id: id.into() }
    }

    /// Build an `InvalidCatalog` error.
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        CraftError::InvalidCatalog {
            message: message.into(),
        }
    }

    /// Returns true if the caller's input caused this error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CraftError::NotFound { .. } | CraftError::InvalidArgument { .. }
        )
    }

    /// Returns the offending input, if the error names one.
    pub fn subject(&self) -> Option<&str> {
        match self {
            CraftError::NotFound { id } => Some(id),
            CraftError::InvalidArgument { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Short machine-readable kind, stable across releases.
    pub fn kind(&self) -> &'static str {
        match self {
            CraftError::NotFound { .. } => "not_found",
            CraftError::InvalidArgument { .. } => "invalid_argument",
            CraftError::EmptyCatalog => "empty_catalog",
            CraftError::TimeOverflow => "time_overflow",
            CraftError::InvalidCatalog { .. } => "invalid_catalog",
            CraftError::SerializationError(_) => "serialization_error",
        }
    }
}

/// Convenience Result type for Craftbook operations.
pub type Result<T> = std::result::Result<T, CraftError>;

impl From<serde_json::Error> for CraftError {
    fn from(err: serde_json::Error) -> Self {
        CraftError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_id() {
        let err = CraftError::not_found("paper_boat");
        assert_eq!(err.to_string(), "Craft item 'paper_boat' not found");
        assert_eq!(err.subject(), Some("paper_boat"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_empty_catalog_is_not_client_error() {
        assert!(!CraftError::EmptyCatalog.is_client_error());
        assert_eq!(CraftError::EmptyCatalog.subject(), None);
        assert_eq!(CraftError::EmptyCatalog.kind(), "empty_catalog");
    }

    #[test]
    fn test_from_serde_json() {
        let err: CraftError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CraftError::SerializationError(_)));
    }
}
