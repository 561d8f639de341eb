//! Error types for catalog providers.

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Malformed catalog data: {0}")]
    MalformedData(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<String> for CatalogError {
    fn from(s: String) -> Self {
        CatalogError::InternalError(s)
    }
}

impl From<&str> for CatalogError {
    fn from(s: &str) -> Self {
        CatalogError::InternalError(s.to_string())
    }
}
