//! Error types for well-data services.

use thiserror::Error;

/// Result type alias using WellError.
pub type WellResult<T> = Result<T, WellError>;

/// Primary error type for well-data operations.
#[derive(Debug, Error)]
pub enum WellError {
    // === Lookup Errors ===
    #[error("Well not found: {0}")]
    NotFound(String),

    // === Ingestion Errors ===
    #[error("Failed to fetch source page: {0}")]
    FetchFailure(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // === Query Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Malformed polygon: {0}")]
    MalformedPolygon(String),

    // === Storage Errors ===
    #[error("Database error: {0}")]
    DatabaseError(String),

    // === Infrastructure Errors ===
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl WellError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            WellError::NotFound(_) => 404,
            WellError::MissingParameter(_) | WellError::MalformedPolygon(_) => 400,
            WellError::FetchFailure(_) => 502,
            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for WellError {
    fn from(err: std::io::Error) -> Self {
        WellError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for WellError {
    fn from(err: serde_json::Error) -> Self {
        WellError::InternalError(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(WellError::NotFound("30-001".into()).http_status_code(), 404);
        assert_eq!(
            WellError::MissingParameter("api".into()).http_status_code(),
            400
        );
        assert_eq!(
            WellError::MalformedPolygon("too few vertices".into()).http_status_code(),
            400
        );
        assert_eq!(
            WellError::FetchFailure("status 500".into()).http_status_code(),
            502
        );
        assert_eq!(
            WellError::DatabaseError("locked".into()).http_status_code(),
            500
        );
    }
}
