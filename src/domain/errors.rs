use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by repository implementations
///
/// Handlers translate these into HTTP responses; the kind decides the
/// status code, so implementations must pick the variant carefully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The identifier does not have the expected UUID format
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// A field is missing, empty, or cannot be interpreted
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No entity matches the identifier
    #[error("Entity not found")]
    NotFound,

    /// The store accepted the write but returned nothing
    #[error("Store returned no entity")]
    CreateFailed,

    /// Any other driver or database failure
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Database(other.to_string()),
        }
    }
}

/// Parses a raw path segment into an entity identifier
///
/// # Example
/// ```
/// use fixtures_api::domain::{parse_id, RepositoryError};
///
/// assert!(parse_id("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
/// assert!(matches!(parse_id("42"), Err(RepositoryError::InvalidId(_))));
/// ```
pub fn parse_id(raw: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(raw).map_err(|_| RepositoryError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_hyphenated_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Ok(id));
    }

    #[test]
    fn parse_id_rejects_malformed_value() {
        let result = parse_id("not-an-id");
        assert_eq!(result, Err(RepositoryError::InvalidId("not-an-id".to_string())));
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: RepositoryError = sqlx::Error::RowNotFound.into();
        assert_eq!(err, RepositoryError::NotFound);
    }

    #[test]
    fn other_sqlx_errors_map_to_database() {
        let err: RepositoryError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
