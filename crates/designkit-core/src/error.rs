//! Error types for designkit

use thiserror::Error;

/// Main error type for designkit operations
#[derive(Error, Debug)]
pub enum KitError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Password did not match the account's credentials
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    /// No account is registered for the email
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A context hook was used outside of the provider that supplies it
    #[error("{0} is missing: wrap the component tree in it before using its hook")]
    MissingProvider(&'static str),

    /// Input could not be parsed or is out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for KitError {
    fn from(err: serde_json::Error) -> Self {
        KitError::Serialization(err.to_string())
    }
}

/// Result type alias using KitError
pub type KitResult<T> = Result<T, KitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KitError::UserNotFound("nobody@example.com".to_string());
        assert_eq!(format!("{}", err), "User not found: nobody@example.com");
    }

    #[test]
    fn test_missing_provider_names_provider() {
        let err = KitError::MissingProvider("LoadingProvider");
        assert!(err.to_string().starts_with("LoadingProvider is missing"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let kit_err: KitError = io_err.into();
        assert!(matches!(kit_err, KitError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let kit_err: KitError = json_err.into();
        assert!(matches!(kit_err, KitError::Serialization(_)));
    }
}
