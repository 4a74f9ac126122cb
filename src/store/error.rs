use thiserror::Error;

/// Result type for message store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types for message store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection error - database unreachable or authentication failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Database error - SQL errors, constraint violations
    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Classify an error raised while establishing a connection.
    ///
    /// Anything that goes wrong before the first statement runs (DNS, refused
    /// socket, rejected credentials, unknown database) counts as a connection
    /// failure, even when the server answered with an error message.
    pub fn connect(err: tokio_postgres::Error) -> Self {
        match err.as_db_error() {
            Some(db_error) => StoreError::Connection(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            )),
            None => StoreError::Connection(err.to_string()),
        }
    }
}

/// Convert tokio-postgres statement errors to store errors
impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        if err.is_closed() {
            return StoreError::Connection(err.to_string());
        }

        if let Some(db_error) = err.as_db_error() {
            return StoreError::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        StoreError::Database(format!("{:?}", err))
    }
}
