use thiserror::Error;

/// Errors raised by the key-value backends and the typed stores on top of them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    #[error("Account already exists: {0}")]
    AccountExists(String),

    #[error("Record {0:?} is not valid UTF-8")]
    Encoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
