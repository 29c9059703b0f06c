use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("'{0}' is not in the dictionary.")]
    NotFound(String),
    #[error("'{0}' already exists in the dictionary.")]
    AlreadyExists(String),
    #[error("Definitions file {} is corrupt: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to persist definitions: {0}")]
    Persistence(String),
    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
