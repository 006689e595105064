//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] rdu_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] rdu_session::SessionError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] rdu_navigation::NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
