//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] rdu_storage::StorageError),

    #[error("Invalid authentication response: {0}")]
    Json(#[from] serde_json::Error),
}
