//! ReDiscoverU Storage Layer
//!
//! Profile-scoped key-value persistence. A profile is everything one
//! browser profile can see: every open page of the application shares it.
//!
//! Two backends implement [`KeyValueStore`]:
//! - [`MemoryStore`]: process-local map, used by tests and ephemeral hosts
//! - [`Database`]: SQLite file, survives restarts

mod database;
mod error;
mod memory;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

pub type Result<T> = std::result::Result<T, StorageError>;
