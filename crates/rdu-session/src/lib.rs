//! ReDiscoverU Session Management
//!
//! - A session record is written once per login/registration
//! - It survives reloads and is destroyed only by logout
//! - Subscription status is reconciled from current and legacy field names
//!   at save time, so readers only ever see one canonical key

mod error;
mod record;
mod store;

pub use error::SessionError;
pub use record::{AuthResponse, Role, SessionRecord, SubscriptionStatus};
pub use store::{SessionStorage, SessionStore, SESSION_KEYS, STATUS_SOURCE_KEYS};

pub type Result<T> = std::result::Result<T, SessionError>;
