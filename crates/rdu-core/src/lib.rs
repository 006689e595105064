//! ReDiscoverU Client Core
//!
//! Wires the profile store, the session record, page guards and navigation
//! together for the pages of the learning portal.

mod config;
mod display;
mod error;
mod portal;

pub use config::Config;
pub use display::{
    format_date, format_inr, program_type_badge, program_type_label, status_badge, status_label,
};
pub use error::CoreError;
pub use portal::Portal;

// Re-export core components
pub use rdu_guard::{evaluate, Access, AuthorizationGuard, Capability, Decision, DenialReason};
pub use rdu_navigation::{
    has_wall_marker, resolve_target, DashboardNav, GuardPaths, NavigationError, Navigator,
    PageChangeHook, PageDepth, RecordingNavigator,
};
pub use rdu_session::{
    AuthResponse, Role, SessionError, SessionRecord, SessionStorage, SessionStore,
    SubscriptionStatus,
};
pub use rdu_storage::{Database, KeyValueStore, MemoryStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
