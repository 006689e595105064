//! ReDiscoverU Navigation
//!
//! - Redirect targets are relative to the calling page, which lives either at
//!   the site root or one directory deep
//! - The paywall redirect carries a `wall=1` marker so the pricing page can
//!   show a payment prompt instead of a login prompt
//! - Dashboard pages switch in place; hosts can observe switches through an
//!   optional callback

mod dashboard;
mod error;
mod navigator;
mod paths;

pub use dashboard::{DashboardNav, PageChangeHook};
pub use error::NavigationError;
pub use navigator::{Navigator, RecordingNavigator};
pub use paths::{has_wall_marker, resolve_target, GuardPaths, PageDepth, WALL_MARKER};

pub type Result<T> = std::result::Result<T, NavigationError>;
