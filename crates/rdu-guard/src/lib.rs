//! ReDiscoverU Page Guards
//!
//! | Guard                         | Requires              | On denial                 |
//! | `require_authenticated`       | token                 | login                     |
//! | `require_active_subscription` | token + PAID          | login, or paywall?wall=1  |
//! | `require_admin`               | token + ADMIN role    | login                     |
//!
//! Role and status are never trusted without a token, and values that
//! don't parse never match.

mod decision;
mod guard;

pub use decision::{evaluate, Access, Capability, Decision, DenialReason};
pub use guard::AuthorizationGuard;
