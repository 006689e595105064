//! Pure access decisions
//!
//! - No IO
//! - No panics
//! - Only the record passed in is consulted

use serde::Serialize;

use rdu_navigation::GuardPaths;
use rdu_session::{Role, SessionRecord, SubscriptionStatus};

/// What a page requires of the viewer.
///
/// `ActiveSubscription` and `Admin` both imply `Authenticated` but are
/// independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Authenticated,
    ActiveSubscription,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No token stored
    Unauthenticated,
    /// Signed in, but the subscription is not PAID
    SubscriptionRequired,
    /// Signed in, but not an administrator
    NotAdmin,
}

impl DenialReason {
    /// Redirect target for this denial. Only a subscription denial goes to
    /// the paywall, with the `wall=1` marker.
    pub fn target(&self, paths: &GuardPaths) -> String {
        match self {
            DenialReason::SubscriptionRequired => paths.paywall_target(),
            DenialReason::Unauthenticated | DenialReason::NotAdmin => paths.login_target(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "access", content = "reason", rename_all = "snake_case")]
pub enum Access {
    Granted,
    Denied(DenialReason),
}

impl Access {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }
}

/// Decide whether `record` satisfies `capability`.
pub fn evaluate(capability: Capability, record: &SessionRecord) -> Access {
    if !record.is_authenticated() {
        return Access::Denied(DenialReason::Unauthenticated);
    }

    match capability {
        Capability::Authenticated => Access::Granted,
        Capability::ActiveSubscription => {
            if record.subscription() == Some(SubscriptionStatus::Paid) {
                Access::Granted
            } else {
                Access::Denied(DenialReason::SubscriptionRequired)
            }
        }
        Capability::Admin => {
            if record.role() == Some(Role::Admin) {
                Access::Granted
            } else {
                Access::Denied(DenialReason::NotAdmin)
            }
        }
    }
}

/// An access decision together with where to send a denied viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub capability: Capability,
    pub access: Access,
    pub redirect: Option<String>,
}

impl Decision {
    pub fn new(capability: Capability, record: &SessionRecord, paths: &GuardPaths) -> Self {
        let access = evaluate(capability, record);
        let redirect = match access {
            Access::Granted => None,
            Access::Denied(reason) => Some(reason.target(paths)),
        };

        Self {
            capability,
            access,
            redirect,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.access.is_granted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdu_navigation::PageDepth;

    const ALL: [Capability; 3] = [
        Capability::Authenticated,
        Capability::ActiveSubscription,
        Capability::Admin,
    ];

    fn record(token: &str, role: &str, status: &str) -> SessionRecord {
        SessionRecord {
            token: token.to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            role: role.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_missing_token_denies_everything() {
        for role in ["ADMIN", "ROLE_ADMIN", "STANDARD", ""] {
            for status in ["PAID", "PENDING", ""] {
                let record = record("", role, status);
                for capability in ALL {
                    assert_eq!(
                        evaluate(capability, &record),
                        Access::Denied(DenialReason::Unauthenticated),
                        "{capability:?} with role={role} status={status}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_capability_axes_are_independent() {
        let admin_unpaid = record("t", "ADMIN", "PENDING");
        assert!(evaluate(Capability::Admin, &admin_unpaid).is_granted());
        assert_eq!(
            evaluate(Capability::ActiveSubscription, &admin_unpaid),
            Access::Denied(DenialReason::SubscriptionRequired)
        );

        let paid_member = record("t", "STANDARD", "PAID");
        assert!(evaluate(Capability::ActiveSubscription, &paid_member).is_granted());
        assert_eq!(
            evaluate(Capability::Admin, &paid_member),
            Access::Denied(DenialReason::NotAdmin)
        );

        assert!(evaluate(Capability::Authenticated, &record("t", "", "")).is_granted());
        for capability in ALL {
            assert!(evaluate(capability, &record("t", "ROLE_ADMIN", "PAID")).is_granted());
        }
    }

    #[test]
    fn test_garbled_values_fail_closed() {
        let garbled = record("t", "root", "paid");
        assert!(evaluate(Capability::Authenticated, &garbled).is_granted());
        assert!(!evaluate(Capability::ActiveSubscription, &garbled).is_granted());
        assert!(!evaluate(Capability::Admin, &garbled).is_granted());
    }

    #[test]
    fn test_denial_targets() {
        let paths = GuardPaths::for_depth(PageDepth::Nested);

        let anonymous = Decision::new(Capability::ActiveSubscription, &record("", "", ""), &paths);
        assert_eq!(anonymous.redirect.as_deref(), Some("../login.html"));

        let unpaid = Decision::new(
            Capability::ActiveSubscription,
            &record("t", "ROLE_USER", "PENDING"),
            &paths,
        );
        assert_eq!(unpaid.redirect.as_deref(), Some("../programs.html?wall=1"));

        let not_admin = Decision::new(Capability::Admin, &record("t", "ROLE_USER", "PAID"), &paths);
        assert_eq!(not_admin.redirect.as_deref(), Some("../login.html"));

        let allowed = Decision::new(Capability::Authenticated, &record("t", "", ""), &paths);
        assert!(allowed.is_allowed());
        assert_eq!(allowed.redirect, None);
    }
}
