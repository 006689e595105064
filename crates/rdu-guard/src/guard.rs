//! Guard entry points invoked on page load

use rdu_navigation::{GuardPaths, Navigator};
use rdu_session::SessionStorage;

use crate::decision::{Capability, Decision};

/// Checks the stored session and redirects when a page may not render.
///
/// Storage is read on every call; nothing is cached between checks.
pub struct AuthorizationGuard<S, N> {
    store: S,
    navigator: N,
    paths: GuardPaths,
}

impl<S: SessionStorage, N: Navigator> AuthorizationGuard<S, N> {
    pub fn new(store: S, navigator: N, paths: GuardPaths) -> Self {
        Self {
            store,
            navigator,
            paths,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn paths(&self) -> &GuardPaths {
        &self.paths
    }

    /// Decide without navigating.
    pub fn decide(&self, capability: Capability) -> Decision {
        Decision::new(capability, &self.store.read(), &self.paths)
    }

    /// Decide and, on denial, navigate to the redirect target.
    ///
    /// Returns `false` on denial; the caller must stop initialising the page.
    pub fn require(&self, capability: Capability) -> bool {
        let decision = self.decide(capability);

        match &decision.redirect {
            None => true,
            Some(target) => {
                tracing::info!(
                    capability = ?decision.capability,
                    access = ?decision.access,
                    redirect = %target,
                    "Page access denied"
                );
                self.navigator.navigate(target);
                false
            }
        }
    }

    pub fn require_authenticated(&self) -> bool {
        self.require(Capability::Authenticated)
    }

    pub fn require_active_subscription(&self) -> bool {
        self.require(Capability::ActiveSubscription)
    }

    pub fn require_admin(&self) -> bool {
        self.require(Capability::Admin)
    }
}
