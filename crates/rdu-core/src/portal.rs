//! Page-facing client state
//!
//! One `Portal` per page load: pages call a guard first and only render
//! protected content when it returns `true`.

use url::Url;

use rdu_guard::{AuthorizationGuard, Capability, Decision};
use rdu_navigation::{GuardPaths, Navigator};
use rdu_session::{AuthResponse, SessionRecord, SessionStorage, SessionStore};
use rdu_storage::{Database, KeyValueStore};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Portal<B, N> {
    config: Config,
    api_base: Url,
    guard: AuthorizationGuard<SessionStore<B>, N>,
}

impl<N: Navigator> Portal<Database, N> {
    /// Portal backed by the profile database named in `config`.
    pub fn open(config: Config, navigator: N) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        Self::new(config, db, navigator)
    }
}

impl<B: KeyValueStore, N: Navigator> Portal<B, N> {
    pub fn new(config: Config, backend: B, navigator: N) -> Result<Self> {
        let api_base = parse_api_base(&config.api_base)?;
        let paths = config.guard_paths();

        tracing::debug!(
            api_base = %api_base,
            depth = ?config.page_depth,
            login = %paths.login,
            paywall = %paths.paywall,
            "Portal ready"
        );

        Ok(Self {
            guard: AuthorizationGuard::new(SessionStore::new(backend), navigator, paths),
            api_base,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn guard(&self) -> &AuthorizationGuard<SessionStore<B>, N> {
        &self.guard
    }

    pub fn store(&self) -> &SessionStore<B> {
        self.guard.store()
    }

    pub fn paths(&self) -> &GuardPaths {
        self.guard.paths()
    }

    pub fn session(&self) -> SessionRecord {
        self.store().read()
    }

    /// Persist the body of a successful login or registration.
    pub fn login(&self, response: &AuthResponse) -> Result<SessionRecord> {
        self.store().save(response)?;
        Ok(self.session())
    }

    pub fn login_json(&self, body: &str) -> Result<SessionRecord> {
        Ok(self.store().save_json(body)?)
    }

    /// Erase the whole profile and go to the login page.
    ///
    /// Navigation happens even when clearing fails.
    pub fn logout(&self) -> Result<()> {
        let cleared = self.store().clear();
        self.guard.navigator().navigate(&self.paths().login_target());

        if let Err(e) = &cleared {
            tracing::error!(error = %e, "Failed to clear profile on logout");
        }
        cleared?;
        Ok(())
    }

    pub fn decide(&self, capability: Capability) -> Decision {
        self.guard.decide(capability)
    }

    pub fn require_authenticated(&self) -> bool {
        self.guard.require_authenticated()
    }

    pub fn require_active_subscription(&self) -> bool {
        self.guard.require_active_subscription()
    }

    pub fn require_admin(&self) -> bool {
        self.guard.require_admin()
    }

    /// Headers for an authenticated JSON API call.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", self.session().bearer()),
            ("Content-Type", "application/json".to_string()),
        ]
    }

    /// Absolute URL of an API endpoint, e.g. `api_url("programs")`.
    pub fn api_url(&self, path: &str) -> Result<Url> {
        Ok(self
            .api_base
            .join(path.trim_start_matches('/'))
            .map_err(rdu_navigation::NavigationError::from)?)
    }
}

fn parse_api_base(raw: &str) -> Result<Url> {
    let mut base = Url::parse(raw)
        .map_err(|e| CoreError::Config(format!("invalid api_base '{raw}': {e}")))?;
    if base.cannot_be_a_base() {
        return Err(CoreError::Config(format!("api_base '{raw}' cannot be a base URL")));
    }

    // Joining replaces the last segment unless the path ends with '/'
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdu_navigation::{PageDepth, RecordingNavigator};
    use rdu_storage::MemoryStore;
    use std::path::PathBuf;

    fn portal(depth: PageDepth) -> Portal<MemoryStore, RecordingNavigator> {
        let config = Config::new(PathBuf::from("/tmp/rdu-test")).with_page_depth(depth);
        Portal::new(config, MemoryStore::new(), RecordingNavigator::new()).unwrap()
    }

    #[test]
    fn test_login_then_guards() {
        let portal = portal(PageDepth::Nested);
        let record = portal
            .login_json(r#"{"token":"jwt","name":"Asha","email":"asha@example.com","role":"ROLE_USER","accountStatus":"PAID"}"#)
            .unwrap();

        assert_eq!(record.status, "PAID");
        assert!(portal.require_active_subscription());
        assert!(!portal.require_admin());
        assert_eq!(
            portal.guard().navigator().visits(),
            vec!["../login.html"]
        );
    }

    #[test]
    fn test_logout_clears_profile_and_redirects() {
        let portal = portal(PageDepth::Root);
        portal.store().backend().set("unrelated_pref", "1").unwrap();
        portal
            .login(&AuthResponse::new("jwt", "Asha", "asha@example.com", "ROLE_USER"))
            .unwrap();

        portal.logout().unwrap();

        assert!(portal.store().backend().is_empty());
        assert_eq!(portal.session(), SessionRecord::default());
        assert_eq!(portal.guard().navigator().last().as_deref(), Some("login.html"));

        // Logging out again is harmless
        portal.logout().unwrap();
        assert_eq!(portal.guard().navigator().visits().len(), 2);
    }

    #[test]
    fn test_auth_headers() {
        let portal = portal(PageDepth::Nested);
        portal
            .login(&AuthResponse::new("abc", "Asha", "asha@example.com", "ROLE_USER"))
            .unwrap();

        let headers = portal.auth_headers();
        assert_eq!(headers[0], ("Authorization", "Bearer abc".to_string()));
        assert_eq!(headers[1], ("Content-Type", "application/json".to_string()));
    }

    #[test]
    fn test_api_url() {
        let portal = portal(PageDepth::Nested);
        assert_eq!(
            portal.api_url("/auth/login").unwrap().as_str(),
            "http://localhost:8080/api/auth/login"
        );
        assert_eq!(
            portal.api_url("programs").unwrap().as_str(),
            "http://localhost:8080/api/programs"
        );
    }

    #[test]
    fn test_invalid_api_base() {
        let config = Config {
            api_base: "localhost:8080".to_string(),
            ..Config::new(PathBuf::from("/tmp/rdu-test"))
        };
        // "localhost:8080" parses as a scheme with an opaque path
        let result = Portal::new(config, MemoryStore::new(), RecordingNavigator::new());
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_open_sqlite_profile() {
        let dir = std::env::temp_dir().join(format!("rdu-portal-{}", std::process::id()));
        let config = Config::new(dir.clone());

        {
            let portal = Portal::open(config.clone(), RecordingNavigator::new()).unwrap();
            portal
                .login(
                    &AuthResponse::new("jwt", "Asha", "asha@example.com", "ROLE_ADMIN")
                        .with_subscription_status("PAID"),
                )
                .unwrap();
        }

        // Next page load sees the same session
        let portal = Portal::open(config, RecordingNavigator::new()).unwrap();
        assert!(portal.require_admin());
        assert!(portal.require_active_subscription());

        drop(portal);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
