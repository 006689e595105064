//! Dashboard sidebar routing
//!
//! Dashboard sections are rendered up front and switched in place; only one
//! is active at a time.

/// Called with the requested page id after every switch.
pub type PageChangeHook = Box<dyn FnMut(&str) + Send>;

pub struct DashboardNav {
    pages: Vec<String>,
    active: Option<String>,
    on_page_change: Option<PageChangeHook>,
}

impl DashboardNav {
    pub fn new<I, S>(pages: I, on_page_change: Option<PageChangeHook>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            active: None,
            on_page_change,
        }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, page: &str) -> bool {
        self.active() == Some(page)
    }

    /// Switch to `page`.
    ///
    /// Every page is deactivated first; an unknown id leaves none active.
    /// The hook runs either way. Returns whether `page` is known.
    pub fn show(&mut self, page: &str) -> bool {
        let known = self.pages.iter().any(|p| p == page);
        self.active = known.then(|| page.to_string());

        if !known {
            tracing::warn!(page, "Unknown dashboard page");
        }

        if let Some(hook) = self.on_page_change.as_mut() {
            hook(page);
        }

        known
    }
}

impl std::fmt::Debug for DashboardNav {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardNav")
            .field("pages", &self.pages)
            .field("active", &self.active)
            .field("has_hook", &self.on_page_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_switch_without_hook() {
        let mut nav = DashboardNav::new(["overview", "programs", "payments"], None);
        assert_eq!(nav.active(), None);

        assert!(nav.show("programs"));
        assert!(nav.is_active("programs"));

        assert!(nav.show("overview"));
        assert!(!nav.is_active("programs"));
        assert_eq!(nav.active(), Some("overview"));
    }

    #[test]
    fn test_hook_sees_every_switch() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hook: PageChangeHook = Box::new(move |page| sink.lock().push(page.to_string()));

        let mut nav = DashboardNav::new(["overview", "users"], Some(hook));
        nav.show("users");
        assert!(!nav.show("missing"));

        assert_eq!(nav.active(), None);
        assert_eq!(*seen.lock(), vec!["users", "missing"]);
    }
}
