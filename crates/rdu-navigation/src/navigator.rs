//! Navigation side effect

use parking_lot::Mutex;
use std::sync::Arc;

/// Performs a full-page navigation.
///
/// Navigation completes after the caller returns, so callers must stop
/// rendering once they have asked for one.
pub trait Navigator {
    fn navigate(&self, target: &str);
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, target: &str) {
        (**self).navigate(target)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn navigate(&self, target: &str) {
        (**self).navigate(target)
    }
}

/// Navigator that records requested targets instead of leaving the page.
///
/// Clones share the same log.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visits.lock().last().cloned()
    }

    pub fn reset(&self) {
        self.visits.lock().clear();
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        tracing::debug!(destination = target, "Navigation requested");
        self.visits.lock().push(target.to_string());
    }
}

impl Clone for RecordingNavigator {
    fn clone(&self) -> Self {
        Self {
            visits: Arc::clone(&self.visits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator() {
        let navigator = RecordingNavigator::new();
        let shared = navigator.clone();

        navigator.navigate("../login.html");
        Arc::new(shared.clone()).navigate("../programs.html?wall=1");

        assert_eq!(
            shared.visits(),
            vec!["../login.html", "../programs.html?wall=1"]
        );
        assert_eq!(navigator.last().as_deref(), Some("../programs.html?wall=1"));

        navigator.reset();
        assert!(shared.visits().is_empty());
    }
}
