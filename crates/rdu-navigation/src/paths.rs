//! Redirect destinations
//!
//! | Page depth | Login           | Paywall            |
//! | Root       | `login.html`    | `programs.html`    |
//! | Nested     | `../login.html` | `../programs.html` |

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NavigationError;
use crate::Result;

/// Query marker appended to paywall redirects.
pub const WALL_MARKER: (&str, &str) = ("wall", "1");

const LOGIN_PAGE: &str = "login.html";
const PAYWALL_PAGE: &str = "programs.html";

/// Where the calling page sits relative to the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageDepth {
    /// `index.html`, `login.html`, ...
    Root,
    /// `dashboard/index.html`, `admin/index.html`, ...
    #[default]
    Nested,
}

impl PageDepth {
    fn prefix(&self) -> &'static str {
        match self {
            PageDepth::Root => "",
            PageDepth::Nested => "../",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPaths {
    pub login: String,
    pub paywall: String,
}

impl GuardPaths {
    pub fn new(login: impl Into<String>, paywall: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            paywall: paywall.into(),
        }
    }

    pub fn for_depth(depth: PageDepth) -> Self {
        let prefix = depth.prefix();
        Self {
            login: format!("{prefix}{LOGIN_PAGE}"),
            paywall: format!("{prefix}{PAYWALL_PAGE}"),
        }
    }

    pub fn login_target(&self) -> String {
        self.login.clone()
    }

    /// Paywall path with the `wall=1` marker appended.
    pub fn paywall_target(&self) -> String {
        let (base, fragment) = match self.paywall.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (self.paywall.as_str(), None),
        };

        let separator = if base.contains('?') { '&' } else { '?' };
        let (key, value) = WALL_MARKER;
        let mut target = format!("{base}{separator}{key}={value}");

        if let Some(fragment) = fragment {
            target.push('#');
            target.push_str(fragment);
        }
        target
    }
}

impl Default for GuardPaths {
    fn default() -> Self {
        Self::for_depth(PageDepth::default())
    }
}

/// Resolve a relative redirect target against the current page URL.
pub fn resolve_target(page_url: &str, target: &str) -> Result<Url> {
    let page = Url::parse(page_url)?;
    if page.cannot_be_a_base() {
        return Err(NavigationError::InvalidUrl(page_url.to_string()));
    }
    Ok(page.join(target)?)
}

/// Whether a URL carries the paywall marker.
pub fn has_wall_marker(url: &Url) -> bool {
    let (key, value) = WALL_MARKER;
    url.query_pairs().any(|(k, v)| k == key && v == value)
}
