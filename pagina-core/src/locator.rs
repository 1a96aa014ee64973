//! Record locators and per-part derivation

use crate::error::{PaginaError, Result};
use url::Url;

/// Path used in place of an empty or root path when deriving part locators
pub const ROOT_PLACEHOLDER: &str = "/page";

/// A validated absolute locator with a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    original: String,
    url: Url,
}

impl Locator {
    /// Parse an identifier, requiring an absolute URI with a host
    pub fn parse(identifier: &str) -> Result<Self> {
        let url = Url::parse(identifier).map_err(|e| invalid(identifier, e.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(invalid(identifier, "locator has no hierarchical path"));
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => {}
            _ => return Err(invalid(identifier, "locator has no host")),
        }

        Ok(Self {
            original: identifier.to_string(),
            url,
        })
    }

    /// The identifier exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Host component
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Path component
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Locator for the 0-based part `index`
    ///
    /// Part 0 keeps the original identifier. Later parts drop one trailing
    /// `/`, substitute [`ROOT_PLACEHOLDER`] for a root path and append
    /// `/part-{index + 1}`. Userinfo, query and fragment are dropped, and the
    /// host is written in the normalized (lower-case) form.
    pub fn for_part(&self, index: usize) -> String {
        if index == 0 {
            return self.original.clone();
        }

        let path = self.url.path();
        let base = path.strip_suffix('/').unwrap_or(path);
        let base = if base.is_empty() { ROOT_PLACEHOLDER } else { base };

        let mut derived = self.url.clone();
        derived.set_path(&format!("{base}/part-{}", index + 1));
        // parse() rejected hostless URLs, so clearing userinfo cannot fail
        let _ = derived.set_username("");
        let _ = derived.set_password(None);
        derived.set_query(None);
        derived.set_fragment(None);
        derived.into()
    }
}

fn invalid(identifier: &str, reason: impl Into<String>) -> PaginaError {
    PaginaError::InvalidLocator {
        identifier: identifier.to_string(),
        reason: reason.into(),
    }
}
