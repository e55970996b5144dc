//! Join-directive derivation from URL query parameters.
//!
//! DESIGN
//! ======
//! `action` and `return_to` live in the address bar, not in component state.
//! Deriving them through one pure function per navigation keeps the join
//! flow's entry conditions deterministic: the same URL always produces the
//! same directive, and `return_to` is already sanitized by the time any
//! consumer sees it.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::util::redirect::sanitize_redirect_url;

/// Directive parsed from a community page's query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinQuery {
    /// True when `action=join` was requested. Any other `action` value is
    /// ignored rather than treated as an error.
    pub join_requested: bool,
    /// Safe relative path to send the caller back to after a join completes.
    /// `None` when absent or when the candidate failed sanitization.
    pub return_to: Option<String>,
}

impl JoinQuery {
    /// Derive the directive from the raw `action` and `return_to` params.
    pub fn derive(action: Option<&str>, return_to: Option<&str>) -> Self {
        Self {
            join_requested: action == Some("join"),
            return_to: return_to.and_then(sanitize_redirect_url),
        }
    }
}
