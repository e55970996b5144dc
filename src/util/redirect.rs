//! Open-redirect sanitizer for post-login and post-join navigation targets.
//!
//! DESIGN
//! ======
//! Redirect targets arrive from query strings and storage, both of which an
//! attacker can influence. Only same-origin relative paths survive
//! sanitization; everything else collapses to `None` and callers fall back
//! to a default route.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

/// Validate that a redirect target is a safe same-origin relative path.
///
/// Accepts the path (trimmed) when it:
/// - starts with `/` (relative path),
/// - does not start with `//` (protocol-relative URL),
/// - has no scheme colon before the first slash (`javascript:`, `data:`, ...).
///
/// Returns `None` for anything else, including empty input. Colons later in
/// the path are fine, so DID-bearing routes like
/// `/communities/did:plc:abc/settings` pass through unchanged.
pub fn sanitize_redirect_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.starts_with('/') {
        return None;
    }
    if trimmed.starts_with("//") {
        return None;
    }

    // Reject scheme-style colons appearing before the first slash. With the
    // leading-slash check above this is unreachable, but the target comes
    // from untrusted input and the checks are kept independent.
    let first_slash = trimmed.find('/');
    if let Some(colon) = trimmed.find(':') {
        if first_slash.is_none_or(|slash| colon < slash) {
            return None;
        }
    }

    Some(trimmed.to_owned())
}
