//! CSRF token lookup for state-changing requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server sets a non-httpOnly `csrf-token` cookie on GET responses and
//! expects its value echoed back in an `x-csrf-token` header on every
//! mutating request. The cookie parse is kept pure so it stays testable
//! without a browser.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

/// Cookie the server stores the token under.
pub const CSRF_COOKIE: &str = "csrf-token";

/// Header mutating requests carry the token in.
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Extract the CSRF token from a raw `document.cookie` string.
///
/// Cookie strings look like `a=1; csrf-token=abc123; b=2`. Returns `None`
/// when the cookie is absent or has no value.
pub fn token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split("; ")
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}

/// Whether requests with this HTTP method must carry the CSRF header.
pub fn method_requires_token(method: &str) -> bool {
    matches!(method, "POST" | "PUT" | "DELETE" | "PATCH")
}

/// Read the CSRF token from the live `document.cookie`.
///
/// Returns `None` outside the browser or when the cookie is missing.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let document = web_sys::window()?.document()?;
        let html_doc = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html_doc.cookie().ok()?;
        token_from_cookies(&cookies)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
