//! Blocking confirmation prompt for destructive admin actions.
//!
//! Outside the browser the answer is always no, so server-rendered code
//! can never fall through into a destructive call.

/// Ask the user to confirm before proceeding.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .map(|w| w.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
