//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<SessionState>` via context at the app root.
//! Route guards and user-aware components read it to coordinate login
//! redirects and identity-dependent rendering; the bootstrap effect in
//! `app` writes it once the initial `/users/me` check resolves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// The current user plus whether the initial session check is still in
/// flight. Guards must not redirect while `loading` is true, or every
/// hard refresh would bounce through the login page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// State before the initial session check completes.
    pub fn checking() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// State after the session check resolves, signed in or not.
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name for the signed-in user, falling back to handle.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        Some(
            user.display_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| user.handle.clone()),
        )
    }
}
