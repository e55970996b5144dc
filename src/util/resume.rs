//! Pending-redirect store bridging the login round trip.
//!
//! DESIGN
//! ======
//! Login happens via a full-document OAuth redirect, so any in-memory state
//! is lost before the user returns. The intended destination survives in
//! `sessionStorage`: first write wins, and reads consume the value so a
//! stored path can trigger at most one navigation.
//!
//! Values read back are untrusted (storage is shared with anything running
//! on the origin); consumers run them through
//! [`sanitize_redirect_url`](crate::util::redirect::sanitize_redirect_url)
//! before navigating.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "opensocial_pending_redirect";

/// Raw single-value storage behind the pending-redirect store.
pub trait RedirectSlot {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn clear(&self);
}

/// First-write-wins, read-once store for a post-login destination.
pub struct PendingRedirect<S> {
    slot: S,
}

impl<S: RedirectSlot> PendingRedirect<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Record `path` as the pending destination unless one is already stored.
    ///
    /// Keeping the earliest value means the page that first sent the user to
    /// login decides where they land afterwards, even if later navigation
    /// attempts also try to stash a destination.
    pub fn remember(&self, path: &str) {
        if self.slot.read().is_none() {
            self.slot.write(path);
        }
    }

    /// Take the pending destination, clearing it in the same step.
    ///
    /// Returns `None` when nothing is pending. A second call returns `None`
    /// until something is remembered again, so one stored path never causes
    /// two navigations.
    pub fn take(&self) -> Option<String> {
        let value = self.slot.read();
        if value.is_some() {
            self.slot.clear();
        }
        value
    }
}

/// Browser `sessionStorage` slot. No-ops outside the browser so SSR paths
/// stay deterministic.
#[derive(Clone, Copy, Default)]
pub struct SessionSlot;

impl RedirectSlot for SessionSlot {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// In-memory slot for tests and non-browser callers.
#[derive(Default)]
pub struct MemorySlot(std::cell::RefCell<Option<String>>);

impl RedirectSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.0.borrow_mut() = Some(value.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Record `path` in the session-backed store unless a destination is already
/// pending.
pub fn remember(path: &str) {
    PendingRedirect::new(SessionSlot).remember(path);
}

/// Take the pending destination from the session-backed store.
pub fn take() -> Option<String> {
    PendingRedirect::new(SessionSlot).take()
}
