use super::*;

// =============================================================
// First-write-wins
// =============================================================

#[test]
fn remember_stores_path_when_empty() {
    let store = PendingRedirect::new(MemorySlot::default());
    store.remember("/communities/did:plc:abc?action=join");
    assert_eq!(store.take().as_deref(), Some("/communities/did:plc:abc?action=join"));
}

#[test]
fn remember_keeps_earliest_path() {
    let store = PendingRedirect::new(MemorySlot::default());
    store.remember("/first");
    store.remember("/second");
    assert_eq!(store.take().as_deref(), Some("/first"));
}

#[test]
fn remember_accepts_new_path_after_take() {
    let store = PendingRedirect::new(MemorySlot::default());
    store.remember("/first");
    let _ = store.take();
    store.remember("/second");
    assert_eq!(store.take().as_deref(), Some("/second"));
}

// =============================================================
// Read-once consumption
// =============================================================

#[test]
fn take_clears_the_stored_path() {
    let store = PendingRedirect::new(MemorySlot::default());
    store.remember("/communities");
    assert_eq!(store.take().as_deref(), Some("/communities"));
    assert_eq!(store.take(), None);
}

#[test]
fn take_on_empty_store_returns_none() {
    let store = PendingRedirect::new(MemorySlot::default());
    assert_eq!(store.take(), None);
}

// =============================================================
// Non-browser slot behavior
// =============================================================

#[test]
#[cfg(not(feature = "hydrate"))]
fn session_slot_reads_none_outside_browser() {
    // Native test builds have no sessionStorage; the slot degrades to empty.
    let store = PendingRedirect::new(SessionSlot);
    store.remember("/anywhere");
    assert_eq!(store.take(), None);
}
