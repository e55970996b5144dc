use super::*;

fn user(display_name: Option<&str>) -> User {
    User {
        did: "did:plc:alice".to_owned(),
        handle: "alice.example.com".to_owned(),
        display_name: display_name.map(str::to_owned),
        avatar: None,
        description: None,
    }
}

#[test]
fn checking_state_is_loading_and_anonymous() {
    let state = SessionState::checking();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn resolved_state_with_user_is_authenticated() {
    let state = SessionState::resolved(Some(user(Some("Alice"))));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn resolved_state_without_user_is_anonymous() {
    let state = SessionState::resolved(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.display_name(), None);
}

#[test]
fn display_name_prefers_profile_name_over_handle() {
    let state = SessionState::resolved(Some(user(Some("Alice"))));
    assert_eq!(state.display_name().as_deref(), Some("Alice"));
}

#[test]
fn display_name_falls_back_to_handle() {
    let named_empty = SessionState::resolved(Some(user(Some(""))));
    assert_eq!(named_empty.display_name().as_deref(), Some("alice.example.com"));

    let unnamed = SessionState::resolved(Some(user(None)));
    assert_eq!(unnamed.display_name().as_deref(), Some("alice.example.com"));
}
