use super::*;

fn alice() -> Identity {
    Identity::new("Alice", "https://example.com/alice.png")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_logged_in());
    assert_eq!(state.name(), None);
    assert_eq!(state.photo_url(), None);
    assert!(state.identity().is_none());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_installs_identity() {
    let mut state = SessionState::default();
    state.login(alice()).unwrap();
    assert!(state.is_logged_in());
    assert_eq!(state.name(), Some("Alice"));
    assert_eq!(state.photo_url(), Some("https://example.com/alice.png"));
}

#[test]
fn login_then_logout_clears_every_getter() {
    let mut state = SessionState::default();
    state.login(alice()).unwrap();
    state.logout();
    assert!(!state.is_logged_in());
    assert_eq!(state.name(), None);
    assert_eq!(state.photo_url(), None);
    assert_eq!(state, SessionState::default());
}

#[test]
fn repeated_login_logout_cycles_never_leave_stale_data() {
    let mut state = SessionState::default();
    for name in ["Alice", "Bob", "Carol"] {
        state.login(Identity::new(name, format!("https://example.com/{name}.png"))).unwrap();
        assert_eq!(state.name(), Some(name));
        state.logout();
        assert!(!state.is_logged_in());
        assert_eq!(state.name(), None);
        assert_eq!(state.photo_url(), None);
    }
}

#[test]
fn login_replaces_previous_identity() {
    let mut state = SessionState::default();
    state.login(alice()).unwrap();
    state.login(Identity::new("Bob", "")).unwrap();
    assert_eq!(state.name(), Some("Bob"));
    assert_eq!(state.photo_url(), Some(""));
}

#[test]
fn logout_when_logged_out_is_noop() {
    let mut state = SessionState::default();
    state.logout();
    assert!(!state.is_logged_in());
}

#[test]
fn login_rejects_blank_display_name_and_keeps_state() {
    let mut state = SessionState::default();
    state.login(alice()).unwrap();
    let err = state.login(Identity::new("   ", "x")).unwrap_err();
    assert!(matches!(err, SessionError::MalformedIdentity(_)));
    assert_eq!(state.name(), Some("Alice"));
}

#[test]
fn rejected_login_on_empty_session_stays_logged_out() {
    let mut state = SessionState::default();
    assert!(state.login(Identity::new("", "")).is_err());
    assert!(!state.is_logged_in());
}

// =============================================================
// Identity::from_json
// =============================================================

#[test]
fn from_json_reads_camel_case_fields() {
    let value = serde_json::json!({
        "id": "u-1",
        "displayName": "Alice",
        "photoURL": "https://example.com/a.png",
        "email": "alice@example.com"
    });
    let identity = Identity::from_json(&value).unwrap();
    assert_eq!(identity.id.as_deref(), Some("u-1"));
    assert_eq!(identity.display_name, "Alice");
    assert_eq!(identity.photo_url, "https://example.com/a.png");
    assert_eq!(identity.email.as_deref(), Some("alice@example.com"));
}

#[test]
fn from_json_defaults_missing_photo() {
    let identity = Identity::from_json(&serde_json::json!({ "displayName": "Alice" })).unwrap();
    assert_eq!(identity.photo_url, "");
    assert!(identity.id.is_none());
}

#[test]
fn from_json_accepts_null_photo() {
    let value = serde_json::json!({ "displayName": "Alice", "photoURL": null });
    let identity = Identity::from_json(&value).unwrap();
    assert_eq!(identity.photo_url, "");

    let mut state = SessionState::default();
    state.login(identity).unwrap();
    assert!(state.is_logged_in());
    assert_eq!(state.photo_url(), Some(""));
}

#[test]
fn from_json_rejects_null() {
    assert_eq!(Identity::from_json(&serde_json::Value::Null), Err(SessionError::MissingIdentity));
}

#[test]
fn from_json_rejects_missing_display_name() {
    let err = Identity::from_json(&serde_json::json!({ "photoURL": "x" })).unwrap_err();
    assert!(matches!(err, SessionError::MalformedIdentity(_)));
}

#[test]
fn from_json_rejects_non_object() {
    let err = Identity::from_json(&serde_json::json!("Alice")).unwrap_err();
    assert!(matches!(err, SessionError::MalformedIdentity(_)));
}

#[test]
fn identity_serializes_with_wire_names() {
    let json = serde_json::to_value(alice()).unwrap();
    assert_eq!(json["displayName"], "Alice");
    assert_eq!(json["photoURL"], "https://example.com/alice.png");
    assert!(json.get("id").is_none());
}
