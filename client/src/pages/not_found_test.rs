use super::*;

#[test]
fn mark_not_found_without_response_is_noop() {
    assert!(!mark_not_found(None));
}

#[test]
fn mark_not_found_sets_status_on_response() {
    let options = leptos_axum::ResponseOptions::default();
    assert!(mark_not_found(Some(&options)));
}
