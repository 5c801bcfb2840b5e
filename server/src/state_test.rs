use super::*;

#[tokio::test]
async fn test_app_state_has_sign_in_disabled() {
    let state = test_helpers::test_app_state();
    assert!(state.google.is_none());
    assert_eq!(state.oauth, OAuthTuning::default());
}

#[tokio::test]
async fn test_app_state_with_google_is_configured() {
    let state = test_helpers::test_app_state_with_google();
    let google = state.google.expect("google config");
    assert_eq!(google.client_id, "test-client");
}
