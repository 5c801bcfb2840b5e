use super::*;
use crate::state::session::Identity;

#[test]
fn greeting_uses_display_name_when_logged_in() {
    let mut session = SessionState::default();
    session.login(Identity::new("Alice", "")).unwrap();
    assert_eq!(greeting(&session), "Welcome back, Alice.");
}

#[test]
fn greeting_prompts_sign_in_when_logged_out() {
    assert_eq!(greeting(&SessionState::default()), "Sign in to submit literature.");
}
