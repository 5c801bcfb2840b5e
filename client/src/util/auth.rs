//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page uses these to step aside once a session exists, and the
//! bootstrap uses them to install the identity fetched from the server.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Identity, SessionState};

/// Whether the login page should redirect to the landing page.
#[must_use]
pub fn should_leave_login(session: &SessionState) -> bool {
    session.is_logged_in()
}

/// Redirect to `/` whenever a session is present.
pub fn install_logged_in_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_leave_login) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Install `identity` into the session store, logging a rejected identity.
pub fn apply_identity(session: RwSignal<SessionState>, identity: Identity) {
    session.update(|s| {
        if let Err(e) = s.login(identity) {
            log::warn!("sign-in produced an unusable identity: {e}");
        }
    });
}
