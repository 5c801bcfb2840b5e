//! Login page with the Google sign-in button.
//!
//! The button leaves the SPA: the server runs the OAuth round trip and
//! redirects back to `/` with a session cookie, after which `App` installs
//! the identity into the session store.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_logged_in_redirect;

pub(crate) const GOOGLE_SIGN_IN_PATH: &str = "/auth/google";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_logged_in_redirect(session, use_navigate());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"BodyMap"</h1>
                <p class="login-card__subtitle">"Sign in to submit literature and people."</p>
                <a href=GOOGLE_SIGN_IN_PATH class="login-button" rel="external">
                    "Sign in with Google"
                </a>
            </div>
        </div>
    }
}
