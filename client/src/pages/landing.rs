//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

pub(crate) fn greeting(session: &SessionState) -> String {
    match session.name() {
        Some(name) => format!("Welcome back, {name}."),
        None => "Sign in to submit literature.".to_owned(),
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="landing-page">
            <h1>"BodyMap"</h1>
            <p class="landing-page__lede">
                "Browse published literature and researchers by body system."
            </p>
            <p class="landing-page__greeting">{move || session.with(greeting)}</p>
            <div class="landing-page__actions">
                <A href="/bodymap" attr:class="btn">"Open the body map"</A>
                <A href="/list" attr:class="btn">"All literature"</A>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
