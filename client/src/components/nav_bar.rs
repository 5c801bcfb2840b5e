//! Top navigation bar with page links and the session badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every page. It is the only place that triggers `logout`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let user_name = move || session.with(|s| s.name().map(str::to_owned)).unwrap_or_default();
    let photo = move || session.with(|s| s.photo_url().map(str::to_owned)).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            session.update(SessionState::logout);
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        });
    };

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">"BodyMap"</A>
            <A href="/bodymap">"Body map"</A>
            <A href="/list">"Literature"</A>
            <A href="/personel">"People"</A>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || session.with(SessionState::is_logged_in)
                fallback=|| view! { <A href="/login" attr:class="nav-bar__login">"Sign in"</A> }
            >
                <Show when=move || !photo().is_empty()>
                    <img class="nav-bar__avatar" src=photo alt="" />
                </Show>
                <span class="nav-bar__user">{user_name}</span>
                <button class="btn nav-bar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
