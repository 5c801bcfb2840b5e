//! Fallback page for paths missing from the route table.
//!
//! Server rendering marks the response 404 so crawlers and clients see the
//! miss; in the browser the page is purely visual.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[cfg(all(test, feature = "ssr"))]
#[path = "not_found_test.rs"]
mod tests;

/// Set the 404 status on the pending server response. Returns `false` when
/// rendering outside a request, where there is no response to mark.
#[cfg(feature = "ssr")]
pub(crate) fn mark_not_found(options: Option<&leptos_axum::ResponseOptions>) -> bool {
    match options {
        Some(options) => {
            options.set_status(http::StatusCode::NOT_FOUND);
            true
        }
        None => false,
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    #[cfg(feature = "ssr")]
    mark_not_found(use_context::<leptos_axum::ResponseOptions>().as_ref());

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Nothing lives at " <code>{move || location.pathname.get()}</code> "."</p>
            <A href="/">"Back to the start"</A>
        </div>
    }
}
