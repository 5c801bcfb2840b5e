//! Literature list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/list`. The route table turns `?system=<tag>` into the
//! `init_search` prop, which seeds the search box and the first fetch.

use leptos::prelude::*;

use crate::components::literature_card::LiteratureCard;
use crate::components::literature_form::LiteratureForm;
use crate::net::api::bibtex_href;
use crate::net::types::LiteratureEntry;
use crate::state::listing::ListingState;
use crate::state::session::SessionState;

pub(crate) fn result_summary(count: usize, search: &str) -> String {
    let noun = if count == 1 { "reference" } else { "references" };
    let search = search.trim();
    if search.is_empty() {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun} tagged {search}")
    }
}

#[component]
pub fn LiteratureListPage(init_search: Option<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let listing = RwSignal::new(ListingState::<LiteratureEntry>::with_search(init_search));

    let reload = move || {
        let search = listing.with_untracked(|l| l.search.clone());
        let seq = listing.try_update(|l| l.begin()).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_literature(&search).await;
            listing.update(|l| {
                l.finish(seq, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (search, seq);
    };

    Effect::new(move || reload());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        reload();
    };
    let on_submitted = Callback::new(move |()| reload());

    view! {
        <div class="list-page literature-list-page">
            <h1>"Literature"</h1>
            <form class="list-page__search" on:submit=on_search>
                <input
                    class="list-page__search-input"
                    type="search"
                    placeholder="heart, lung"
                    prop:value=move || listing.with(|l| l.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        listing.update(|l| l.search = value);
                    }
                />
                <button class="btn" type="submit">"Search"</button>
                <a
                    class="btn list-page__bibtex"
                    rel="external"
                    href=move || listing.with(|l| bibtex_href(&l.search))
                >
                    "BibTeX"
                </a>
            </form>
            <Show when=move || listing.with(|l| l.error.is_some())>
                <p class="list-page__error">{move || listing.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !listing.with(|l| l.loading)
                fallback=|| view! { <p>"Loading literature..."</p> }
            >
                <p class="list-page__summary">
                    {move || listing.with(|l| result_summary(l.items.len(), &l.search))}
                </p>
                <div class="list-page__items">
                    {move || {
                        listing
                            .get()
                            .items
                            .into_iter()
                            .map(|entry| view! { <LiteratureCard entry=entry/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
            <Show when=move || session.with(SessionState::is_logged_in)>
                <LiteratureForm on_submitted=on_submitted/>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "literature_list_test.rs"]
mod tests;
