//! People list page, mounted at `/personel` with the same `?system=` prop as
//! the literature list.

use leptos::prelude::*;

use crate::components::person_card::PersonCard;
use crate::net::types::Person;
use crate::state::listing::ListingState;

#[component]
pub fn PersonelListPage(init_search: Option<String>) -> impl IntoView {
    let listing = RwSignal::new(ListingState::<Person>::with_search(init_search));

    let reload = move || {
        let search = listing.with_untracked(|l| l.search.clone());
        let seq = listing.try_update(|l| l.begin()).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_personel(&search).await;
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

    view! {
        <div class="list-page personel-list-page">
            <h1>"People"</h1>
            <form class="list-page__search" on:submit=on_search>
                <input
                    class="list-page__search-input"
                    type="search"
                    placeholder="immune"
                    prop:value=move || listing.with(|l| l.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        listing.update(|l| l.search = value);
                    }
                />
                <button class="btn" type="submit">"Search"</button>
            </form>
            <Show when=move || listing.with(|l| l.error.is_some())>
                <p class="list-page__error">{move || listing.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !listing.with(|l| l.loading)
                fallback=|| view! { <p>"Loading people..."</p> }
            >
                <div class="list-page__items">
                    {move || {
                        listing
                            .get()
                            .items
                            .into_iter()
                            .map(|person| view! { <PersonCard person=person/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
