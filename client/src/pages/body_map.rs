//! Body map page: one entry per body system, each linking to the filtered
//! literature and people lists.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::href_with_query;

/// Links shown for one body system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SystemLink {
    pub label: String,
    pub literature_href: String,
    pub personel_href: String,
}

pub(crate) fn system_links(tags: &[String]) -> Vec<SystemLink> {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| SystemLink {
            label: capitalize(tag),
            literature_href: href_with_query("/list", &[("system", tag)]),
            personel_href: href_with_query("/personel", &[("system", tag)]),
        })
        .collect()
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn BodyMapPage() -> impl IntoView {
    let tags = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_tags().await {
            Ok(list) => tags.set(list),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <div class="body-map-page">
            <h1>"Body systems"</h1>
            <Show when=move || error.get().is_some()>
                <p class="body-map-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="body-map-page__systems">
                {move || {
                    system_links(&tags.get())
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li class="body-map-page__system">
                                    <A href=link.literature_href attr:class="body-map-page__system-name">
                                        {link.label}
                                    </A>
                                    <A href=link.personel_href attr:class="body-map-page__people">
                                        "people"
                                    </A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
#[path = "body_map_test.rs"]
mod tests;
