//! One literature reference in the list view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::LiteratureEntry;
use crate::routes::href_with_query;

/// Citation line shown under the title: authors, journal and year.
pub(crate) fn citation_line(entry: &LiteratureEntry) -> String {
    [entry.authors.as_str(), entry.journal.as_str(), entry.year.as_str()]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// `(label, href)` for each non-blank tag, linking to the filtered list.
pub(crate) fn tag_links(tags: &[String]) -> Vec<(String, String)> {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| (tag.to_owned(), href_with_query("/list", &[("system", tag)])))
        .collect()
}

pub(crate) fn doi_href(doi: &str) -> Option<String> {
    let doi = doi.trim();
    if doi.starts_with("10.") {
        Some(format!("https://doi.org/{doi}"))
    } else {
        None
    }
}

#[component]
pub fn LiteratureCard(entry: LiteratureEntry) -> impl IntoView {
    let citation = citation_line(&entry);
    let doi_link = doi_href(&entry.doi);
    let pending = !entry.approved;
    let tags = tag_links(&entry.tags)
        .into_iter()
        .map(|(label, href)| view! { <A href=href attr:class="tag-chip">{label}</A> })
        .collect::<Vec<_>>();

    view! {
        <article class="literature-card">
            <h3 class="literature-card__title">{entry.title}</h3>
            <p class="literature-card__citation">{citation}</p>
            <Show when=move || pending>
                <span class="literature-card__pending">"Awaiting approval"</span>
            </Show>
            <p class="literature-card__abstract">{entry.summary}</p>
            <div class="literature-card__tags">{tags}</div>
            {doi_link.map(|href| view! {
                <a class="literature-card__doi" href=href rel="external" target="_blank">
                    "DOI"
                </a>
            })}
        </article>
    }
}

#[cfg(test)]
#[path = "literature_card_test.rs"]
mod tests;
