//! One personnel record in the people view.

use leptos::prelude::*;

use crate::net::types::Person;

pub(crate) fn orcid_href(orcid: &str) -> Option<String> {
    let orcid = orcid.trim();
    if orcid.is_empty() {
        None
    } else {
        Some(format!("https://orcid.org/{orcid}"))
    }
}

#[component]
pub fn PersonCard(person: Person) -> impl IntoView {
    let orcid_link = orcid_href(&person.orcid);
    let mail = (!person.email.is_empty()).then(|| (format!("mailto:{}", person.email), person.email.clone()));
    let tags = person.tags.join(", ");

    view! {
        <article class="person-card">
            <h3 class="person-card__name">{person.name}</h3>
            <p class="person-card__affiliation">{person.affiliation}</p>
            <p class="person-card__tags">{tags}</p>
            {mail.map(|(href, email)| view! { <a class="person-card__email" href=href rel="external">{email}</a> })}
            {orcid_link.map(|href| view! {
                <a class="person-card__orcid" href=href rel="external" target="_blank">"ORCID"</a>
            })}
        </article>
    }
}

#[cfg(test)]
#[path = "person_card_test.rs"]
mod tests;
