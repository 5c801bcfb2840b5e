//! Submission form for a new literature reference.
//!
//! Shown on the literature page to signed-in users only. New references are
//! stored unapproved; the list shows them with a pending badge.

use leptos::prelude::*;

use crate::net::types::{NewLiterature, search_tags};

/// Raw form input as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LiteratureFormInput {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: String,
    pub doi: String,
    pub tags: String,
    pub summary: String,
    pub comments: String,
}

/// Shown after a successful submit; the new entry is already in the list
/// under an "Awaiting approval" badge.
pub(crate) const SUBMITTED_MESSAGE: &str = "Paper added! It is listed as pending until approved.";

/// Validate and normalize form input into a submission payload.
pub(crate) fn build_submission(input: &LiteratureFormInput) -> Result<NewLiterature, &'static str> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err("A title is required.");
    }
    let tags = search_tags(&input.tags);
    if tags.is_empty() {
        return Err("Add at least one body-system tag.");
    }
    let year = input.year.trim();
    if !year.is_empty() && !year.chars().all(|c| c.is_ascii_digit()) {
        return Err("Year must be numeric.");
    }
    Ok(NewLiterature {
        doi: input.doi.trim().to_owned(),
        tags,
        title: title.to_owned(),
        authors: input.authors.trim().to_owned(),
        summary: input.summary.trim().to_owned(),
        comments: input.comments.trim().to_owned(),
        journal: input.journal.trim().to_owned(),
        year: year.to_owned(),
    })
}

#[component]
pub fn LiteratureForm(on_submitted: Callback<()>) -> impl IntoView {
    let input = RwSignal::new(LiteratureFormInput::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_submission(&input.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Submitting...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_literature(&payload).await {
                Ok(_) => {
                    input.set(LiteratureFormInput::default());
                    info.set(SUBMITTED_MESSAGE.to_owned());
                    on_submitted.run(());
                }
                Err(e) => info.set(format!("Submission failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, on_submitted);
            busy.set(false);
        }
    };

    let field = move |label: &'static str, get: fn(&LiteratureFormInput) -> String, set: fn(&mut LiteratureFormInput, String)| {
        view! {
            <label class="literature-form__field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || input.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        input.update(|i| set(i, value));
                    }
                />
            </label>
        }
    };

    view! {
        <form class="literature-form" on:submit=on_submit>
            <h3>"Submit a reference"</h3>
            {field("Title", |i| i.title.clone(), |i, v| i.title = v)}
            {field("Authors", |i| i.authors.clone(), |i, v| i.authors = v)}
            {field("Journal", |i| i.journal.clone(), |i, v| i.journal = v)}
            {field("Year", |i| i.year.clone(), |i, v| i.year = v)}
            {field("DOI", |i| i.doi.clone(), |i, v| i.doi = v)}
            {field("Tags", |i| i.tags.clone(), |i, v| i.tags = v)}
            <label class="literature-form__field">
                <span>"Abstract"</span>
                <textarea
                    prop:value=move || input.with(|i| i.summary.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        input.update(|i| i.summary = value);
                    }
                ></textarea>
            </label>
            {field("Comments", |i| i.comments.clone(), |i, v| i.comments = v)}
            <button class="btn literature-form__submit" type="submit" disabled=move || busy.get()>
                "Submit"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="literature-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

#[cfg(test)]
#[path = "literature_form_test.rs"]
mod tests;
