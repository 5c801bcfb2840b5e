//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed
//! listing degrades to an error line on the page without breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LiteratureEntry, NewLiterature, Person};
use crate::routes::href_with_query;
use crate::state::session::Identity;

fn tagged_endpoint(path: &str, search: &str) -> String {
    let tags = super::types::search_tags(search).join(",");
    if tags.is_empty() {
        path.to_owned()
    } else {
        href_with_query(path, &[("tags", tags.as_str())])
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn literature_endpoint(search: &str) -> String {
    tagged_endpoint("/api/literature", search)
}

#[cfg(any(test, feature = "hydrate"))]
fn personel_endpoint(search: &str) -> String {
    tagged_endpoint("/api/personel", search)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Link to the BibTeX export of the references matching `search`.
#[must_use]
pub fn bibtex_href(search: &str) -> String {
    tagged_endpoint("/api/bibtex", search)
}

/// Fetch the signed-in identity from `/api/auth/me`.
/// Returns `None` if not authenticated, malformed, or on the server.
pub async fn fetch_current_identity() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let value = resp.json::<serde_json::Value>().await.ok()?;
        match Identity::from_json(&value) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::warn!("ignoring identity payload: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the tag list from `/api/tags`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a string list.
pub async fn fetch_tags() -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/tags")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("tags", resp.status()));
        }
        resp.json::<Vec<String>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch literature references matching the comma-separated tags in `search`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is malformed.
pub async fn fetch_literature(search: &str) -> Result<Vec<LiteratureEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&literature_endpoint(search))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("literature", resp.status()));
        }
        let body: super::types::LiteratureListResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.literature)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search;
        Err("not available on server".to_owned())
    }
}

/// Submit a new reference via `POST /api/literature`, returning its ident.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn submit_literature(entry: &NewLiterature) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/literature")
            .json(entry)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("submit", resp.status()));
        }
        let body: super::types::CreatedResponse = resp.json().await.map_err(|e| e.to_string())?;
        log::info!("{} ({})", body.message, body.uuid);
        Ok(body.uuid)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entry;
        Err("not available on server".to_owned())
    }
}

/// Fetch personnel records matching the comma-separated tags in `search`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is malformed.
pub async fn fetch_personel(search: &str) -> Result<Vec<Person>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&personel_endpoint(search))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("personel", resp.status()));
        }
        let body: super::types::PersonelListResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.personel)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search;
        Err("not available on server".to_owned())
    }
}
