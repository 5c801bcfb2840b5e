//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON payloads field for field. Every field on
//! the read side carries `#[serde(default)]` so older rows with missing
//! columns still render instead of failing the whole listing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A literature reference as returned by `/api/literature`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteratureEntry {
    /// 32-char hex identifier.
    pub ident: String,
    pub doi: String,
    /// Body-system tags (e.g. `"heart"`).
    pub tags: Vec<String>,
    pub submitter: String,
    /// Whether a curator has approved the reference.
    pub approved: bool,
    pub title: String,
    /// Comma-separated author list.
    pub authors: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub comments: String,
    pub journal: String,
    pub year: String,
}

/// A personnel record as returned by `/api/personel`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub ident: String,
    pub orcid: String,
    pub name: String,
    pub tags: Vec<String>,
    pub submitter: String,
    pub approved: bool,
    pub email: String,
    pub affiliation: String,
}

/// Body of `POST /api/literature`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewLiterature {
    pub doi: String,
    pub tags: Vec<String>,
    pub title: String,
    pub authors: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub comments: String,
    pub journal: String,
    pub year: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LiteratureListResponse {
    #[serde(default)]
    pub literature: Vec<LiteratureEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PersonelListResponse {
    #[serde(default)]
    pub personel: Vec<Person>,
}

/// Response to a create request.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub uuid: String,
}

/// Split a free-text search into the tag list sent to the server.
#[must_use]
pub fn search_tags(search: &str) -> Vec<String> {
    search
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
