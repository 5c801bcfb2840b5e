//! Literature references: storage, tag filtering and BibTeX export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs `/api/literature` and `/api/bibtex`. Submissions arrive as loosely
//! typed JSON (authors and tags as a string or a list, year as a string or a
//! number) and are normalized into `Literature` before they reach Postgres.
//!
//! DESIGN
//! ======
//! Every insert and replace stores `approved = false`; approval is a
//! moderation step outside this API. Tag filters match references carrying
//! all requested tags (`tags @> $1`); an empty filter matches everything.

#[cfg(test)]
#[path = "literature_test.rs"]
mod tests;

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::tags::sanitize_tags;

#[derive(Debug, thiserror::Error)]
pub enum LiteratureError {
    #[error("literature not found: {0}")]
    NotFound(String),
    #[error("invalid literature: {0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A stored literature reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literature {
    pub ident: String,
    pub doi: String,
    pub tags: Vec<String>,
    pub submitter: String,
    pub approved: bool,
    pub title: String,
    pub authors: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub comments: String,
    pub journal: String,
    pub year: String,
}

/// A field accepted either as one string or as a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    fn joined(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::List(items) => items.join(","),
        }
    }

    fn items(self) -> Vec<String> {
        match self {
            Self::Text(s) => s.split(',').map(str::to_owned).collect(),
            Self::List(items) => items,
        }
    }
}

/// Publication year as sent by clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Number(i64),
    Text(String),
}

impl YearField {
    fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_owned(),
        }
    }
}

/// Submission body for create and replace.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LiteratureInput {
    pub doi: Option<String>,
    pub tags: Option<TextOrList>,
    pub submitter: Option<String>,
    pub title: Option<String>,
    pub authors: Option<TextOrList>,
    #[serde(rename = "abstract")]
    pub summary: Option<String>,
    pub comments: Option<String>,
    pub journal: Option<String>,
    pub year: Option<YearField>,
}

impl LiteratureInput {
    /// Normalize into a storable record under `ident`.
    ///
    /// `fallback_submitter` is used when the body names no submitter.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` when the title is missing or blank.
    pub fn into_literature(self, ident: String, fallback_submitter: &str) -> Result<Literature, LiteratureError> {
        let title = self.title.map(|t| t.trim().to_owned()).unwrap_or_default();
        if title.is_empty() {
            return Err(LiteratureError::Invalid("title is required"));
        }
        let submitter = self
            .submitter
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| fallback_submitter.to_owned());

        Ok(Literature {
            ident,
            doi: self.doi.unwrap_or_default(),
            tags: sanitize_tags(self.tags.map(TextOrList::items).unwrap_or_default()),
            submitter,
            approved: false,
            title,
            authors: self.authors.map(TextOrList::joined).unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            comments: self.comments.unwrap_or_default(),
            journal: self.journal.unwrap_or_default(),
            year: self.year.map(YearField::into_text).unwrap_or_default(),
        })
    }
}

/// Fresh 32-hex-character identifier.
#[must_use]
pub fn new_ident() -> String {
    Uuid::new_v4().simple().to_string()
}

const SELECT_COLUMNS: &str =
    "SELECT ident, doi, tags, submitter, approved, title, authors, abstract, comments, journal, year FROM literature";

fn row_to_literature(row: &PgRow) -> Literature {
    Literature {
        ident: row.get("ident"),
        doi: row.get("doi"),
        tags: row.get("tags"),
        submitter: row.get("submitter"),
        approved: row.get("approved"),
        title: row.get("title"),
        authors: row.get("authors"),
        summary: row.get("abstract"),
        comments: row.get("comments"),
        journal: row.get("journal"),
        year: row.get("year"),
    }
}

/// List references carrying every tag in `tags`, oldest first.
pub async fn list_literature(pool: &PgPool, tags: &[String]) -> Result<Vec<Literature>, LiteratureError> {
    let rows = sqlx::query(&format!("{SELECT_COLUMNS} WHERE tags @> $1::text[] ORDER BY created_at, ident"))
        .bind(tags)
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(row_to_literature).collect())
}

/// Fetch one reference by ident.
pub async fn get_literature(pool: &PgPool, ident: &str) -> Result<Literature, LiteratureError> {
    let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE ident = $1"))
        .bind(ident)
        .fetch_optional(pool)
        .await?;
    row.as_ref()
        .map(row_to_literature)
        .ok_or_else(|| LiteratureError::NotFound(ident.to_owned()))
}

/// Insert a new reference.
pub async fn insert_literature(pool: &PgPool, lit: &Literature) -> Result<(), LiteratureError> {
    sqlx::query(
        r"INSERT INTO literature
              (ident, doi, tags, submitter, approved, title, authors, abstract, comments, journal, year)
          VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(&lit.ident)
    .bind(&lit.doi)
    .bind(&lit.tags)
    .bind(&lit.submitter)
    .bind(lit.approved)
    .bind(&lit.title)
    .bind(&lit.authors)
    .bind(&lit.summary)
    .bind(&lit.comments)
    .bind(&lit.journal)
    .bind(&lit.year)
    .execute(pool)
    .await?;
    Ok(())
}

/// Replace every field of an existing reference, keeping its ident.
pub async fn replace_literature(pool: &PgPool, lit: &Literature) -> Result<(), LiteratureError> {
    let result = sqlx::query(
        r"UPDATE literature
          SET doi = $2, tags = $3, submitter = $4, approved = $5, title = $6,
              authors = $7, abstract = $8, comments = $9, journal = $10, year = $11
          WHERE ident = $1",
    )
    .bind(&lit.ident)
    .bind(&lit.doi)
    .bind(&lit.tags)
    .bind(&lit.submitter)
    .bind(lit.approved)
    .bind(&lit.title)
    .bind(&lit.authors)
    .bind(&lit.summary)
    .bind(&lit.comments)
    .bind(&lit.journal)
    .bind(&lit.year)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(LiteratureError::NotFound(lit.ident.clone()));
    }
    Ok(())
}

/// Delete a reference by ident.
pub async fn delete_literature(pool: &PgPool, ident: &str) -> Result<(), LiteratureError> {
    let result = sqlx::query("DELETE FROM literature WHERE ident = $1")
        .bind(ident)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(LiteratureError::NotFound(ident.to_owned()));
    }
    Ok(())
}

/// Render one reference as a BibTeX `@misc` entry.
#[must_use]
pub fn bibtex_entry(lit: &Literature) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "@misc{{{},", lit.ident);
    let fields = [
        ("title", lit.title.clone()),
        ("author", lit.authors.clone()),
        ("year", lit.year.clone()),
        ("journal", lit.journal.clone()),
        ("doi", lit.doi.clone()),
        ("keywords", lit.tags.join(", ")),
        ("annote", lit.comments.clone()),
    ];
    for (name, value) in fields {
        let _ = writeln!(out, "    {name} = {{{value}}},");
    }
    out.push_str("}\n");
    out
}

/// Render a listing, entries separated by a blank line.
#[must_use]
pub fn render_bibtex(entries: &[Literature]) -> String {
    entries.iter().map(bibtex_entry).collect::<Vec<_>>().join("\n")
}
