//! Personnel records: researchers tagged with the body systems they work on.

#[cfg(test)]
#[path = "people_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::literature::{TextOrList, new_ident};
use super::tags::sanitize_tags;

#[derive(Debug, thiserror::Error)]
pub enum PeopleError {
    #[error("invalid person: {0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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

/// Submission body for `POST /api/personel`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonInput {
    pub orcid: Option<String>,
    pub name: Option<String>,
    pub tags: Option<TextOrList>,
    pub submitter: Option<String>,
    pub email: Option<String>,
    pub affiliation: Option<String>,
}

impl PersonInput {
    /// Normalize into a new, unapproved record.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` when the name is missing or blank.
    pub fn into_person(self, fallback_submitter: &str) -> Result<Person, PeopleError> {
        let name = self.name.map(|n| n.trim().to_owned()).unwrap_or_default();
        if name.is_empty() {
            return Err(PeopleError::Invalid("name is required"));
        }
        let tags = match self.tags {
            Some(TextOrList::Text(s)) => sanitize_tags(s.split(',')),
            Some(TextOrList::List(items)) => sanitize_tags(items),
            None => Vec::new(),
        };
        Ok(Person {
            ident: new_ident(),
            orcid: self.orcid.map(|o| o.trim().to_owned()).unwrap_or_default(),
            name,
            tags,
            submitter: self
                .submitter
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| fallback_submitter.to_owned()),
            approved: false,
            email: self.email.map(|e| e.trim().to_owned()).unwrap_or_default(),
            affiliation: self.affiliation.unwrap_or_default(),
        })
    }
}

fn row_to_person(row: &PgRow) -> Person {
    Person {
        ident: row.get("ident"),
        orcid: row.get("orcid"),
        name: row.get("name"),
        tags: row.get("tags"),
        submitter: row.get("submitter"),
        approved: row.get("approved"),
        email: row.get("email"),
        affiliation: row.get("affiliation"),
    }
}

/// List people carrying every tag in `tags`.
pub async fn list_people(pool: &PgPool, tags: &[String]) -> Result<Vec<Person>, PeopleError> {
    let rows = sqlx::query(
        r"SELECT ident, orcid, name, tags, submitter, approved, email, affiliation
          FROM personel
          WHERE tags @> $1::text[]
          ORDER BY name, ident",
    )
    .bind(tags)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(row_to_person).collect())
}

/// Insert a new person.
pub async fn insert_person(pool: &PgPool, person: &Person) -> Result<(), PeopleError> {
    sqlx::query(
        r"INSERT INTO personel (ident, orcid, name, tags, submitter, approved, email, affiliation)
          VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(&person.ident)
    .bind(&person.orcid)
    .bind(&person.name)
    .bind(&person.tags)
    .bind(&person.submitter)
    .bind(person.approved)
    .bind(&person.email)
    .bind(&person.affiliation)
    .execute(pool)
    .await?;
    Ok(())
}
