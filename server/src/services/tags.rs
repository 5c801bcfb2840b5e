//! Tag vocabulary: sanitizing, listing and adding body-system tags.
//!
//! DESIGN
//! ======
//! Tags are compared after Unicode NFC normalization, trimming and
//! lowercasing, so `" Heart"` and `"heart"` name the same system. The same
//! sanitizer is applied to query filters and to tags stored on records.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tests;

use sqlx::PgPool;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("tag is empty after sanitizing")]
    Empty,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Normalize a single tag: NFC, trim, lowercase.
#[must_use]
pub fn sanitize_tag(tag: &str) -> String {
    tag.nfc().collect::<String>().trim().to_lowercase()
}

/// Sanitize every tag and drop the ones that end up empty.
pub fn sanitize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| sanitize_tag(t.as_ref()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse a `?tags=a,b` filter. An absent or blank filter yields no tags.
#[must_use]
pub fn parse_tag_query(raw: Option<&str>) -> Vec<String> {
    raw.map_or_else(Vec::new, |raw| sanitize_tags(raw.split(',')))
}

/// List every known tag, sorted.
pub async fn list_tags(pool: &PgPool) -> Result<Vec<String>, TagError> {
    let tags = sqlx::query_scalar::<_, String>("SELECT tag_name FROM tags ORDER BY tag_name")
        .fetch_all(pool)
        .await?;
    Ok(tags)
}

/// Add a tag. Returns the sanitized tag and whether it was new.
pub async fn add_tag(pool: &PgPool, raw: &str) -> Result<(String, bool), TagError> {
    let tag = sanitize_tag(raw);
    if tag.is_empty() {
        return Err(TagError::Empty);
    }
    let result = sqlx::query("INSERT INTO tags (tag_name) VALUES ($1) ON CONFLICT (tag_name) DO NOTHING")
        .bind(&tag)
        .execute(pool)
        .await?;
    Ok((tag, result.rows_affected() == 1))
}
