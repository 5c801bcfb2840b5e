//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and enforce schema
//! migrations before accepting API traffic. The initial migration seeds the
//! default body-system tags.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::env_parse;
use crate::services::literature::{self, Literature, LiteratureError};

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

fn db_max_connections() -> u32 {
    env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)
}

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(db_max_connections())
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}

/// The demo reference inserted into an empty literature table.
#[must_use]
pub fn sample_literature() -> Literature {
    Literature {
        ident: literature::new_ident(),
        doi: "1".into(),
        tags: vec!["misc".into()],
        submitter: "ACK".into(),
        approved: true,
        title: "A disproof of the Riemann Hypothesis".into(),
        authors: "A. C. Knapp".into(),
        summary: "We find a zero not on the critical line".into(),
        comments: "Better than Cats".into(),
        journal: "Annals of Mathematics".into(),
        year: "1978".into(),
    }
}

/// Insert the sample reference when the literature table is empty.
///
/// Returns whether a row was inserted.
///
/// # Errors
///
/// Returns an error if the count or insert query fails.
pub async fn seed_sample_literature(pool: &PgPool) -> Result<bool, LiteratureError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM literature")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }
    let sample = sample_literature();
    literature::insert_literature(pool, &sample).await?;
    info!(ident = %sample.ident, "seeded sample literature");
    Ok(true)
}
