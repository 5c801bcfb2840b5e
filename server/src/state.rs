//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool, the optional Google sign-in configuration, and
//! the HTTP client (with its timeout and retry tuning) used to talk to Google.

use sqlx::PgPool;

use crate::services::auth::{GoogleConfig, OAuthTuning};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Google OAuth configuration. `None` disables sign-in.
    pub google: Option<GoogleConfig>,
    /// Client for calls to Google, built with `oauth` timeouts.
    pub http: reqwest::Client,
    pub oauth: OAuthTuning,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, google: Option<GoogleConfig>, http: reqwest::Client, oauth: OAuthTuning) -> Self {
        Self { pool, google, http, oauth }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
