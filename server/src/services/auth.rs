//! Google OAuth service: authorize URL, code exchange, profile fetch, user upsert.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes::auth` drives the browser through the authorization-code flow;
//! this module does the server-to-Google calls and turns the verified profile
//! into a `users` row.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and 5xx answers from Google are `Transient` and are
//! retried with linear back-off (`attempt * retry_base_ms`). Anything else
//! (a rejected code, an unverified e-mail) fails on the first attempt.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::config::env_parse;

pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const GOOGLE_SCOPES: &str = "openid email profile";

const DEFAULT_OAUTH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_OAUTH_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_OAUTH_RETRIES: u32 = 2;
const DEFAULT_OAUTH_RETRY_BASE_MS: u64 = 200;

/// Google OAuth configuration loaded from environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GoogleConfig {
    /// Load from `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `GOOGLE_REDIRECT_URI`.
    /// Returns `None` if any are missing (sign-in will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`. Blank values
    /// count as missing.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Some(Self {
            client_id: read("GOOGLE_CLIENT_ID")?,
            client_secret: read("GOOGLE_CLIENT_SECRET")?,
            redirect_uri: read("GOOGLE_REDIRECT_URI")?,
        })
    }

    /// Build the Google authorization URL carrying the CSRF `state`.
    #[must_use]
    pub fn authorize_url(&self, state: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", GOOGLE_SCOPES)
            .append_pair("state", state)
            .finish();
        format!("{GOOGLE_AUTHORIZE_URL}?{query}")
    }
}

/// Timeout and retry knobs for calls to Google.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OAuthTuning {
    pub request_secs: u64,
    pub connect_secs: u64,
    /// Extra attempts after the first one fails transiently.
    pub retries: u32,
    pub retry_base_ms: u64,
}

impl Default for OAuthTuning {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_OAUTH_TIMEOUT_SECS,
            connect_secs: DEFAULT_OAUTH_CONNECT_TIMEOUT_SECS,
            retries: DEFAULT_OAUTH_RETRIES,
            retry_base_ms: DEFAULT_OAUTH_RETRY_BASE_MS,
        }
    }
}

impl OAuthTuning {
    /// Load from `OAUTH_TIMEOUT_SECS`, `OAUTH_CONNECT_TIMEOUT_SECS`,
    /// `OAUTH_RETRIES` and `OAUTH_RETRY_BASE_MS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_secs: env_parse("OAUTH_TIMEOUT_SECS", DEFAULT_OAUTH_TIMEOUT_SECS),
            connect_secs: env_parse("OAUTH_CONNECT_TIMEOUT_SECS", DEFAULT_OAUTH_CONNECT_TIMEOUT_SECS),
            retries: env_parse("OAUTH_RETRIES", DEFAULT_OAUTH_RETRIES),
            retry_base_ms: env_parse("OAUTH_RETRY_BASE_MS", DEFAULT_OAUTH_RETRY_BASE_MS),
        }
    }

    /// Back-off before retry number `attempt` (1-based).
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(u64::from(attempt) * self.retry_base_ms)
    }
}

/// Build the HTTP client used for Google calls.
///
/// # Errors
///
/// Returns `HttpClientBuild` if the TLS backend cannot be initialized.
pub fn build_http_client(tuning: &OAuthTuning) -> Result<reqwest::Client, AuthError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(tuning.request_secs))
        .connect_timeout(Duration::from_secs(tuning.connect_secs))
        .build()
        .map_err(|e| AuthError::HttpClientBuild(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Profile returned by Google's userinfo endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoogleUser {
    pub sub: String,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub name: Option<String>,
    pub given_name: Option<String>,
    pub picture: Option<String>,
}

/// A Google profile that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("transient google error: {0}")]
    Transient(String),
    #[error("google token exchange failed: {0}")]
    TokenExchange(String),
    #[error("google api error: {0}")]
    GoogleApi(String),
    #[error("user email not available or not verified by Google")]
    EmailNotVerified,
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl AuthError {
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

fn classify_transport(err: &reqwest::Error) -> AuthError {
    AuthError::Transient(err.to_string())
}

/// Run `op`, retrying transient failures up to `tuning.retries` extra times.
pub async fn with_retry<T, F, Fut>(tuning: &OAuthTuning, what: &str, mut op: F) -> Result<T, AuthError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AuthError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < tuning.retries => {
                attempt += 1;
                warn!(error = %e, attempt, total = tuning.retries, what, "google call failed; retrying");
                tokio::time::sleep(tuning.backoff(attempt)).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Exchange an authorization code for an access token.
pub async fn exchange_code(
    http: &reqwest::Client,
    tuning: &OAuthTuning,
    config: &GoogleConfig,
    code: &str,
) -> Result<String, AuthError> {
    with_retry(tuning, "token exchange", move || async move {
        let resp = http
            .post(GOOGLE_TOKEN_URL)
            .header("Accept", "application/json")
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
                ("redirect_uri", config.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| classify_transport(&e))?;
        if status.is_server_error() {
            return Err(AuthError::Transient(format!("{status}: {body}")));
        }
        if !status.is_success() {
            return Err(AuthError::TokenExchange(format!("{status}: {body}")));
        }
        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
        Ok(token.access_token)
    })
    .await
}

/// Fetch the signed-in user's Google profile.
pub async fn fetch_google_user(
    http: &reqwest::Client,
    tuning: &OAuthTuning,
    access_token: &str,
) -> Result<GoogleUser, AuthError> {
    with_retry(tuning, "userinfo", move || async move {
        let resp = http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = resp.status();
        if status.is_server_error() {
            return Err(AuthError::Transient(status.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::GoogleApi(format!("{status}: {body}")));
        }
        resp.json::<GoogleUser>()
            .await
            .map_err(|e| AuthError::GoogleApi(e.to_string()))
    })
    .await
}

/// Require a verified e-mail and pick a display name.
///
/// # Errors
///
/// Returns `EmailNotVerified` unless Google marks the e-mail as verified, and
/// `GoogleApi` when the profile carries no subject id.
pub fn verify_profile(user: GoogleUser) -> Result<VerifiedUser, AuthError> {
    if user.sub.trim().is_empty() {
        return Err(AuthError::GoogleApi("profile has no subject id".into()));
    }
    let email = match (user.email_verified, user.email) {
        (Some(true), Some(email)) if !email.trim().is_empty() => email,
        _ => return Err(AuthError::EmailNotVerified),
    };
    let name = [user.given_name, user.name]
        .into_iter()
        .flatten()
        .map(|n| n.trim().to_owned())
        .find(|n| !n.is_empty())
        .unwrap_or_else(|| email.clone());
    Ok(VerifiedUser { sub: user.sub, name, email, picture: user.picture.filter(|p| !p.is_empty()) })
}

/// Upsert a user from their verified Google profile. Returns the user's UUID.
pub async fn upsert_user(pool: &PgPool, user: &VerifiedUser) -> Result<Uuid, AuthError> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r"INSERT INTO users (google_sub, name, email, picture)
          VALUES ($1, $2, $3, $4)
          ON CONFLICT (google_sub) DO UPDATE
              SET name = EXCLUDED.name, email = EXCLUDED.email, picture = EXCLUDED.picture
          RETURNING id",
    )
    .bind(&user.sub)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.picture)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
