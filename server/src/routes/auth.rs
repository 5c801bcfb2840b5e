//! Auth routes: Google OAuth flow and session management.

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::config::env_bool;
use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("GOOGLE_REDIRECT_URI")
        .map(|uri| redirect_uri_is_https(&uri))
        .unwrap_or(false)
}

fn redirect_uri_is_https(uri: &str) -> bool {
    uri.trim().starts_with("https://")
}

fn base_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(name, String::new(), secure);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// IDENTITY
// =============================================================================

/// Identity record consumed by the client session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityResponse {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub email: Option<String>,
}

impl From<session::SessionUser> for IdentityResponse {
    fn from(user: session::SessionUser) -> Self {
        Self {
            id: user.id.to_string(),
            display_name: user.name,
            photo_url: user.picture.unwrap_or_default(),
            email: user.email,
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/google`: redirect to the Google consent screen.
pub async fn google_redirect(State(state): State<AppState>) -> Response {
    let Some(config) = &state.google else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Google sign-in not configured").into_response();
    };

    let oauth_state = session::generate_token();
    let mut cookie = base_cookie(OAUTH_STATE_COOKIE_NAME, oauth_state.clone(), cookie_secure());
    cookie.set_max_age(Duration::minutes(10));

    let jar = CookieJar::new().add(cookie);
    (jar, Redirect::temporary(&config.authorize_url(&oauth_state))).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

pub(crate) fn auth_error_to_status(err: &auth_svc::AuthError) -> StatusCode {
    match err {
        auth_svc::AuthError::EmailNotVerified => StatusCode::BAD_REQUEST,
        auth_svc::AuthError::Transient(_) | auth_svc::AuthError::TokenExchange(_) | auth_svc::AuthError::GoogleApi(_) => {
            StatusCode::BAD_GATEWAY
        }
        auth_svc::AuthError::HttpClientBuild(_) | auth_svc::AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /auth/google/callback`: exchange code, verify e-mail, upsert user,
/// set the session cookie, redirect to `/`.
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(config) = &state.google else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Google sign-in not configured").into_response();
    };
    let secure = cookie_secure();

    if let Some(error) = params.error.as_deref() {
        tracing::warn!(%error, "google sign-in was declined");
        return (StatusCode::UNAUTHORIZED, "Google sign-in was declined").into_response();
    }

    // Verify OAuth CSRF state from cookie.
    let Some(callback_state) = params.state.as_deref() else {
        return (StatusCode::BAD_REQUEST, "missing oauth state").into_response();
    };
    let expected_state = jar
        .get(OAUTH_STATE_COOKIE_NAME)
        .map(Cookie::value)
        .unwrap_or_default();
    if expected_state.is_empty() || expected_state != callback_state {
        return (StatusCode::UNAUTHORIZED, "invalid oauth state").into_response();
    }
    let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "missing authorization code").into_response();
    };

    let profile = match sign_in(&state, config, code).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "google sign-in failed");
            return (auth_error_to_status(&e), e.to_string()).into_response();
        }
    };

    let user_id = match auth_svc::upsert_user(&state.pool, &profile).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "user upsert failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user").into_response();
        }
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };

    tracing::info!(%user_id, "user signed in");
    let jar = jar
        .add(base_cookie(COOKIE_NAME, token, secure))
        .add(expired_cookie(OAUTH_STATE_COOKIE_NAME, secure));
    (jar, Redirect::temporary("/")).into_response()
}

async fn sign_in(
    state: &AppState,
    config: &auth_svc::GoogleConfig,
    code: &str,
) -> Result<auth_svc::VerifiedUser, auth_svc::AuthError> {
    let access_token = auth_svc::exchange_code(&state.http, &state.oauth, config, code).await?;
    let user = auth_svc::fetch_google_user(&state.http, &state.oauth, &access_token).await?;
    auth_svc::verify_profile(user)
}

/// `GET /api/auth/me`: identity of the current user.
pub async fn me(auth: AuthUser) -> Json<IdentityResponse> {
    Json(auth.user.into())
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }

    let jar = CookieJar::new().add(expired_cookie(COOKIE_NAME, cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
