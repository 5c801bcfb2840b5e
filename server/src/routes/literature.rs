//! Literature and BibTeX routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::routes::auth::AuthUser;
use crate::services::literature::{self, LiteratureError, LiteratureInput};
use crate::services::tags::parse_tag_query;
use crate::state::AppState;

/// `?tags=a,b` filter shared by list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct TagQuery {
    pub tags: Option<String>,
}

impl TagQuery {
    pub(crate) fn tags(&self) -> Vec<String> {
        parse_tag_query(self.tags.as_deref())
    }
}

pub(crate) fn literature_error_to_status(err: LiteratureError) -> StatusCode {
    match err {
        LiteratureError::NotFound(_) => StatusCode::NOT_FOUND,
        LiteratureError::Invalid(_) => StatusCode::BAD_REQUEST,
        LiteratureError::Database(e) => {
            tracing::error!(error = %e, "literature query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/literature`: references carrying all requested tags.
pub async fn list_literature(
    State(state): State<AppState>,
    Query(query): Query<TagQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let entries = literature::list_literature(&state.pool, &query.tags())
        .await
        .map_err(literature_error_to_status)?;
    Ok(Json(json!({ "status": "success", "literature": entries })))
}

/// `POST /api/literature`: store a new, unapproved reference.
pub async fn create_literature(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<LiteratureInput>,
) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    let lit = body
        .into_literature(literature::new_ident(), &auth.user.name)
        .map_err(literature_error_to_status)?;
    literature::insert_literature(&state.pool, &lit)
        .await
        .map_err(literature_error_to_status)?;
    tracing::info!(ident = %lit.ident, user_id = %auth.user.id, "literature added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "message": "Paper added!", "uuid": lit.ident })),
    ))
}

/// `GET /api/literature/{ident}`
pub async fn get_literature(
    State(state): State<AppState>,
    Path(ident): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let lit = literature::get_literature(&state.pool, &ident)
        .await
        .map_err(literature_error_to_status)?;
    Ok(Json(json!({ "status": "success", "literature": lit })))
}

/// `PUT /api/literature/{ident}`: replace a reference; it returns to unapproved.
pub async fn replace_literature(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ident): Path<String>,
    Json(body): Json<LiteratureInput>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let lit = body
        .into_literature(ident, &auth.user.name)
        .map_err(literature_error_to_status)?;
    literature::replace_literature(&state.pool, &lit)
        .await
        .map_err(literature_error_to_status)?;
    tracing::info!(ident = %lit.ident, user_id = %auth.user.id, "literature replaced");
    Ok(Json(json!({ "status": "success", "message": "Paper modified!" })))
}

/// `DELETE /api/literature/{ident}`
pub async fn delete_literature(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(ident): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    literature::delete_literature(&state.pool, &ident)
        .await
        .map_err(literature_error_to_status)?;
    tracing::info!(%ident, user_id = %auth.user.id, "literature deleted");
    Ok(Json(json!({ "status": "success" })))
}

/// `GET /api/bibtex`: BibTeX export of the filtered listing.
pub async fn bibtex(State(state): State<AppState>, Query(query): Query<TagQuery>) -> Result<Response, StatusCode> {
    let entries = literature::list_literature(&state.pool, &query.tags())
        .await
        .map_err(literature_error_to_status)?;
    let body = literature::render_bibtex(&entries);
    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

#[cfg(test)]
#[path = "literature_test.rs"]
mod tests;
