//! Tag vocabulary routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::routes::auth::AuthUser;
use crate::services::tags::{self, TagError};
use crate::state::AppState;

pub(crate) fn tag_error_to_status(err: TagError) -> StatusCode {
    match err {
        TagError::Empty => StatusCode::BAD_REQUEST,
        TagError::Database(e) => {
            tracing::error!(error = %e, "tag query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/tags`: every known tag, sorted.
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<String>>, StatusCode> {
    let tags = tags::list_tags(&state.pool).await.map_err(tag_error_to_status)?;
    Ok(Json(tags))
}

#[derive(Deserialize)]
pub struct AddTagBody {
    pub tag: String,
}

/// `POST /api/tags`: add a tag; 201 when new, 200 when it already existed.
pub async fn add_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<AddTagBody>,
) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    let (tag, created) = tags::add_tag(&state.pool, &body.tag)
        .await
        .map_err(tag_error_to_status)?;
    if created {
        tracing::info!(%tag, user_id = %auth.user.id, "tag added");
    }
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(serde_json::json!({ "status": "success", "tag": tag, "created": created }))))
}

#[cfg(test)]
#[path = "tags_test.rs"]
mod tests;
