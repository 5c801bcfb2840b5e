//! Personnel routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use crate::routes::auth::AuthUser;
use crate::routes::literature::TagQuery;
use crate::services::people::{self, PeopleError, PersonInput};
use crate::state::AppState;

pub(crate) fn people_error_to_status(err: PeopleError) -> StatusCode {
    match err {
        PeopleError::Invalid(_) => StatusCode::BAD_REQUEST,
        PeopleError::Database(e) => {
            tracing::error!(error = %e, "personel query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/personel`: people carrying all requested tags.
pub async fn list_people(
    State(state): State<AppState>,
    Query(query): Query<TagQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let personel = people::list_people(&state.pool, &query.tags())
        .await
        .map_err(people_error_to_status)?;
    Ok(Json(json!({ "status": "success", "personel": personel })))
}

/// `POST /api/personel`: store a new, unapproved person.
pub async fn create_person(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<PersonInput>,
) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    let person = body.into_person(&auth.user.name).map_err(people_error_to_status)?;
    people::insert_person(&state.pool, &person)
        .await
        .map_err(people_error_to_status)?;
    tracing::info!(ident = %person.ident, user_id = %auth.user.id, "person added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "message": "Person added!", "uuid": person.ident })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn people_error_invalid_is_400() {
        assert_eq!(people_error_to_status(PeopleError::Invalid("name is required")), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn people_error_database_is_500() {
        let err = PeopleError::Database(sqlx::Error::RowNotFound);
        assert_eq!(people_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
