use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{DeletedResponse, UserPayload},
        repo_types::User,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => {
            warn!(id = %raw, "invalid user id");
            Err(ApiError::BadRequest("Invalid user ID".into()))
        }
    }
}

fn decode_body(payload: Result<Json<UserPayload>, JsonRejection>) -> Result<UserPayload, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let msg = rejection.body_text();
            warn!(error = %msg, "malformed user body");
            Err(ApiError::BadRequest(msg))
        }
    }
}

fn store_error(op: &'static str, e: sqlx::Error) -> ApiError {
    error!(error = %e, op, "store operation failed");
    ApiError::from(e)
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let (username, email) = decode_body(payload)?.into_fields();

    let user = User::create(&state.db, &username, &email)
        .await
        .map_err(|e| store_error("create", e))?;

    info!(user_id = user.id, username = %user.username, "user created");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;

    match User::find_by_id(&state.db, id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(ApiError::NotFound("User not found".into())),
        // Lookup failures of any kind read as a missing user.
        Err(e) => {
            error!(error = %e, %id, "user lookup failed");
            Err(ApiError::NotFound("User not found".into()))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let (username, email) = decode_body(payload)?.into_fields();

    let user = User::save(&state.db, id, &username, &email)
        .await
        .map_err(|e| store_error("save", e))?;

    info!(user_id = user.id, "user saved");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = parse_id(&raw_id)?;

    let removed = User::delete(&state.db, id)
        .await
        .map_err(|e| store_error("delete", e))?;

    info!(user_id = id, removed, "user deleted");
    Ok(Json(DeletedResponse::default()))
}
