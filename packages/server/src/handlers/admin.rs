use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};

use crate::entity::dog::Dog;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthSession;
use crate::extractors::json::AppJson;
use crate::models::dog::{UpdateStatusRequest, parse_status};
use crate::state::AppState;

/// Admin triage: replace a listing's status.
#[utoipa::path(
    patch,
    path = "/api/admin/dogs/{id}/status",
    tag = "Admin",
    operation_id = "updateDogStatus",
    summary = "Set a listing's status",
    params(("id" = i32, Path, description = "Listing ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated listing", body = Dog),
        (status = 400, description = "Status outside the enumeration (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "No session (SESSION_MISSING, SESSION_INVALID)", body = ErrorBody),
        (status = 403, description = "Not an administrator (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Unknown id (NOT_FOUND)", body = ErrorBody),
    ),
    security(("session" = [])),
)]
#[instrument(skip(state, session, payload), fields(dog_id = id, admin = %session.username))]
pub async fn update_dog_status(
    session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateStatusRequest>,
) -> Result<Json<Dog>, AppError> {
    session.require_admin()?;

    let status = parse_status(&payload)?;

    let dog = state
        .store
        .update_dog_status(id, status)
        .ok_or_else(|| AppError::NotFound("Dog not found".into()))?;

    info!(status = %status, "Listing status updated");
    Ok(Json(dog))
}
