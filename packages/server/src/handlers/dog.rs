use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument};

use crate::entity::dog::Dog;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::dog::{DogListQuery, DogReportRequest, validate_dog_report};
use crate::state::AppState;
use crate::store::DogFilters;

/// List listings, optionally filtered, newest first.
#[utoipa::path(
    get,
    path = "/api/dogs",
    tag = "Dogs",
    operation_id = "listDogs",
    summary = "Browse found-dog listings",
    params(DogListQuery),
    responses(
        (status = 200, description = "Listings, newest first", body = [Dog]),
    ),
)]
#[instrument(skip(state))]
pub async fn list_dogs(
    State(state): State<AppState>,
    Query(query): Query<DogListQuery>,
) -> Json<Vec<Dog>> {
    let filters = DogFilters {
        breed: query.breed,
        city: query.city,
        query: query.query,
    };
    Json(state.store.dogs_with_filters(&filters))
}

/// Fetch a single listing by id.
#[utoipa::path(
    get,
    path = "/api/dogs/{id}",
    tag = "Dogs",
    operation_id = "getDog",
    summary = "Fetch one listing",
    params(("id" = i32, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "The listing", body = Dog),
        (status = 404, description = "Unknown id (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(dog_id = id))]
pub async fn get_dog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Dog>, AppError> {
    state
        .store
        .dog_by_id(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Dog not found".into()))
}

/// Create a listing from a found-dog report.
#[utoipa::path(
    post,
    path = "/api/dogs",
    tag = "Dogs",
    operation_id = "createDog",
    summary = "Report a found dog",
    request_body = DogReportRequest,
    responses(
        (status = 201, description = "Listing created with status `active`", body = Dog),
        (status = 400, description = "Per-field validation errors (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(city = %payload.city))]
pub async fn create_dog(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DogReportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_dog = validate_dog_report(payload)?;

    let dog = state.store.create_dog(new_dog);
    info!(dog_id = dog.id, "Created listing");

    Ok((StatusCode::CREATED, Json(dog)))
}
