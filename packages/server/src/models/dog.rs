use std::str::FromStr;

use serde::Deserialize;

use crate::entity::dog::{DogStatus, NewDog};
use crate::error::{AppError, FieldError};

/// Maximum images attached to a single report. Enforced here at the
/// boundary, not by the store.
pub const MAX_IMAGES: usize = 3;

/// Incoming found-dog report. Field names follow the reporting form.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DogReportRequest {
    /// Breed from the form's fixed selection list; omit for unknown.
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub date_found: String,
    #[serde(default)]
    pub time_found: String,
    #[serde(default)]
    pub finder_name: String,
    #[serde(default)]
    pub finder_phone: String,
    #[serde(default)]
    pub finder_email: String,
}

/// Validate a report and convert it to a store payload.
///
/// Collects every field failure instead of stopping at the first, so the
/// reporting form can re-display all of them at once.
pub fn validate_dog_report(payload: DogReportRequest) -> Result<NewDog, AppError> {
    let mut errors = Vec::new();

    let mut check = |failed: bool, field: &'static str, message: &str| {
        if failed {
            errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    };

    check(payload.color.trim().is_empty(), "color", "Color is required");
    check(
        payload.description.trim().chars().count() < 10,
        "description",
        "Please provide a detailed description (at least 10 characters)",
    );
    check(
        payload.image_urls.is_empty(),
        "imageUrls",
        "Please upload at least one image",
    );
    check(
        payload.image_urls.len() > MAX_IMAGES,
        "imageUrls",
        "At most three images are allowed",
    );
    check(
        payload.address.trim().chars().count() < 3,
        "address",
        "Address is required",
    );
    check(
        payload.city.trim().chars().count() < 2,
        "city",
        "City is required",
    );
    check(
        payload.latitude.trim().is_empty(),
        "latitude",
        "Please mark the location on the map",
    );
    check(
        payload.longitude.trim().is_empty(),
        "longitude",
        "Please mark the location on the map",
    );
    check(
        payload.date_found.trim().is_empty(),
        "dateFound",
        "Date found is required",
    );
    check(
        payload.time_found.trim().is_empty(),
        "timeFound",
        "Approximate time is required",
    );
    check(
        payload.finder_name.trim().chars().count() < 2,
        "finderName",
        "Your name is required",
    );
    check(
        payload.finder_phone.trim().chars().count() < 7,
        "finderPhone",
        "Valid phone number is required",
    );
    check(
        !is_valid_email(payload.finder_email.trim()),
        "finderEmail",
        "Valid email is required",
    );

    if !errors.is_empty() {
        return Err(AppError::FieldValidation(errors));
    }

    Ok(NewDog {
        breed: payload.breed.filter(|b| !b.trim().is_empty()),
        color: payload.color,
        description: payload.description,
        image_urls: payload.image_urls,
        address: payload.address,
        city: payload.city,
        latitude: payload.latitude,
        longitude: payload.longitude,
        date_found: payload.date_found,
        time_found: payload.time_found,
        finder_name: payload.finder_name,
        finder_phone: payload.finder_phone,
        finder_email: payload.finder_email,
    })
}

/// Shape check only: one `@`, non-empty local part, dotted domain.
/// Deliverability is the finder's problem.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize, Default, utoipa::IntoParams)]
pub struct DogListQuery {
    /// Exact breed to match.
    pub breed: Option<String>,
    /// City substring to match, case-insensitively.
    pub city: Option<String>,
    /// Free-text search across breed, color, description, address, city.
    pub query: Option<String>,
}

/// Admin request to change a listing's status.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateStatusRequest {
    /// One of `active`, `claimed`, `archived`.
    #[schema(example = "claimed")]
    pub status: String,
}

/// Parse the status field, rejecting anything outside the enumeration
/// before it can reach the store.
pub fn parse_status(payload: &UpdateStatusRequest) -> Result<DogStatus, AppError> {
    DogStatus::from_str(&payload.status)
        .map_err(|_| AppError::Validation("Invalid status".into()))
}
