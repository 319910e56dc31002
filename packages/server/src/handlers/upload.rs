use std::path::{Path as FsPath, PathBuf};

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::Json;
use tokio::io::AsyncWriteExt;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::models::upload::UploadResponse;
use crate::state::AppState;

/// Image extensions the reporting form may upload.
const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif"];

/// Body cap for the whole multipart request: three 5 MB files plus
/// multipart framing.
pub fn upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(16 * 1024 * 1024)
}

/// Store up to three report images and return their serving URLs.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Uploads",
    operation_id = "uploadImages",
    summary = "Upload report images",
    description = "Multipart upload of up to 3 image files (`images` fields), 5 MB each. \
        Stored files are served back under `/uploads/`.",
    request_body(content_type = "multipart/form-data", description = "Image files in `images` fields"),
    responses(
        (status = 200, description = "Stored file URLs, in upload order", body = UploadResponse),
        (status = 400, description = "Non-image or oversize file (UPLOAD_REJECTED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let uploads_dir = PathBuf::from(&state.config.uploads.dir);
    tokio::fs::create_dir_all(&uploads_dir)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create uploads dir: {e}")))?;

    let mut stored: Vec<PathBuf> = Vec::new();
    let mut urls = Vec::new();

    let result = async {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::UploadRejected(format!("Multipart error: {e}")))?
        {
            if field.name() != Some("images") {
                continue; // Ignore unknown fields.
            }

            if urls.len() >= state.config.uploads.max_files {
                return Err(AppError::UploadRejected(format!(
                    "At most {} images are allowed",
                    state.config.uploads.max_files
                )));
            }

            let extension = validate_image_field(&field)?;

            let file_name = format!("images-{}.{extension}", Uuid::new_v4());
            let dest = uploads_dir.join(&file_name);

            write_capped(field, &dest, state.config.uploads.max_file_size).await?;

            stored.push(dest);
            urls.push(format!("/uploads/{file_name}"));
        }

        if urls.is_empty() {
            return Err(AppError::UploadRejected("No image files provided".into()));
        }

        Ok(Json(UploadResponse { urls }))
    }
    .await;

    // A rejected request must not leave earlier files behind.
    if result.is_err() {
        for path in stored {
            let _ = tokio::fs::remove_file(path).await;
        }
    }

    result
}

/// Check declared content type and filename extension; returns the
/// extension to store the file under.
fn validate_image_field(
    field: &axum::extract::multipart::Field<'_>,
) -> Result<String, AppError> {
    let file_name = field
        .file_name()
        .ok_or_else(|| AppError::UploadRejected("Image field must have a filename".into()))?;

    let extension = FsPath::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        warn!(file_name, "Rejected upload with non-image extension");
        return Err(AppError::UploadRejected(
            "Only image files are allowed".into(),
        ));
    }

    // The declared content type must agree with the extension; clients that
    // lie about one usually lie about both.
    let declared = field.content_type();
    let expected = mime_guess::from_ext(&extension).first_or_octet_stream();
    if let Some(declared) = declared
        && declared != expected.essence_str()
        && !declared.starts_with("image/")
    {
        warn!(file_name, declared, "Rejected upload with non-image content type");
        return Err(AppError::UploadRejected(
            "Only image files are allowed".into(),
        ));
    }

    Ok(extension)
}

/// Stream one multipart field to disk, enforcing the per-file size cap
/// while reading.
async fn write_capped(
    mut field: axum::extract::multipart::Field<'_>,
    dest: &FsPath,
    max_size: u64,
) -> Result<(), AppError> {
    let mut file = tokio::fs::File::create(dest)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create upload file: {e}")))?;

    let mut total: u64 = 0;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::UploadRejected(format!("Upload read error: {e}")))?
    {
        total += chunk.len() as u64;
        if total > max_size {
            drop(file);
            let _ = tokio::fs::remove_file(dest).await;
            return Err(AppError::UploadRejected(format!(
                "File exceeds maximum size of {max_size} bytes"
            )));
        }
        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::Internal(format!("Upload write failed: {e}")))?;
    }

    file.flush()
        .await
        .map_err(|e| AppError::Internal(format!("Upload flush failed: {e}")))?;

    Ok(())
}
