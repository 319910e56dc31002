use serde::Serialize;

/// URLs of stored images, in upload order.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    /// Paths under `/uploads/` the stored files are served from.
    #[schema(example = json!(["/uploads/images-0192f3a0.jpg"]))]
    pub urls: Vec<String>,
}
