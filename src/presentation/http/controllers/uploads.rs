// src/presentation/http/controllers/uploads.rs
use crate::application::{commands::uploads::UploadImageCommand, dto::UploadedImageDto};
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::extractors::ImageUpload;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use utoipa::ToSchema;

/// Multipart body of an upload.
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/v1/uploads",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored on the CDN.", body = UploadedImageDto),
        (status = 400, description = "No file, too large, or not an image.", body = crate::presentation::http::error::UploadErrorResponse),
        (status = 500, description = "Uploads not configured or the CDN failed.", body = crate::presentation::http::error::UploadErrorResponse)
    ),
    tag = "Uploads"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    ImageUpload(file): ImageUpload,
) -> HttpResult<Json<UploadedImageDto>> {
    state
        .services
        .uploads
        .upload_image(UploadImageCommand { file })
        .await
        .map(Json)
        .map_err(|err| HttpError::from_error(err).bare())
}
