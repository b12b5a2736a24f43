// src/application/commands/uploads.rs
use std::sync::Arc;

use crate::application::{
    dto::UploadedImageDto,
    error::{ApplicationError, ApplicationResult},
    ports::upload::{ImagePayload, ImageUploader},
};

/// Largest accepted image, in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const OVERSIZED_MESSAGE: &str = "File size must be less than 10MB";

pub struct UploadImageCommand {
    pub file: Option<ImagePayload>,
}

/// Validates images and forwards them to the hosting collaborator. Without an
/// uploader every request fails with an infrastructure error.
pub struct UploadService {
    uploader: Option<Arc<dyn ImageUploader>>,
}

impl UploadService {
    pub fn new(uploader: Option<Arc<dyn ImageUploader>>) -> Self {
        Self { uploader }
    }

    pub fn is_configured(&self) -> bool {
        self.uploader.is_some()
    }

    pub async fn upload_image(
        &self,
        command: UploadImageCommand,
    ) -> ApplicationResult<UploadedImageDto> {
        let uploader = self.uploader.as_ref().ok_or_else(|| {
            ApplicationError::infrastructure(
                "image uploads are not configured; set CLOUDINARY_CLOUD_NAME, \
                 CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET",
            )
        })?;

        let file = command
            .file
            .ok_or_else(|| ApplicationError::validation("No file provided"))?;
        validate_image(&file)?;

        let size = file.bytes.len();
        let stored = uploader.upload(file).await.map_err(|err| {
            tracing::error!(error = %err, size, "image upload failed");
            err.wrap("Upload failed")
        })?;

        tracing::info!(public_id = %stored.public_id, size, "image uploaded");
        Ok(stored.into())
    }
}

fn validate_image(file: &ImagePayload) -> ApplicationResult<()> {
    if file.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ApplicationError::validation(OVERSIZED_MESSAGE));
    }
    if !file.content_type.starts_with("image/") {
        return Err(ApplicationError::validation("File must be an image"));
    }
    Ok(())
}
