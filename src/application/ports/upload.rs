// src/application/ports/upload.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// An image received from a client, already read into memory.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Location of an image stored by the hosting collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub url: String,
    pub public_id: String,
}

#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Hand the image to the hosting service and return its HTTPS URL.
    async fn upload(&self, image: ImagePayload) -> ApplicationResult<StoredImage>;
}
