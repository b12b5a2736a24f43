// tests/support/mocks/upload.rs
use async_trait::async_trait;
use quillpost::application::{
    error::{ApplicationError, ApplicationResult},
    ports::upload::{ImagePayload, ImageUploader, StoredImage},
};
use std::sync::Mutex;

/// Accepts every image and remembers what it was given.
#[derive(Default)]
pub struct RecordingUploader {
    pub received: Mutex<Vec<ImagePayload>>,
}

impl RecordingUploader {
    pub fn received_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageUploader for RecordingUploader {
    async fn upload(&self, image: ImagePayload) -> ApplicationResult<StoredImage> {
        let name = image
            .file_name
            .clone()
            .unwrap_or_else(|| "image".to_string());
        self.received.lock().unwrap().push(image);
        Ok(StoredImage {
            url: format!("https://cdn.test/blog-posts/{name}"),
            public_id: format!("blog-posts/{name}"),
        })
    }
}

pub struct FailingUploader;

#[async_trait]
impl ImageUploader for FailingUploader {
    async fn upload(&self, _image: ImagePayload) -> ApplicationResult<StoredImage> {
        Err(ApplicationError::infrastructure("Invalid Signature"))
    }
}
