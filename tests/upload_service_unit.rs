use std::sync::Arc;

use bytes::Bytes;
use quillpost::application::commands::uploads::{
    MAX_UPLOAD_BYTES, UploadImageCommand, UploadService,
};
use quillpost::application::error::ApplicationError;
use quillpost::application::ports::upload::ImagePayload;

mod support;

use support::{FailingUploader, RecordingUploader};

fn image(content_type: &str, size: usize) -> ImagePayload {
    ImagePayload {
        file_name: Some("cover.png".into()),
        content_type: content_type.into(),
        bytes: Bytes::from(vec![0u8; size]),
    }
}

fn validation_message(err: ApplicationError) -> String {
    match err {
        ApplicationError::Validation(msg) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn valid_image_is_forwarded() {
    let uploader = Arc::new(RecordingUploader::default());
    let service = UploadService::new(Some(uploader.clone()));

    let stored = service
        .upload_image(UploadImageCommand {
            file: Some(image("image/png", 128)),
        })
        .await
        .unwrap();

    assert_eq!(stored.url, "https://cdn.test/blog-posts/cover.png");
    assert_eq!(stored.public_id, "blog-posts/cover.png");
    assert_eq!(uploader.received_count(), 1);
}

#[tokio::test]
async fn missing_file_is_rejected() {
    let uploader = Arc::new(RecordingUploader::default());
    let service = UploadService::new(Some(uploader.clone()));

    let err = service
        .upload_image(UploadImageCommand { file: None })
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "No file provided");
    assert_eq!(uploader.received_count(), 0);
}

#[tokio::test]
async fn oversized_file_is_rejected_before_type_check() {
    let uploader = Arc::new(RecordingUploader::default());
    let service = UploadService::new(Some(uploader.clone()));

    let err = service
        .upload_image(UploadImageCommand {
            file: Some(image("text/plain", MAX_UPLOAD_BYTES + 1)),
        })
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "File size must be less than 10MB");
    assert_eq!(uploader.received_count(), 0);
}

#[tokio::test]
async fn exactly_ten_megabytes_is_accepted() {
    let uploader = Arc::new(RecordingUploader::default());
    let service = UploadService::new(Some(uploader.clone()));

    service
        .upload_image(UploadImageCommand {
            file: Some(image("image/jpeg", MAX_UPLOAD_BYTES)),
        })
        .await
        .unwrap();
    assert_eq!(uploader.received_count(), 1);
}

#[tokio::test]
async fn non_image_is_rejected() {
    let uploader = Arc::new(RecordingUploader::default());
    let service = UploadService::new(Some(uploader.clone()));

    let err = service
        .upload_image(UploadImageCommand {
            file: Some(image("application/pdf", 10)),
        })
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "File must be an image");
}

#[tokio::test]
async fn unconfigured_service_fails_with_infrastructure_error() {
    let service = UploadService::new(None);
    assert!(!service.is_configured());

    let err = service
        .upload_image(UploadImageCommand {
            file: Some(image("image/png", 1)),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Infrastructure(_)));
    assert!(err.message().contains("CLOUDINARY_CLOUD_NAME"));
}

#[tokio::test]
async fn uploader_failure_is_wrapped() {
    let service = UploadService::new(Some(Arc::new(FailingUploader)));

    let err = service
        .upload_image(UploadImageCommand {
            file: Some(image("image/png", 1)),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Infrastructure(_)));
    assert_eq!(err.message(), "Upload failed: Invalid Signature");
}
