// src/presentation/http/extractors.rs
use crate::application::{commands::uploads::OVERSIZED_MESSAGE, ports::upload::ImagePayload};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Multipart, Query, Request, multipart::MultipartError},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// Multipart field carrying the image.
pub const UPLOAD_FIELD: &str = "file";

/// `Json<T>` whose rejections render as the API's error body.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// `Query<T>` whose rejections render as the API's error body.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// The `file` part of a multipart upload, if the client sent one. Other parts
/// are skipped.
#[derive(Debug, Clone)]
pub struct ImageUpload(pub Option<ImagePayload>);

impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()).bare())?;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(UPLOAD_FIELD) {
                continue;
            }

            let file_name = field.file_name().map(ToString::to_string);
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field.bytes().await.map_err(multipart_error)?;

            return Ok(Self(Some(ImagePayload {
                file_name,
                content_type,
                bytes,
            })));
        }

        Ok(Self(None))
    }
}

/// A body cut off by the upload limit reads as an oversized image rather than
/// a transport failure.
fn multipart_error(err: MultipartError) -> HttpError {
    let status = err.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return HttpError::bad_request(OVERSIZED_MESSAGE).bare();
    }
    HttpError::with_status(status, err.body_text()).bare()
}
