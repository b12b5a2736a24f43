use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyShape {
    /// `{error, message}`
    Standard,
    /// `{error}` carrying the message, as returned by the upload endpoint.
    Bare,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    shape: BodyShape,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Conflict(_) => StatusCode::CONFLICT,
            ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match err {
            ApplicationError::Validation(msg)
            | ApplicationError::NotFound(msg)
            | ApplicationError::Conflict(msg)
            | ApplicationError::Infrastructure(msg) => msg,
        };
        Self::new(status, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message.into())
    }

    /// Render as `{error: message}`.
    #[must_use]
    pub fn bare(mut self) -> Self {
        self.shape = BodyShape::Bare;
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            shape: BodyShape::Standard,
        }
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self.shape {
            BodyShape::Standard => {
                let payload = ErrorResponse {
                    error: self
                        .status
                        .canonical_reason()
                        .unwrap_or("error")
                        .to_string(),
                    message: self.message,
                };
                (self.status, Json(payload)).into_response()
            }
            BodyShape::Bare => {
                let payload = UploadErrorResponse {
                    error: self.message,
                };
                (self.status, Json(payload)).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadErrorResponse {
    pub error: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
