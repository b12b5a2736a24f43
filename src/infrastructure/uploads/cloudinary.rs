// src/infrastructure/uploads/cloudinary.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        time::Clock,
        upload::{ImagePayload, ImageUploader, StoredImage},
    },
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Fit within 1200x630 without upscaling, then let the CDN pick quality and
/// format per client.
pub const TRANSFORMATION: &str = "c_limit,w_1200,h_630/q_auto/f_auto";

#[derive(Clone, Debug)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

impl CloudinaryConfig {
    fn upload_url(&self) -> String {
        format!("{API_BASE}/{}/image/upload", self.cloud_name)
    }
}

pub struct CloudinaryUploader {
    config: CloudinaryConfig,
    client: reqwest::Client,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            clock,
        }
    }
}

/// Sign upload parameters: sort by name, join as `k=v&k=v`, append the API
/// secret and hash with SHA-256 (lower-case hex).
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{:x}", Sha256::digest(format!("{joined}{api_secret}")))
}

/// Inline the image as a `data:` URI so the upload is a plain form post.
pub fn data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    async fn upload(&self, image: ImagePayload) -> ApplicationResult<StoredImage> {
        let timestamp = self.clock.now().timestamp().to_string();
        let signed = [
            ("folder", self.config.folder.as_str()),
            ("timestamp", timestamp.as_str()),
            ("transformation", TRANSFORMATION),
        ];
        let signature = sign_params(&signed, &self.config.api_secret);
        let file = data_uri(&image.content_type, &image.bytes);

        let mut form: Vec<(&str, &str)> = signed.to_vec();
        form.extend([
            ("file", file.as_str()),
            ("api_key", self.config.api_key.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", "sha256"),
        ]);

        let response = self
            .client
            .post(self.config.upload_url())
            .form(&form)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map_or_else(|_| format!("cloudinary returned {status}"), |body| {
                    body.error.message
                });
            tracing::warn!(%status, file_name = ?image.file_name, "cloudinary rejected upload");
            return Err(ApplicationError::infrastructure(message));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(StoredImage {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_sorts_params_before_hashing() {
        let forward = sign_params(&[("timestamp", "1"), ("folder", "x")], "secret");
        let reversed = sign_params(&[("folder", "x"), ("timestamp", "1")], "secret");
        assert_eq!(forward, reversed);
        assert_eq!(
            forward,
            format!("{:x}", Sha256::digest("folder=x&timestamp=1secret"))
        );
        assert_eq!(forward.len(), 64);
    }

    #[test]
    fn signature_depends_on_secret() {
        let params = [("folder", "blog-posts")];
        assert_ne!(sign_params(&params, "a"), sign_params(&params, "b"));
    }

    #[test]
    fn data_uri_embeds_type_and_base64_body() {
        assert_eq!(data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn upload_url_targets_cloud() {
        let config = CloudinaryConfig {
            cloud_name: "demo".into(),
            api_key: "k".into(),
            api_secret: "s".into(),
            folder: "blog-posts".into(),
        };
        assert_eq!(
            config.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }
}
