use crate::application::ports::upload::StoredImage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImageDto {
    pub url: String,
    pub public_id: String,
}

impl From<StoredImage> for UploadedImageDto {
    fn from(image: StoredImage) -> Self {
        Self {
            url: image.url,
            public_id: image.public_id,
        }
    }
}
