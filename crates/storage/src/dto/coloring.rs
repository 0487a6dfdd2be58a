use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::ColoringProgress;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveColoringRequest {
    #[validate(length(min = 1, max = 255, message = "Image id is required"))]
    pub image_id: String,

    #[validate(length(min = 1, message = "Canvas state is required"))]
    pub canvas_state: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColoringProgressResponse {
    pub image_id: String,
    pub canvas_state: String,
    pub updated_at: DateTime<Utc>,
}

impl From<ColoringProgress> for ColoringProgressResponse {
    fn from(progress: ColoringProgress) -> Self {
        Self {
            image_id: progress.image_id,
            canvas_state: progress.canvas_state,
            updated_at: progress.updated_at,
        }
    }
}
