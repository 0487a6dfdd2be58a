use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Serialized canvas state for one (user, image) pair. Latest write wins;
/// uniqueness is enforced by the composite primary key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ColoringProgress {
    pub email: String,
    pub image_id: String,
    pub canvas_state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
