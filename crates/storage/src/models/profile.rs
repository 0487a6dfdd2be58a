use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Profile fields live apart from the identity row; score records reference
/// users by email only and never own profile data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Profile {
    pub email: String,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub disorder: Option<String>,
    pub mobile: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}
