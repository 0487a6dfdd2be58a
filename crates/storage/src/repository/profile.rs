use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Profile;

pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT email, name, age, gender, disorder, mobile, avatar, created_at
            FROM profiles
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(profile)
    }
}
