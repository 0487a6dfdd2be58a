use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::ColoringProgress;

pub struct ColoringRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ColoringRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Saved canvas for one (user, image) pair
    pub async fn find(&self, email: &str, image_id: &str) -> Result<ColoringProgress> {
        let progress = sqlx::query_as::<_, ColoringProgress>(
            r#"
            SELECT email, image_id, canvas_state, created_at, updated_at
            FROM coloring_progress
            WHERE email = $1 AND image_id = $2
            "#,
        )
        .bind(email)
        .bind(image_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(progress)
    }

    /// Latest-wins upsert keyed by (email, image_id)
    pub async fn upsert(
        &self,
        email: &str,
        image_id: &str,
        canvas_state: &str,
    ) -> Result<ColoringProgress> {
        let progress = sqlx::query_as::<_, ColoringProgress>(
            r#"
            INSERT INTO coloring_progress (email, image_id, canvas_state)
            VALUES ($1, $2, $3)
            ON CONFLICT (email, image_id)
            DO UPDATE SET
                canvas_state = EXCLUDED.canvas_state,
                updated_at = now()
            RETURNING email, image_id, canvas_state, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(image_id)
        .bind(canvas_state)
        .fetch_one(self.pool)
        .await?;

        Ok(progress)
    }
}
