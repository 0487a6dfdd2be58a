use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::error::StorageError;
use crate::models::{ActivityId, ScoreRecord, ScoreSnapshot};
use crate::services::score_merge::{self, MergeError};

/// Failure of a single submission: either the merge engine rejected the
/// payload or the store itself failed. Nothing is persisted in either case.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<sqlx::Error> for SubmitError {
    fn from(error: sqlx::Error) -> Self {
        Self::Storage(StorageError::Database(error))
    }
}

#[derive(sqlx::FromRow)]
struct ScoreRecordRow {
    email: String,
    current: Json<BTreeMap<ActivityId, i32>>,
    history: Json<Vec<ScoreSnapshot>>,
}

impl From<ScoreRecordRow> for ScoreRecord {
    fn from(row: ScoreRecordRow) -> Self {
        Self {
            email: row.email,
            current: row.current.0,
            history: row.history.0,
        }
    }
}

pub struct ScoreRecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreRecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a user's score record. Absent is a normal state for users who
    /// have not completed any activity yet.
    pub async fn find_by_email(&self, email: &str) -> crate::Result<Option<ScoreRecord>> {
        let row = sqlx::query_as::<_, ScoreRecordRow>(
            r#"
            SELECT email, current, history
            FROM score_records
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(ScoreRecord::from))
    }

    /// Apply one submission through the merge engine inside a single
    /// transaction.
    ///
    /// The row lock serializes concurrent read-merge-write cycles for the
    /// same email, so two tabs submitting at once cannot clobber each
    /// other's merge; submissions for different users never contend. Any
    /// error before commit rolls everything back, placeholder row included.
    pub async fn submit(
        &self,
        email: &str,
        activity: ActivityId,
        score: i32,
        submitted_at: DateTime<Utc>,
    ) -> Result<ScoreRecord, SubmitError> {
        let mut tx = self.pool.begin().await?;

        // Make sure a row exists so the lock below always has a target;
        // concurrent first-time submitters serialize on this insert.
        sqlx::query(
            r#"
            INSERT INTO score_records (email, current, history)
            VALUES ($1, '{}'::jsonb, '[]'::jsonb)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(email)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, ScoreRecordRow>(
            r#"
            SELECT email, current, history
            FROM score_records
            WHERE email = $1
            FOR UPDATE
            "#,
        )
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        // Every real record has at least one history entry, so an empty
        // history means the placeholder we just inserted.
        let existing = if row.history.0.is_empty() {
            None
        } else {
            Some(ScoreRecord::from(row))
        };

        let merged = score_merge::merge(existing, activity, score, email, submitted_at)?;

        sqlx::query(
            r#"
            UPDATE score_records
            SET current = $2, history = $3, updated_at = now()
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(Json(&merged.current))
        .bind(Json(&merged.history))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(merged)
    }
}
