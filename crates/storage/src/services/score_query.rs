use sqlx::PgPool;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{ActivityId, ScoreSnapshot};
use crate::repository::score_record::ScoreRecordRepository;

/// Best score per activity. A user with no record gets an empty map, not an
/// error.
pub async fn get_current(pool: &PgPool, email: &str) -> Result<BTreeMap<ActivityId, i32>> {
    let repo = ScoreRecordRepository::new(pool);
    let record = repo.find_by_email(email).await?;

    Ok(record.map(|r| r.current).unwrap_or_default())
}

/// Full snapshot history, ascending by timestamp (the store appends in
/// submission order and never reorders).
pub async fn get_history(pool: &PgPool, email: &str) -> Result<Vec<ScoreSnapshot>> {
    let repo = ScoreRecordRepository::new(pool);
    let record = repo.find_by_email(email).await?;

    Ok(record.map(|r| r.history).unwrap_or_default())
}
