use chrono::Utc;
use sqlx::PgPool;
use std::collections::BTreeMap;
use storage::models::{ActivityId, ScoreRecord, ScoreSnapshot};
use storage::repository::score_record::{ScoreRecordRepository, SubmitError};
use storage::services::score_query;

/// Run one submission through the merge engine and store, atomically.
pub async fn submit_score(
    pool: &PgPool,
    email: &str,
    activity: ActivityId,
    score: i32,
) -> Result<ScoreRecord, SubmitError> {
    let repo = ScoreRecordRepository::new(pool);
    repo.submit(email, activity, score, Utc::now()).await
}

/// Current view for the progress page
pub async fn get_current(pool: &PgPool, email: &str) -> storage::Result<BTreeMap<ActivityId, i32>> {
    score_query::get_current(pool, email).await
}

/// Historical snapshots for the past-scores view
pub async fn get_history(pool: &PgPool, email: &str) -> storage::Result<Vec<ScoreSnapshot>> {
    score_query::get_history(pool, email).await
}
