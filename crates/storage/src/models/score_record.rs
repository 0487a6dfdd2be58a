use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::ActivityId;

/// Per-user score document: best score per activity plus the append-only
/// snapshot history. One record per email, created lazily on the first
/// accepted submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreRecord {
    pub email: String,
    pub current: BTreeMap<ActivityId, i32>,
    pub history: Vec<ScoreSnapshot>,
}

/// Full copy of `current` captured at one submission time. History entries
/// are immutable once appended and ordered by timestamp ascending.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreSnapshot {
    pub score: BTreeMap<ActivityId, i32>,
    pub timestamp: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            current: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    /// Best score ever submitted for the activity, 0 if never attempted.
    pub fn best(&self, activity: ActivityId) -> i32 {
        self.current.get(&activity).copied().unwrap_or(0)
    }
}
