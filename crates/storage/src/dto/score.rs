use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{ActivityId, ScoreRecord, ScoreSnapshot};

/// Request payload for submitting an activity score.
///
/// `activity` stays a string here so an out-of-set identifier is reported
/// as a 400 with a useful message instead of a bare deserialization
/// failure; the handler parses it into [`ActivityId`]. The per-activity
/// upper bound is checked by the merge engine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    #[validate(length(min = 1, message = "Activity is required"))]
    pub activity: String,

    #[validate(range(min = 0, message = "Score must be non-negative"))]
    pub score: i32,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitScoreResponse {
    pub message: String,
}

/// Current view: best score per completed activity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CurrentScoresResponse {
    pub score: BTreeMap<ActivityId, i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PastScoreEntry {
    pub score: BTreeMap<ActivityId, i32>,
    pub timestamp: DateTime<Utc>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PastScoresResponse {
    #[serde(rename = "pastScores")]
    pub past_scores: Vec<PastScoreEntry>,
}

impl PastScoresResponse {
    pub fn from_history(email: &str, history: Vec<ScoreSnapshot>) -> Self {
        let past_scores = history
            .into_iter()
            .map(|snapshot| PastScoreEntry {
                score: snapshot.score,
                timestamp: snapshot.timestamp,
                email: email.to_string(),
            })
            .collect();

        Self { past_scores }
    }
}

impl From<ScoreRecord> for CurrentScoresResponse {
    fn from(record: ScoreRecord) -> Self {
        Self {
            score: record.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(activity: &str, score: i32, email: &str) -> SubmitScoreRequest {
        SubmitScoreRequest {
            activity: activity.to_string(),
            score,
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(
            request("object-quiz", 7, "alice@example.com")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_negative_score_fails_validation() {
        assert!(
            request("object-quiz", -3, "alice@example.com")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_malformed_email_fails_validation() {
        assert!(request("object-quiz", 7, "not-an-email").validate().is_err());
    }

    #[test]
    fn test_empty_activity_fails_validation() {
        assert!(request("", 7, "alice@example.com").validate().is_err());
    }
}
