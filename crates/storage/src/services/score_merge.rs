use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{ActivityId, ScoreRecord, ScoreSnapshot};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("score {score} for {activity} is out of range (0..={max})")]
    ScoreOutOfRange {
        activity: ActivityId,
        score: i32,
        max: i32,
    },
}

/// Combine an incoming submission with the user's existing record.
///
/// Retention policy: `current[activity]` only ever moves up (monotonic max),
/// so a retried or stale submission can never regress the current view.
/// Every accepted submission appends a full snapshot of the updated
/// `current` map to `history`. History is a submission log, not a
/// value-change log, so an equal or lower resubmission still appends.
///
/// Pure function: persistence is the caller's concern.
pub fn merge(
    existing: Option<ScoreRecord>,
    activity: ActivityId,
    score: i32,
    email: &str,
    submitted_at: DateTime<Utc>,
) -> Result<ScoreRecord, MergeError> {
    let max = activity.max_score();
    if score < 0 || score > max {
        return Err(MergeError::ScoreOutOfRange {
            activity,
            score,
            max,
        });
    }

    let mut record = existing.unwrap_or_else(|| ScoreRecord::new(email));

    let best = record.best(activity).max(score);
    record.current.insert(activity, best);
    record.history.push(ScoreSnapshot {
        score: record.current.clone(),
        timestamp: submitted_at,
    });

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EMAIL: &str = "alice@example.com";

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, minute, 0).unwrap()
    }

    fn submit(record: Option<ScoreRecord>, activity: ActivityId, score: i32) -> ScoreRecord {
        merge(record, activity, score, EMAIL, at(0)).unwrap()
    }

    #[test]
    fn test_first_submission_creates_record() {
        let record = submit(None, ActivityId::RoadCrossing, 7);

        assert_eq!(record.email, EMAIL);
        assert_eq!(record.best(ActivityId::RoadCrossing), 7);
        assert_eq!(record.history.len(), 1);
        assert_eq!(record.history[0].score, record.current);
    }

    #[test]
    fn test_higher_score_replaces_current() {
        let record = submit(None, ActivityId::ObjectQuiz, 4);
        let record = submit(Some(record), ActivityId::ObjectQuiz, 9);

        assert_eq!(record.best(ActivityId::ObjectQuiz), 9);
    }

    #[test]
    fn test_lower_score_does_not_regress_current() {
        let record = submit(None, ActivityId::RoadCrossing, 7);
        let record = submit(Some(record), ActivityId::RoadCrossing, 4);

        assert_eq!(record.best(ActivityId::RoadCrossing), 7);
        assert_eq!(record.history.len(), 2);
        assert_eq!(
            record.history[1].score.get(&ActivityId::RoadCrossing),
            Some(&7)
        );
    }

    #[test]
    fn test_monotonicity_holds_for_any_submission_order() {
        let scores = [3, 9, 1, 7, 9, 0];
        let orderings = [
            scores.to_vec(),
            scores.iter().rev().copied().collect::<Vec<_>>(),
            vec![9, 0, 1, 3, 7, 9],
        ];

        for ordering in orderings {
            let mut record = None;
            for score in &ordering {
                record = Some(submit(record, ActivityId::ObjectQuiz, *score));
            }
            assert_eq!(record.unwrap().best(ActivityId::ObjectQuiz), 9);
        }
    }

    #[test]
    fn test_submission_isolated_to_its_activity() {
        let record = submit(None, ActivityId::CommunicationQuiz, 5);
        let record = submit(Some(record), ActivityId::SolarSystem, 3);

        assert_eq!(record.best(ActivityId::CommunicationQuiz), 5);
        assert_eq!(record.best(ActivityId::SolarSystem), 3);
    }

    #[test]
    fn test_resubmission_appends_snapshot_without_changing_current() {
        let record = submit(None, ActivityId::ColoringActivity, 2);
        let before = record.current.clone();
        let record = submit(Some(record), ActivityId::ColoringActivity, 2);

        assert_eq!(record.current, before);
        assert_eq!(record.history.len(), 2);
    }

    #[test]
    fn test_history_grows_by_one_per_submission_and_keeps_order() {
        let mut record = merge(None, ActivityId::ObjectQuiz, 2, EMAIL, at(0)).unwrap();
        record = merge(
            Some(record),
            ActivityId::CommunicationQuiz,
            4,
            EMAIL,
            at(1),
        )
        .unwrap();
        record = merge(Some(record), ActivityId::ObjectQuiz, 8, EMAIL, at(2)).unwrap();

        assert_eq!(record.history.len(), 3);
        assert!(record.history[0].timestamp < record.history[1].timestamp);
        assert!(record.history[1].timestamp < record.history[2].timestamp);
        // Earlier entries are untouched by later submissions.
        assert_eq!(
            record.history[0].score.get(&ActivityId::ObjectQuiz),
            Some(&2)
        );
    }

    #[test]
    fn test_snapshot_is_full_copy_of_current() {
        let record = submit(None, ActivityId::CommunicationQuiz, 5);
        let record = submit(Some(record), ActivityId::GroceryShopping, 1);

        let last = record.history.last().unwrap();
        assert_eq!(last.score.len(), 2);
        assert_eq!(last.score.get(&ActivityId::CommunicationQuiz), Some(&5));
        assert_eq!(last.score.get(&ActivityId::GroceryShopping), Some(&1));
    }

    #[test]
    fn test_score_above_maximum_is_rejected_not_clamped() {
        let err = merge(None, ActivityId::ObjectQuiz, 11, EMAIL, at(0)).unwrap_err();

        assert_eq!(
            err,
            MergeError::ScoreOutOfRange {
                activity: ActivityId::ObjectQuiz,
                score: 11,
                max: 10,
            }
        );
    }

    #[test]
    fn test_negative_score_is_rejected() {
        assert!(merge(None, ActivityId::SolarSystem, -1, EMAIL, at(0)).is_err());
    }

    #[test]
    fn test_rejected_submission_leaves_existing_record_untouched() {
        let record = submit(None, ActivityId::ObjectQuiz, 6);
        let saved = record.clone();

        let result = merge(Some(record), ActivityId::ObjectQuiz, 99, EMAIL, at(1));
        assert!(result.is_err());
        // The caller still holds the prior state; nothing was mutated in place.
        assert_eq!(saved.best(ActivityId::ObjectQuiz), 6);
        assert_eq!(saved.history.len(), 1);
    }

    #[test]
    fn test_max_score_submission_is_accepted() {
        let record = submit(None, ActivityId::GroceryShopping, 1);
        assert_eq!(record.best(ActivityId::GroceryShopping), 1);
    }

    // Worked example: 7 then 4 on road-crossing keeps 7 and logs both.
    #[test]
    fn test_resubmission_example_scenario() {
        let record = merge(None, ActivityId::RoadCrossing, 7, EMAIL, at(0)).unwrap();
        let record = merge(Some(record), ActivityId::RoadCrossing, 4, EMAIL, at(5)).unwrap();

        assert_eq!(record.best(ActivityId::RoadCrossing), 7);
        assert_eq!(record.history.len(), 2);
        assert_eq!(
            record.history[1].score.get(&ActivityId::RoadCrossing),
            Some(&7)
        );
    }
}
