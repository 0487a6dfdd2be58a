use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The fixed set of learning activities that can report a score.
///
/// This enum is the single source of truth for activity identifiers and
/// their per-activity maximum score; the client progress bars render
/// against the same table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityId {
    CommunicationQuiz,
    ObjectQuiz,
    RoadCrossing,
    ColoringActivity,
    GroceryShopping,
    SolarSystem,
    #[serde(rename = "store-3d")]
    Store3d,
}

impl ActivityId {
    pub const ALL: [ActivityId; 7] = [
        ActivityId::CommunicationQuiz,
        ActivityId::ObjectQuiz,
        ActivityId::RoadCrossing,
        ActivityId::ColoringActivity,
        ActivityId::GroceryShopping,
        ActivityId::SolarSystem,
        ActivityId::Store3d,
    ];

    /// Maximum achievable score for the activity. Submissions above this
    /// are rejected, never clamped.
    pub fn max_score(self) -> i32 {
        match self {
            Self::CommunicationQuiz => 5,
            Self::ObjectQuiz => 10,
            Self::RoadCrossing => 10,
            Self::ColoringActivity => 4,
            Self::GroceryShopping => 1,
            Self::SolarSystem => 5,
            Self::Store3d => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CommunicationQuiz => "communication-quiz",
            Self::ObjectQuiz => "object-quiz",
            Self::RoadCrossing => "road-crossing",
            Self::ColoringActivity => "coloring-activity",
            Self::GroceryShopping => "grocery-shopping",
            Self::SolarSystem => "solar-system",
            Self::Store3d => "store-3d",
        }
    }

    /// Parse a wire identifier. Returns `None` for anything outside the
    /// enumerated set.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_activity() {
        for activity in ActivityId::ALL {
            assert_eq!(ActivityId::parse(activity.as_str()), Some(activity));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_identifiers() {
        assert_eq!(ActivityId::parse("vr-chess"), None);
        assert_eq!(ActivityId::parse(""), None);
        assert_eq!(ActivityId::parse("Object-Quiz"), None);
    }

    #[test]
    fn test_max_score_table() {
        assert_eq!(ActivityId::CommunicationQuiz.max_score(), 5);
        assert_eq!(ActivityId::ObjectQuiz.max_score(), 10);
        assert_eq!(ActivityId::RoadCrossing.max_score(), 10);
        assert_eq!(ActivityId::ColoringActivity.max_score(), 4);
        assert_eq!(ActivityId::GroceryShopping.max_score(), 1);
        assert_eq!(ActivityId::SolarSystem.max_score(), 5);
        assert_eq!(ActivityId::Store3d.max_score(), 5);
    }

    #[test]
    fn test_serde_uses_wire_identifiers() {
        let json = serde_json::to_string(&ActivityId::Store3d).unwrap();
        assert_eq!(json, "\"store-3d\"");

        let parsed: ActivityId = serde_json::from_str("\"communication-quiz\"").unwrap();
        assert_eq!(parsed, ActivityId::CommunicationQuiz);
    }
}
