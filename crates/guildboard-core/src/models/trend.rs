//! Daily trend series from the history source
//!
//! The wire shape of a point is a flat object with dynamic user-id keys
//! next to `date` and `total`:
//!
//! ```json
//! {"date": "2025-05-01", "total": 180, "7": 40, "42": 25}
//! ```
//!
//! serde's flatten collects the per-user counts; `participants` carries
//! display metadata for every id that appears in the series.

use crate::identity::de_opt_user_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One day of the trend, with per-participant message counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,

    #[serde(default)]
    pub total: u64,

    /// Counts keyed by user id for every tracked participant active that
    /// day; absent key means zero.
    #[serde(flatten)]
    pub by_user: HashMap<String, u64>,
}

impl TrendPoint {
    pub fn count_for(&self, user_id: &str) -> u64 {
        self.by_user.get(user_id).copied().unwrap_or(0)
    }
}

/// Display metadata for one tracked participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// The complete trend payload: daily points (date ascending), participant
/// metadata, and the source-designated rank-1 id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    #[serde(rename = "chart_data", default)]
    pub points: Vec<TrendPoint>,

    #[serde(rename = "users", default)]
    pub participants: HashMap<String, Participant>,

    #[serde(default, deserialize_with = "de_opt_user_id")]
    pub top_user_id: Option<String>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ids of every participant tracked in the series.
    pub fn participant_ids(&self) -> impl Iterator<Item = &str> {
        self.participants.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dynamic_user_keys() {
        let json = r#"{
            "chart_data": [
                {"date": "2025-05-01", "total": 65, "7": 40, "42": 25},
                {"date": "2025-05-02", "total": 10, "42": 10}
            ],
            "users": {
                "7": {"name": "Top", "username": "top", "avatar": null},
                "42": {"name": "Me", "username": "me", "avatar": "https://cdn/a.png"}
            },
            "top_user_id": "7"
        }"#;

        let series: TrendSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].count_for("7"), 40);
        assert_eq!(series.points[1].count_for("7"), 0);
        assert_eq!(series.points[1].total, 10);
        assert_eq!(series.top_user_id.as_deref(), Some("7"));
        assert_eq!(series.participants.len(), 2);
    }

    #[test]
    fn test_decode_empty_series() {
        let series: TrendSeries =
            serde_json::from_str(r#"{"chart_data": [], "users": {}, "top_user_id": null}"#)
                .unwrap();
        assert!(series.is_empty());
        assert!(series.top_user_id.is_none());
    }

    #[test]
    fn test_dates_parse_ascending() {
        let json = r#"{
            "chart_data": [
                {"date": "2025-05-01", "total": 1},
                {"date": "2025-05-02", "total": 2}
            ],
            "users": {}
        }"#;
        let series: TrendSeries = serde_json::from_str(json).unwrap();
        assert!(series.points[0].date < series.points[1].date);
    }
}
