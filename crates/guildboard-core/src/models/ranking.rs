//! Leaderboard entries from the ranking source
//!
//! The source orders entries descending by message count and truncates to
//! its own top-N window; array position defines rank (index + 1).

use crate::identity::de_user_id;
use serde::{Deserialize, Serialize};

/// One row of the period ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(deserialize_with = "de_user_id")]
    pub user_id: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub avatar: Option<String>,

    /// Message count for the window; wire name is `count`.
    #[serde(rename = "count")]
    pub message_count: u64,

    #[serde(default)]
    pub char_count: u64,
}

impl RankingEntry {
    /// Average message length, 0 when no character data was recorded.
    pub fn avg_chars(&self) -> u64 {
        if self.message_count == 0 || self.char_count == 0 {
            0
        } else {
            self.char_count / self.message_count
        }
    }
}

/// A ranking entry annotated with its 1-based position.
///
/// Derived client-side, never fetched; absent when the requesting user is
/// a guest or outside the fetched ranking window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MyRankEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: RankingEntry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_shape() {
        let json = r#"{
            "user_id": 42,
            "display_name": "Alice",
            "username": "alice",
            "avatar": null,
            "count": 120,
            "char_count": 2400
        }"#;
        let entry: RankingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.user_id, "42");
        assert_eq!(entry.message_count, 120);
        assert_eq!(entry.avg_chars(), 20);
    }

    #[test]
    fn test_missing_char_count_defaults() {
        let json = r#"{"user_id": "7", "display_name": "B", "username": "b", "count": 3}"#;
        let entry: RankingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.char_count, 0);
        assert_eq!(entry.avg_chars(), 0);
    }
}
