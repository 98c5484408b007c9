//! User search results

use crate::identity::de_user_id;
use serde::{Deserialize, Serialize};

/// One row from the user-search source, shared by the identity selector
/// and the focus-user search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHit {
    #[serde(deserialize_with = "de_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hits() {
        let json = r#"[
            {"user_id": "99", "display_name": "Niner", "username": "nine", "avatar": null},
            {"user_id": 100, "display_name": "Cent", "username": "cent"}
        ]"#;
        let hits: Vec<UserHit> = serde_json::from_str(json).unwrap();
        assert_eq!(hits[0].user_id, "99");
        assert_eq!(hits[1].user_id, "100");
        assert!(hits[1].avatar.is_none());
    }
}
