//! Channel metadata and distribution shares

use crate::identity::de_user_id;
use serde::{Deserialize, Serialize};

/// One slice of the channel-distribution chart; wire name for the label
/// is `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelShare {
    #[serde(rename = "name")]
    pub label: String,
    pub value: u64,
}

/// A channel as listed by the channel source (sidebar filter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    #[serde(deserialize_with = "de_user_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
}
