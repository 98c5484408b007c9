//! Immutable historical snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker for a frozen point-in-time view. The list source returns these
/// newest-first; `created_at` becomes the `end_date` bound for every
/// other request in snapshot scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub snapshot_id: u64,
    pub created_at: DateTime<Utc>,
    pub title: String,
}
