//! Day-of-week x hour activity cells
//!
//! The source sends only cells with activity; the full grid is 7x24 and a
//! missing cell means zero.

use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: usize = 24;

/// One populated cell of the activity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Day of week, 0 = Sunday .. 6 = Saturday (server convention).
    pub dow: u8,
    /// Hour of day, 0..=23.
    pub hour: u8,
    pub count: u64,
}

impl HeatmapCell {
    /// Whether dow/hour address a cell inside the 7x24 grid.
    pub fn in_grid(&self) -> bool {
        (self.dow as usize) < DAYS_PER_WEEK && (self.hour as usize) < HOURS_PER_DAY
    }
}
