//! Period summary from the analysis source

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakHour {
    pub hour: u8,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakDate {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakDow {
    pub dow: u8,
    pub count: u64,
}

/// Totals and peaks for a window, optionally filtered to one user.
///
/// A summary with `total == 0` carries no peaks and is "empty" - a real,
/// successful answer distinct from the absent (withheld or failed) state,
/// which the view model represents as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    #[serde(default)]
    pub total: u64,

    #[serde(rename = "max_hour", default)]
    pub peak_hour: Option<PeakHour>,

    #[serde(rename = "max_date", default)]
    pub peak_date: Option<PeakDate>,

    #[serde(rename = "max_dow", default)]
    pub peak_dow: Option<PeakDow>,
}

impl AnalysisSummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
