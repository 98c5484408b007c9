//! Reporting scope: window, channel filter, and requester identity
//!
//! A `Scope` identifies one dashboard view. It is immutable; changing any
//! field means constructing a new Scope, which fully supersedes the fetch
//! state of the old one.

use crate::identity;
use chrono::{DateTime, Utc};

/// The viewing user's identity as carried by the caller (cookie value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requester {
    Guest,
    User(String),
}

impl Requester {
    /// Build from the raw cookie value; the `"guest"` sentinel and blank
    /// values map to `Guest`.
    pub fn from_raw(raw: &str) -> Self {
        if identity::is_guest(raw) {
            Requester::Guest
        } else {
            Requester::User(identity::canonical(raw).to_string())
        }
    }

    /// The user id, if identified.
    pub fn id(&self) -> Option<&str> {
        match self {
            Requester::Guest => None,
            Requester::User(id) => Some(id),
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Requester::Guest)
    }
}

/// Which reporting window the scope covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportWindow {
    /// One calendar month.
    Month { year: i32, month: u32 },
    /// Everything up to an immutable snapshot's creation time. The
    /// snapshot's `created_at` is resolved at activation time.
    Snapshot { snapshot_id: u64 },
}

/// Window parameters after snapshot resolution, ready for API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowParams {
    Month { year: i32, month: u32 },
    Total { end_date: Option<DateTime<Utc>> },
}

/// One dashboard view: window + optional channel filter + requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub window: ReportWindow,
    pub channel_id: Option<String>,
    pub requester: Requester,
}

impl Scope {
    pub fn month(year: i32, month: u32, requester: Requester) -> Self {
        Self {
            window: ReportWindow::Month { year, month },
            channel_id: None,
            requester,
        }
    }

    pub fn snapshot(snapshot_id: u64, requester: Requester) -> Self {
        Self {
            window: ReportWindow::Snapshot { snapshot_id },
            channel_id: None,
            requester,
        }
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Channel-distribution data is only meaningful at the all-channels
    /// level; a channel-filtered scope withholds that request.
    pub fn wants_channel_shares(&self) -> bool {
        self.channel_id.is_none()
    }

    /// Personal analysis is only requested for identified viewers.
    pub fn wants_personal(&self) -> bool {
        !self.requester.is_guest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requester_from_raw() {
        assert_eq!(Requester::from_raw("guest"), Requester::Guest);
        assert_eq!(Requester::from_raw(""), Requester::Guest);
        assert_eq!(
            Requester::from_raw(" 42 "),
            Requester::User("42".to_string())
        );
    }

    #[test]
    fn test_optional_request_gating() {
        let scope = Scope::month(2025, 5, Requester::Guest);
        assert!(scope.wants_channel_shares());
        assert!(!scope.wants_personal());

        let scope = Scope::month(2025, 5, Requester::User("42".into())).with_channel("100");
        assert!(!scope.wants_channel_shares());
        assert!(scope.wants_personal());
    }
}
