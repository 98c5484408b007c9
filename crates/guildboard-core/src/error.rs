//! Error types for guildboard-core
//!
//! One typed hierarchy for everything that can go wrong talking to the
//! statistics API. The session layer decides which failures are fatal to
//! an activation; this module only classifies.

use std::fmt;
use thiserror::Error;

/// Remote data sources the engine talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Ranking,
    History,
    Heatmap,
    Analysis,
    ChannelShares,
    ChannelList,
    SnapshotInfo,
    SnapshotList,
    UserSearch,
}

impl Endpoint {
    /// Stable name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Ranking => "ranking",
            Endpoint::History => "history",
            Endpoint::Heatmap => "heatmap",
            Endpoint::Analysis => "analysis",
            Endpoint::ChannelShares => "channels_distribution",
            Endpoint::ChannelList => "channels",
            Endpoint::SnapshotInfo => "snapshot",
            Endpoint::SnapshotList => "snapshots",
            Endpoint::UserSearch => "users_search",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure classification surfaced to the caller on a fatal activation.
///
/// `Overloaded` (HTTP 429 or 5xx) may be presented as "try again later";
/// `Unavailable` covers everything else. The engine never retries either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Unavailable,
    Overloaded,
}

/// Error fetching or decoding one remote source.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("failed to decode {endpoint} response: {message}")]
    Decode {
        endpoint: Endpoint,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base url: {url}")]
    InvalidBaseUrl { url: String },
}

impl FetchError {
    /// Which source produced this error.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => Some(*endpoint),
            FetchError::InvalidBaseUrl { .. } => None,
        }
    }

    /// Classify for caller-facing messaging.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            FetchError::Status { status, .. } if *status == 429 || *status >= 500 => {
                FailureKind::Overloaded
            }
            _ => FailureKind::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> FetchError {
        FetchError::Status {
            endpoint: Endpoint::Ranking,
            status: code,
        }
    }

    #[test]
    fn test_overload_classification() {
        assert_eq!(status(429).failure_kind(), FailureKind::Overloaded);
        assert_eq!(status(500).failure_kind(), FailureKind::Overloaded);
        assert_eq!(status(503).failure_kind(), FailureKind::Overloaded);
    }

    #[test]
    fn test_client_errors_are_unavailable() {
        assert_eq!(status(404).failure_kind(), FailureKind::Unavailable);
        assert_eq!(status(403).failure_kind(), FailureKind::Unavailable);
    }

    #[test]
    fn test_decode_is_unavailable() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = FetchError::Decode {
            endpoint: Endpoint::History,
            message: source.to_string(),
            source,
        };
        assert_eq!(err.failure_kind(), FailureKind::Unavailable);
        assert_eq!(err.endpoint(), Some(Endpoint::History));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Endpoint::ChannelShares.to_string(), "channels_distribution");
        assert_eq!(status(500).to_string(), "ranking returned HTTP 500");
    }
}
