//! The remote statistics API boundary
//!
//! Every source the engine consumes, as one async trait. The production
//! implementation is [`crate::client::HttpStatsApi`]; tests script a mock
//! against the same seam.

use crate::error::FetchError;
use crate::models::{
    AnalysisSummary, ChannelInfo, ChannelShare, HeatmapCell, RankingEntry, Snapshot, TrendSeries,
    UserHit, WindowParams,
};
use async_trait::async_trait;

/// Read-only access to the statistics service.
///
/// All period-scoped methods take the resolved [`WindowParams`] (snapshot
/// scopes are resolved to an `end_date` bound before any other call) and
/// an optional channel filter.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Ranked leaderboard for the window, descending by message count,
    /// truncated to the server's top-N.
    async fn ranking(
        &self,
        window: &WindowParams,
        channel_id: Option<&str>,
    ) -> Result<Vec<RankingEntry>, FetchError>;

    /// Daily trend series. `target_id` forces that user's series into the
    /// payload even outside the server's top-N cutoff.
    async fn history(
        &self,
        window: &WindowParams,
        channel_id: Option<&str>,
        target_id: Option<&str>,
    ) -> Result<TrendSeries, FetchError>;

    /// Sparse day-of-week x hour activity cells.
    async fn heatmap(
        &self,
        window: &WindowParams,
        channel_id: Option<&str>,
    ) -> Result<Vec<HeatmapCell>, FetchError>;

    /// Window summary; `user_id` selects the personal variant.
    async fn analysis(
        &self,
        window: &WindowParams,
        channel_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<AnalysisSummary, FetchError>;

    /// Per-channel message distribution. Only meaningful without a
    /// channel filter; callers gate this themselves.
    async fn channel_shares(
        &self,
        window: &WindowParams,
    ) -> Result<Vec<ChannelShare>, FetchError>;

    /// Metadata for one snapshot; prerequisite fetch in snapshot scope.
    async fn snapshot(&self, snapshot_id: u64) -> Result<Snapshot, FetchError>;

    /// All snapshots, newest first.
    async fn snapshots(&self) -> Result<Vec<Snapshot>, FetchError>;

    /// All channels, in sidebar order.
    async fn channels(&self) -> Result<Vec<ChannelInfo>, FetchError>;

    /// Substring user search. Callers short-circuit empty queries; the
    /// service answers them with an empty list, not an error.
    async fn search_users(&self, query: &str) -> Result<Vec<UserHit>, FetchError>;
}
