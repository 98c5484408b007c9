//! The merged view model published per activation

use crate::models::analysis::AnalysisSummary;
use crate::models::channel::ChannelShare;
use crate::models::heatmap::HeatmapCell;
use crate::models::ranking::{MyRankEntry, RankingEntry};
use crate::models::snapshot::Snapshot;
use crate::models::trend::TrendSeries;

/// Everything one dashboard view needs, merged from all sources of a
/// single activation.
///
/// Published as a whole (`Arc<ViewModel>`) and replaced wholesale on the
/// next activation; never mutated field-by-field after publication.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    /// Leaderboard, descending by message count.
    pub ranking: Vec<RankingEntry>,

    /// Daily trend with per-participant series.
    pub trend: TrendSeries,

    /// Sparse activity cells (missing cell = 0).
    pub heatmap: Vec<HeatmapCell>,

    /// Server-wide summary for the window.
    pub overall: AnalysisSummary,

    /// Requester-filtered summary; `None` when withheld (guest) or the
    /// optional fetch failed.
    pub personal: Option<AnalysisSummary>,

    /// Channel distribution; empty when channel-filtered or failed.
    pub channel_shares: Vec<ChannelShare>,

    /// The requester's own row, if inside the ranking window.
    pub my_rank: Option<MyRankEntry>,

    /// Message count of the rank-1 entry, 0 for an empty ranking.
    pub top_count: u64,

    /// Resolved snapshot metadata in snapshot scope.
    pub snapshot: Option<Snapshot>,
}
