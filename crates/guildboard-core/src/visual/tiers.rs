//! Rank resolution and ranking tiers
//!
//! The leaderboard renders in three reveal tiers: a podium (ranks 1-3,
//! rank 1 full-size), an always-visible list (4-15), and an on-demand
//! overflow. The overflow reveal shows the entire ranking so absolute
//! rank numbers stay consistent with the collapsed view.

use crate::identity::same_user;
use crate::models::{MyRankEntry, RankingEntry};

/// Ranks 1..=3 render as podium cards.
pub const PODIUM_SIZE: usize = 3;

/// Ranks up to this position are always visible.
pub const VISIBLE_LIMIT: usize = 15;

/// Find the target user's row and 1-based rank in the fetched window.
///
/// Returns `None` for an unset target or a user outside the (possibly
/// top-N-truncated) window; the history source's target-inclusion
/// parameter is the widening mechanism, not this scan.
pub fn resolve_rank(ranking: &[RankingEntry], target: Option<&str>) -> Option<MyRankEntry> {
    let target = target?;
    ranking
        .iter()
        .position(|entry| same_user(&entry.user_id, target))
        .map(|idx| MyRankEntry {
            rank: idx + 1,
            entry: ranking[idx].clone(),
        })
}

/// The three reveal tiers over one ranking.
#[derive(Debug, Clone, Copy)]
pub struct RankingTiers<'a> {
    all: &'a [RankingEntry],
}

impl<'a> RankingTiers<'a> {
    /// Ranks 1..=3; rank 1 renders full-size, 2-3 compact.
    pub fn podium(&self) -> &'a [RankingEntry] {
        &self.all[..self.all.len().min(PODIUM_SIZE)]
    }

    /// The rank-1 entry, rendered full-size.
    pub fn primary(&self) -> Option<&'a RankingEntry> {
        self.all.first()
    }

    /// Ranks 2..=3, rendered compact beside the primary card.
    pub fn runners_up(&self) -> &'a [RankingEntry] {
        let start = self.all.len().min(1);
        let end = self.all.len().min(PODIUM_SIZE);
        &self.all[start..end]
    }

    /// Ranks 4..=15.
    pub fn list(&self) -> &'a [RankingEntry] {
        let start = self.all.len().min(PODIUM_SIZE);
        let end = self.all.len().min(VISIBLE_LIMIT);
        &self.all[start..end]
    }

    /// Ranks 16+, hidden behind the reveal control.
    pub fn overflow(&self) -> &'a [RankingEntry] {
        let start = self.all.len().min(VISIBLE_LIMIT);
        &self.all[start..]
    }

    pub fn has_overflow(&self) -> bool {
        self.all.len() > VISIBLE_LIMIT
    }

    /// 1-based rank of the first list-tier row (always 4; kept as data so
    /// renderers never recount).
    pub fn list_start_rank(&self) -> usize {
        PODIUM_SIZE + 1
    }

    /// The full ranking with 1-based ranks, for the overflow reveal.
    pub fn reveal_all(&self) -> impl Iterator<Item = (usize, &'a RankingEntry)> {
        let all = self.all;
        all.iter().enumerate().map(|(idx, entry)| (idx + 1, entry))
    }
}

/// Slice one ranking into its reveal tiers. Undersized rankings simply
/// yield shorter tiers; nothing is padded.
pub fn paginate(ranking: &[RankingEntry]) -> RankingTiers<'_> {
    RankingTiers { all: ranking }
}
