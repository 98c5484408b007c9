//! Trend line emphasis and tooltip composition
//!
//! Every participant series gets one emphasis tier. Generic lines draw
//! first (bottom layer) so emphasized lines are never occluded; the
//! viewer's own line draws on top of everything, then the focused line,
//! then the source-designated rank-1 line.

use crate::identity::same_user;
use crate::models::TrendPoint;

/// Emphasis tiers, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEmphasis {
    /// The viewer's own series.
    Own,
    /// The searched-and-selected comparison series.
    Focused,
    /// The series of the window's rank-1 user.
    TopRank,
    /// Everything else; faint, bottom layer.
    Generic,
}

impl LineEmphasis {
    /// Draw order, higher on top.
    pub fn draw_order(&self) -> u8 {
        match self {
            LineEmphasis::Generic => 0,
            LineEmphasis::TopRank => 1,
            LineEmphasis::Focused => 2,
            LineEmphasis::Own => 3,
        }
    }

    /// Whether the active-point marker renders for this tier.
    pub fn marks_active_point(&self) -> bool {
        !matches!(self, LineEmphasis::Generic)
    }
}

/// Identity context the classifier evaluates against.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineContext<'a> {
    /// The viewer's id, if identified.
    pub viewer: Option<&'a str>,
    /// The focused comparison user, if any.
    pub focused: Option<&'a str>,
    /// The series source's designated rank-1 id.
    pub top_user: Option<&'a str>,
}

/// Classify one series, first match wins: own, focused, top-rank,
/// generic.
pub fn classify_line(series_id: &str, ctx: &LineContext) -> LineEmphasis {
    if ctx.viewer.is_some_and(|id| same_user(id, series_id)) {
        LineEmphasis::Own
    } else if ctx.focused.is_some_and(|id| same_user(id, series_id)) {
        LineEmphasis::Focused
    } else if ctx.top_user.is_some_and(|id| same_user(id, series_id)) {
        LineEmphasis::TopRank
    } else {
        LineEmphasis::Generic
    }
}

/// One tooltip row: series id and its value at the hovered point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipEntry {
    pub user_id: String,
    pub count: u64,
}

/// Compose the tooltip for one point: top 3 series by value, plus the
/// viewer's and the focused series when present but outside the top 3.
pub fn tooltip_entries(point: &TrendPoint, ctx: &LineContext) -> Vec<TooltipEntry> {
    let mut sorted: Vec<(&str, u64)> = point
        .by_user
        .iter()
        .map(|(id, count)| (id.as_str(), *count))
        .collect();
    // Ties break by id so the composition is deterministic.
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut entries: Vec<TooltipEntry> = sorted
        .iter()
        .take(3)
        .map(|(id, count)| TooltipEntry {
            user_id: id.to_string(),
            count: *count,
        })
        .collect();

    for pinned in [ctx.viewer, ctx.focused].into_iter().flatten() {
        let already = entries.iter().any(|e| same_user(&e.user_id, pinned));
        if already {
            continue;
        }
        if let Some((id, count)) = sorted.iter().find(|(id, _)| same_user(id, pinned)) {
            entries.push(TooltipEntry {
                user_id: id.to_string(),
                count: *count,
            });
        }
    }

    entries
}
