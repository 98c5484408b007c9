//! Derived view state
//!
//! Pure, side-effect-free transforms from the published view model to
//! render-ready data: heat intensity, ranking tiers, and trend line
//! emphasis. Recomputed from scratch whenever a new view model lands.

pub mod intensity;
pub mod lines;
pub mod tiers;


pub use intensity::{map_intensity, HeatGrid, EMPTY_CELL_WEIGHT, MIN_ACTIVE_WEIGHT};
pub use lines::{classify_line, tooltip_entries, LineContext, LineEmphasis, TooltipEntry};
pub use tiers::{paginate, resolve_rank, RankingTiers, PODIUM_SIZE, VISIBLE_LIMIT};
