//! Data models for guildboard

pub mod analysis;
pub mod channel;
pub mod heatmap;
pub mod ranking;
pub mod scope;
pub mod snapshot;
pub mod trend;
pub mod user;
pub mod view;

pub use analysis::{AnalysisSummary, PeakDate, PeakDow, PeakHour};
pub use channel::{ChannelInfo, ChannelShare};
pub use heatmap::{HeatmapCell, DAYS_PER_WEEK, HOURS_PER_DAY};
pub use ranking::{MyRankEntry, RankingEntry};
pub use scope::{ReportWindow, Requester, Scope, WindowParams};
pub use snapshot::Snapshot;
pub use trend::{Participant, TrendPoint, TrendSeries};
pub use user::UserHit;
pub use view::ViewModel;
