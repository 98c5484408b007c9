//! guildboard-core - Core engine for guildboard
//!
//! Scoped fetch orchestration, view-model merging, focus-user search, and
//! the pure derived-view helpers behind the guild statistics dashboards.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod focus;
pub mod identity;
pub mod models;
pub mod session;
pub mod visual;

pub use api::StatsApi;
pub use client::HttpStatsApi;
pub use config::EngineConfig;
pub use error::{Endpoint, FailureKind, FetchError};
pub use event::{DashboardEvent, EventBus};
pub use focus::FocusSearch;
pub use models::{Requester, Scope, ViewModel};
pub use session::{DashboardSession, Readiness};
