//! HTTP client for the statistics API
//!
//! Thin reqwest wrapper: build the scoped URL, check the status, decode
//! the body. Bodies are read as text and parsed separately so decode
//! failures stay distinguishable from transport failures.

use crate::api::StatsApi;
use crate::config::EngineConfig;
use crate::error::{Endpoint, FetchError};
use crate::models::{
    AnalysisSummary, ChannelInfo, ChannelShare, HeatmapCell, RankingEntry, Snapshot, TrendSeries,
    UserHit, WindowParams,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Production [`StatsApi`] over HTTP/JSON.
pub struct HttpStatsApi {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpStatsApi {
    pub fn new(config: &EngineConfig) -> Result<Self, FetchError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|_| FetchError::InvalidBaseUrl {
            url: config.base_url.clone(),
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            timeout: config.request_timeout,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%endpoint, %url, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            endpoint,
            message: source.to_string(),
            source,
        })
    }
}

/// `{prefix}/{year}/{month}` for calendar scope, `{prefix}/total` for
/// snapshot (end-date-bounded) scope.
fn scoped_path(prefix: &str, window: &WindowParams) -> String {
    match window {
        WindowParams::Month { year, month } => format!("{prefix}/{year}/{month}"),
        WindowParams::Total { .. } => format!("{prefix}/total"),
    }
}

fn window_query(window: &WindowParams) -> Vec<(&'static str, String)> {
    match window {
        WindowParams::Total {
            end_date: Some(end),
        } => vec![("end_date", end.to_rfc3339())],
        _ => Vec::new(),
    }
}

fn push_channel(query: &mut Vec<(&'static str, String)>, channel_id: Option<&str>) {
    if let Some(id) = channel_id {
        query.push(("channel_id", id.to_string()));
    }
}

#[async_trait]
impl StatsApi for HttpStatsApi {
    async fn ranking(
        &self,
        window: &WindowParams,
        channel_id: Option<&str>,
    ) -> Result<Vec<RankingEntry>, FetchError> {
        let mut query = window_query(window);
        push_channel(&mut query, channel_id);
        // The ranking route names its calendar variant explicitly.
        let path = match window {
            WindowParams::Month { year, month } => format!("/api/ranking/monthly/{year}/{month}"),
            WindowParams::Total { .. } => "/api/ranking/total".to_string(),
        };
        self.get_json(Endpoint::Ranking, &path, &query).await
    }

    async fn history(
        &self,
        window: &WindowParams,
        channel_id: Option<&str>,
        target_id: Option<&str>,
    ) -> Result<TrendSeries, FetchError> {
        let mut query = window_query(window);
        push_channel(&mut query, channel_id);
        if let Some(id) = target_id {
            query.push(("user_id", id.to_string()));
        }
        self.get_json(
            Endpoint::History,
            &scoped_path("/api/stats/history", window),
            &query,
        )
        .await
    }

    async fn heatmap(
        &self,
        window: &WindowParams,
        channel_id: Option<&str>,
    ) -> Result<Vec<HeatmapCell>, FetchError> {
        let mut query = window_query(window);
        push_channel(&mut query, channel_id);
        self.get_json(
            Endpoint::Heatmap,
            &scoped_path("/api/stats/heatmap", window),
            &query,
        )
        .await
    }

    async fn analysis(
        &self,
        window: &WindowParams,
        channel_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<AnalysisSummary, FetchError> {
        let mut query = window_query(window);
        push_channel(&mut query, channel_id);
        if let Some(id) = user_id {
            query.push(("user_id", id.to_string()));
        }
        self.get_json(
            Endpoint::Analysis,
            &scoped_path("/api/stats/analysis", window),
            &query,
        )
        .await
    }

    async fn channel_shares(
        &self,
        window: &WindowParams,
    ) -> Result<Vec<ChannelShare>, FetchError> {
        let query = window_query(window);
        self.get_json(
            Endpoint::ChannelShares,
            &scoped_path("/api/stats/channels_distribution", window),
            &query,
        )
        .await
    }

    async fn snapshot(&self, snapshot_id: u64) -> Result<Snapshot, FetchError> {
        self.get_json(
            Endpoint::SnapshotInfo,
            &format!("/api/snapshots/{snapshot_id}"),
            &[],
        )
        .await
    }

    async fn snapshots(&self) -> Result<Vec<Snapshot>, FetchError> {
        self.get_json(Endpoint::SnapshotList, "/api/snapshots", &[])
            .await
    }

    async fn channels(&self) -> Result<Vec<ChannelInfo>, FetchError> {
        self.get_json(Endpoint::ChannelList, "/api/channels", &[])
            .await
    }

    async fn search_users(&self, query: &str) -> Result<Vec<UserHit>, FetchError> {
        self.get_json(
            Endpoint::UserSearch,
            "/api/users/search",
            &[("q", query.to_string())],
        )
        .await
    }
}
