//! Dashboard session: scoped fetch orchestration and view publication
//!
//! One `DashboardSession` owns the view state for one page. Activating a
//! scope issues the full concurrent request set, applies the
//! required/optional policy, and publishes the merged view model plus a
//! readiness notification. Activations are numbered; only the result of
//! the latest generation may publish, so a slow superseded fetch can
//! never clobber a newer view.

use crate::api::StatsApi;
use crate::error::{FailureKind, FetchError};
use crate::event::{DashboardEvent, EventBus};
use crate::models::{ReportWindow, Scope, ViewModel, WindowParams};
use crate::visual::resolve_rank;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Observable readiness of the current view.
///
/// Resets to `Pending` at the start of every activation; each activation
/// then sends exactly one terminal value - unless superseded, in which
/// case it sends nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    Ready,
    Failed(FailureKind),
}

/// Per-page orchestrator over a [`StatsApi`] implementation.
pub struct DashboardSession<A> {
    api: A,

    /// The currently activated scope.
    scope: RwLock<Option<Scope>>,

    /// Window params after snapshot resolution; cached so trend-only
    /// refreshes do not re-fetch snapshot metadata.
    resolved: RwLock<Option<WindowParams>>,

    /// The searched-and-selected comparison user, if any.
    focused: RwLock<Option<String>>,

    /// Activation counter; the latest generation owns publication.
    generation: AtomicU64,

    /// The published view, swapped wholesale per activation.
    view: RwLock<Option<Arc<ViewModel>>>,

    readiness_tx: watch::Sender<Readiness>,
    events: EventBus,
}

impl<A: StatsApi> DashboardSession<A> {
    pub fn new(api: A) -> Self {
        let (readiness_tx, _) = watch::channel(Readiness::Pending);
        Self {
            api,
            scope: RwLock::new(None),
            resolved: RwLock::new(None),
            focused: RwLock::new(None),
            generation: AtomicU64::new(0),
            view: RwLock::new(None),
            readiness_tx,
            events: EventBus::default_capacity(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to readiness transitions.
    pub fn readiness(&self) -> watch::Receiver<Readiness> {
        self.readiness_tx.subscribe()
    }

    /// The currently published view, if any.
    pub fn view(&self) -> Option<Arc<ViewModel>> {
        self.view.read().clone()
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope.read().clone()
    }

    pub fn focused_user(&self) -> Option<String> {
        self.focused.read().clone()
    }

    /// Run a full activation for the scope and publish the outcome.
    ///
    /// Safe to call concurrently: every call starts a new generation and
    /// stale results are silently discarded.
    pub async fn activate(&self, scope: Scope) {
        // Take the generation under the scope lock so the stored scope and
        // the winning generation cannot disagree across concurrent calls.
        let generation = {
            let mut current = self.scope.write();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = Some(scope.clone());
            generation
        };
        self.readiness_tx.send_replace(Readiness::Pending);
        self.events
            .publish(DashboardEvent::ActivationStarted(generation));
        debug!(generation, "activation started");

        match self.run_activation(generation, &scope).await {
            Ok(view) => self.publish(generation, view),
            Err(err) => self.fail(generation, err),
        }
    }

    /// Change the focused comparison user and re-fetch only the trend.
    pub async fn focus_user(&self, user_id: Option<String>) {
        *self.focused.write() = user_id.clone();
        self.events.publish(DashboardEvent::FocusChanged(user_id));
        self.refresh_trend().await;
    }

    /// Re-issue the history request alone, keeping every other field of
    /// the current view. The history source is the only one that accepts
    /// a target-inclusion id, so nothing else needs to move.
    pub async fn refresh_trend(&self) {
        let Some(scope) = self.scope() else {
            debug!("trend refresh without an activated scope, ignoring");
            return;
        };

        let window = self.resolved.read().clone();
        let base = self.view();
        let (Some(window), Some(base)) = (window, base) else {
            // Nothing published yet; run the full orchestration instead.
            self.activate(scope).await;
            return;
        };

        let generation = self.begin_activation();
        let target = self.trend_target(&scope);
        debug!(generation, ?target, "trend-only refresh");

        match self
            .api
            .history(&window, scope.channel_id.as_deref(), target.as_deref())
            .await
        {
            Ok(trend) => {
                let view = ViewModel {
                    trend,
                    ..(*base).clone()
                };
                self.publish(generation, view);
            }
            Err(err) => self.fail(generation, err),
        }
    }

    /// Target id for the history request: the focused user wins, then the
    /// identified requester, else unset.
    fn trend_target(&self, scope: &Scope) -> Option<String> {
        self.focused
            .read()
            .clone()
            .or_else(|| scope.requester.id().map(str::to_string))
    }

    fn begin_activation(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.readiness_tx.send_replace(Readiness::Pending);
        self.events
            .publish(DashboardEvent::ActivationStarted(generation));
        generation
    }

    async fn run_activation(
        &self,
        generation: u64,
        scope: &Scope,
    ) -> Result<ViewModel, FetchError> {
        // Snapshot scope resolves its end-date bound first; every other
        // request derives its period parameters from it.
        let (window, snapshot) = match &scope.window {
            ReportWindow::Month { year, month } => (
                WindowParams::Month {
                    year: *year,
                    month: *month,
                },
                None,
            ),
            ReportWindow::Snapshot { snapshot_id } => {
                let info = self.api.snapshot(*snapshot_id).await?;
                (
                    WindowParams::Total {
                        end_date: Some(info.created_at),
                    },
                    Some(info),
                )
            }
        };

        {
            let mut resolved = self.resolved.write();
            if self.generation.load(Ordering::SeqCst) == generation {
                *resolved = Some(window.clone());
            }
        }

        let channel = scope.channel_id.as_deref();
        let requester = scope.requester.id();
        let target = self.trend_target(scope);

        let (ranking, trend, heatmap, overall, personal, shares) = tokio::join!(
            self.api.ranking(&window, channel),
            self.api.history(&window, channel, target.as_deref()),
            self.api.heatmap(&window, channel),
            self.api.analysis(&window, channel, None),
            async {
                if scope.wants_personal() {
                    Some(self.api.analysis(&window, channel, requester).await)
                } else {
                    None
                }
            },
            async {
                if scope.wants_channel_shares() {
                    Some(self.api.channel_shares(&window).await)
                } else {
                    None
                }
            },
        );

        // Required sources: any failure aborts the whole activation.
        let ranking = ranking?;
        let trend = trend?;
        let heatmap = heatmap?;
        let overall = overall?;

        // Optional sources degrade to an explicit absent value.
        let personal = match personal {
            None => None,
            Some(Ok(summary)) => Some(summary),
            Some(Err(err)) => {
                warn!(error = %err, "personal analysis unavailable, continuing without it");
                None
            }
        };
        let channel_shares = match shares {
            None => Vec::new(),
            Some(Ok(shares)) => shares,
            Some(Err(err)) => {
                warn!(error = %err, "channel distribution unavailable, continuing without it");
                Vec::new()
            }
        };

        let my_rank = resolve_rank(&ranking, requester);
        let top_count = ranking.first().map(|e| e.message_count).unwrap_or(0);

        Ok(ViewModel {
            ranking,
            trend,
            heatmap,
            overall,
            personal,
            channel_shares,
            my_rank,
            top_count,
            snapshot,
        })
    }

    fn publish(&self, generation: u64, view: ViewModel) {
        let mut guard = self.view.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "stale activation result discarded");
            return;
        }
        *guard = Some(Arc::new(view));
        drop(guard);

        self.readiness_tx.send_replace(Readiness::Ready);
        self.events
            .publish(DashboardEvent::ViewPublished(generation));
        info!(generation, "view model published");
    }

    fn fail(&self, generation: u64, err: FetchError) {
        let mut guard = self.view.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "stale activation failure discarded");
            return;
        }
        // No partial view: clear anything from the previous scope.
        *guard = None;
        drop(guard);

        let kind = err.failure_kind();
        warn!(generation, error = %err, "activation failed");
        self.readiness_tx.send_replace(Readiness::Failed(kind));
        self.events
            .publish(DashboardEvent::ActivationFailed { generation, kind });
    }
}

impl<A: StatsApi + 'static> DashboardSession<A> {
    /// Fire-and-forget activation for page-level triggers; observers wait
    /// on [`DashboardSession::readiness`].
    pub fn spawn_activate(self: &Arc<Self>, scope: Scope) {
        let session = Arc::clone(self);
        tokio::spawn(async move {
            session.activate(scope).await;
        });
    }
}
