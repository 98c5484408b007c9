//! Focus-user search controller
//!
//! Lets the viewer search for any user and pull their series into the
//! trend chart, even outside the server's top-N, without touching the
//! primary ranking display. Keystrokes are debounced into at most one
//! pending timer; responses carry a sequence tag and only the response
//! matching the highest issued tag is ever applied, so out-of-order
//! completions cannot surface stale results.

use crate::api::StatsApi;
use crate::models::UserHit;
use crate::session::DashboardSession;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Debounced, race-safe user search bound to a dashboard session.
pub struct FocusSearch<A: StatsApi + 'static> {
    session: Arc<DashboardSession<A>>,

    /// Delay between the last keystroke and the request.
    debounce: Duration,

    /// Monotonic tag; a response applies only while its tag is still the
    /// highest issued.
    seq: Arc<AtomicU64>,

    /// Current query text, cleared on selection.
    query: Mutex<String>,

    /// The single pending debounce task; replaced on every keystroke.
    pending: Mutex<Option<JoinHandle<()>>>,

    results_tx: Arc<watch::Sender<Vec<UserHit>>>,
}

impl<A: StatsApi + 'static> FocusSearch<A> {
    pub fn new(session: Arc<DashboardSession<A>>, debounce: Duration) -> Self {
        let (results_tx, _) = watch::channel(Vec::new());
        Self {
            session,
            debounce,
            seq: Arc::new(AtomicU64::new(0)),
            query: Mutex::new(String::new()),
            pending: Mutex::new(None),
            results_tx: Arc::new(results_tx),
        }
    }

    /// Subscribe to search result updates.
    pub fn results(&self) -> watch::Receiver<Vec<UserHit>> {
        self.results_tx.subscribe()
    }

    pub fn query(&self) -> String {
        self.query.lock().clone()
    }

    /// Feed the current query text. Restarts the debounce delay; an empty
    /// or whitespace query clears results without issuing a request.
    pub fn input(&self, raw: &str) {
        let seq = self.bump_seq();
        *self.query.lock() = raw.to_string();

        let trimmed = raw.trim().to_string();
        if trimmed.is_empty() {
            self.results_tx.send_replace(Vec::new());
            return;
        }

        let session = Arc::clone(&self.session);
        let seq_cell = Arc::clone(&self.seq);
        let results_tx = Arc::clone(&self.results_tx);
        let debounce = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if seq_cell.load(Ordering::SeqCst) != seq {
                return;
            }
            match session.api().search_users(&trimmed).await {
                Ok(hits) => {
                    if seq_cell.load(Ordering::SeqCst) == seq {
                        debug!(query = %trimmed, count = hits.len(), "search results applied");
                        results_tx.send_replace(hits);
                    } else {
                        debug!(query = %trimmed, "stale search response discarded");
                    }
                }
                Err(err) => {
                    // Non-fatal: the dashboard stays usable without results.
                    warn!(query = %trimmed, error = %err, "user search failed");
                }
            }
        });
        *self.pending.lock() = Some(handle);
    }

    /// Select a search result: clears the query and result list, then
    /// re-fetches only the trend with the selected user as target.
    pub async fn select(&self, hit: &UserHit) {
        self.bump_seq();
        self.query.lock().clear();
        self.results_tx.send_replace(Vec::new());
        self.session.focus_user(Some(hit.user_id.clone())).await;
    }

    /// Drop the focused user; the trend target reverts to the requester.
    pub async fn clear_focus(&self) {
        self.bump_seq();
        self.query.lock().clear();
        self.results_tx.send_replace(Vec::new());
        self.session.focus_user(None).await;
    }

    /// Advance the sequence and cancel the pending timer, if any.
    fn bump_seq(&self) -> u64 {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
        seq
    }
}

impl<A: StatsApi + 'static> Drop for FocusSearch<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}
