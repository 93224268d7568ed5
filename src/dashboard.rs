//! Fallback controller: one authoritative view-state slot per dashboard,
//! updated only through the `settle` reducer. Each fetch cycle goes
//! Loading -> {Live, SampleEmpty, SampleError}; empty or failed fetches
//! fall back to the bundled sample data, filtered with the same criteria
//! that were sent to the server.

use crate::aggregate;
use crate::api::InvoiceFetcher;
use crate::error::ApiError;
use crate::filter;
use crate::models::{FilterCriteria, Invoice, Totals};
use crate::sample;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Everything the presentation layer needs to render the dashboard:
/// the displayed collection, its totals, and the banner flags.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub invoices: Vec<Invoice>,
    pub totals: Totals,
    pub loading: bool,
    /// When true the view must show the "using sample data" notice.
    pub using_sample_data: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    /// A view starts in Loading until its first fetch settles.
    fn default() -> Self {
        Self {
            invoices: Vec::new(),
            totals: Totals::default(),
            loading: true,
            using_sample_data: false,
            error: None,
        }
    }
}

impl DashboardState {
    fn live(invoices: Vec<Invoice>) -> Self {
        let totals = aggregate::totals(&invoices);
        Self {
            invoices,
            totals,
            loading: false,
            using_sample_data: false,
            error: None,
        }
    }

    fn sample(criteria: &FilterCriteria, error: Option<String>) -> Self {
        let invoices = filter::apply(&sample::invoices(), criteria);
        let totals = aggregate::totals(&invoices);
        Self {
            invoices,
            totals,
            loading: false,
            using_sample_data: true,
            error,
        }
    }
}

/// Reduce a settled fetch outcome to the next view state.
///
/// Non-empty success is used verbatim (the server already applied the
/// criteria). Empty success falls back to locally filtered sample data with
/// the error cleared; a failure does the same but carries the user-facing
/// message. This is the single place fetch outcomes become display state.
pub fn settle(criteria: &FilterCriteria, outcome: Result<Vec<Invoice>, ApiError>) -> DashboardState {
    match outcome {
        Ok(invoices) if !invoices.is_empty() => {
            log::debug!("[lumen_core] settle: live, {} invoices", invoices.len());
            DashboardState::live(invoices)
        }
        Ok(_) => {
            log::debug!("[lumen_core] settle: empty result, falling back to sample data");
            DashboardState::sample(criteria, None)
        }
        Err(e) => {
            log::warn!("[lumen_core] settle: fetch failed, falling back to sample data: {}", e);
            DashboardState::sample(criteria, Some(e.user_message()))
        }
    }
}

/// Owns the current view state and serializes commits. Fetches are
/// single-attempt (no retry, no backoff); the user re-triggers by applying
/// or clearing a filter, or by reloading.
///
/// Each refresh takes a monotonically increasing token; a settling fetch
/// commits only while it still holds the newest token, so a slow stale
/// response can never clobber a fresher one.
#[derive(Debug, Default)]
pub struct Dashboard {
    state: Mutex<DashboardState>,
    seq: AtomicU64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> DashboardState {
        self.state.lock().unwrap().clone()
    }

    /// Run one fetch cycle: enter Loading, await the fetch, settle, commit.
    /// Returns the state after this cycle (the committed state, or the
    /// newer one that superseded it).
    pub async fn refresh<F>(&self, fetcher: &F, criteria: &FilterCriteria) -> DashboardState
    where
        F: InvoiceFetcher + Sync + ?Sized,
    {
        let token = self.begin_loading();
        let outcome = fetcher.fetch_invoices(criteria).await;
        self.commit(token, settle(criteria, outcome))
    }

    fn begin_loading(&self) -> u64 {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.lock().unwrap();
        state.loading = true;
        token
    }

    fn commit(&self, token: u64, next: DashboardState) -> DashboardState {
        let mut state = self.state.lock().unwrap();
        if token == self.seq.load(Ordering::SeqCst) {
            *state = next;
        } else {
            log::debug!(
                "[lumen_core] commit: dropping stale fetch result (token={}, latest={})",
                token,
                self.seq.load(Ordering::SeqCst)
            );
        }
        state.clone()
    }
}
