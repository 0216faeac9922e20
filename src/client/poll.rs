//! Confirmation polling with exponential backoff.
//!
//! After a transaction is broadcast its inclusion is observed by polling
//! status lookups. The first lookup happens immediately; each subsequent
//! wait grows by a constant factor. Polling stops at a terminal status or
//! when the next wait would cross the budget deadline. Running out of
//! budget is not a failure: the transaction may still confirm later, and
//! the caller keeps the hash.

use std::time::Duration;

use tokio::time::Instant;

use crate::client::rpc::LedgerRpc;
use crate::error::Error;
use crate::types::{GetTransactionResponse, Hash, TxStatus};

/// Default confirmation budget.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(10);

/// Backoff parameters for confirmation polling.
#[derive(Clone, Debug)]
pub struct PollConfig {
    /// Wait before the second lookup, in milliseconds.
    pub base_delay_ms: u64,
    /// Growth factor applied to each subsequent wait.
    pub factor: f64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 1000,
            factor: 1.5,
        }
    }
}

impl PollConfig {
    /// The wait before lookup `attempt + 1` (the first lookup waits nothing).
    pub fn delay(&self, attempt: u32) -> Duration {
        let ms = self.base_delay_ms as f64 * self.factor.powi(attempt as i32);
        Duration::from_millis(ms as u64)
    }
}

/// One status lookup as it happened.
#[derive(Clone, Copy, Debug)]
pub struct PollRecord {
    /// The status the lookup reported.
    pub status: TxStatus,
    /// How long the poller waited before this lookup. `None` for the
    /// immediate first lookup.
    pub waited: Option<Duration>,
}

/// Append-only record of the lookups made for one transaction.
///
/// Non-empty whenever polling actually ran; the last record is
/// authoritative.
#[derive(Clone, Debug, Default)]
pub struct PollHistory {
    records: Vec<PollRecord>,
}

impl PollHistory {
    fn push(&mut self, status: TxStatus, waited: Option<Duration>) {
        self.records.push(PollRecord { status, waited });
    }

    /// The lookups in order.
    pub fn records(&self) -> &[PollRecord] {
        &self.records
    }

    /// The last lookup, once any happened.
    pub fn last(&self) -> Option<&PollRecord> {
        self.records.last()
    }

    /// Number of lookups performed.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no lookup was performed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Where a polled transaction ended up.
#[derive(Clone, Debug)]
pub enum PollOutcome {
    /// A terminal status was observed.
    Terminal {
        /// The terminal lookup response.
        response: GetTransactionResponse,
        /// Every lookup made, the terminal one last.
        history: PollHistory,
    },
    /// The budget ran out before a terminal status appeared.
    ///
    /// Not a failure. The transaction remains in flight and may still
    /// confirm; the caller can keep checking by hash.
    TimedOut {
        /// Every lookup made; empty when polling was disabled.
        history: PollHistory,
    },
}

/// Poll a transaction's status until terminal or out of budget.
///
/// A zero budget disables polling entirely: no lookup is made.
pub async fn poll_transaction(
    rpc: &dyn LedgerRpc,
    hash: &Hash,
    budget: Duration,
    config: &PollConfig,
) -> Result<PollOutcome, Error> {
    if budget.is_zero() {
        tracing::debug!(%hash, "confirmation polling disabled");
        return Ok(PollOutcome::TimedOut {
            history: PollHistory::default(),
        });
    }

    let deadline = Instant::now() + budget;
    let mut history = PollHistory::default();
    let mut waited = None;

    loop {
        let response = rpc.get_transaction(hash).await?;
        history.push(response.status, waited);

        if response.status.is_terminal() {
            tracing::debug!(%hash, status = ?response.status, attempts = history.len(), "transaction terminal");
            return Ok(PollOutcome::Terminal { response, history });
        }

        // history.len() - 1 pauses have happened already
        let delay = config.delay(history.len() as u32 - 1);
        if Instant::now() + delay > deadline {
            tracing::warn!(
                %hash,
                attempts = history.len(),
                budget_ms = budget.as_millis() as u64,
                "gave up waiting for confirmation; transaction may still land"
            );
            return Ok(PollOutcome::TimedOut { history });
        }
        tokio::time::sleep(delay).await;
        waited = Some(delay);
    }
}
