// Deferred validation with supersede semantics
use crate::models::ScheduledResult;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use validators::validate_address;

/// Delay before a scheduled validation runs, so the pending state is visible
pub const DEFAULT_VALIDATION_DELAY: Duration = Duration::from_millis(200);

/// Runs validations after a delay on the tokio runtime.
///
/// Only one validation is ever in flight: scheduling a new one aborts the
/// previous task, and `accept` rejects results from any older ticket that
/// slipped through before the abort.
pub struct ValidationScheduler {
    tx: mpsc::UnboundedSender<ScheduledResult>,
    next_ticket: u64,
    in_flight: Option<(u64, JoinHandle<()>)>,
}

impl ValidationScheduler {
    pub fn new(tx: mpsc::UnboundedSender<ScheduledResult>) -> Self {
        ValidationScheduler {
            tx,
            next_ticket: 0,
            in_flight: None,
        }
    }

    /// Schedule validation of `candidate`, superseding any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, candidate: String, delay: Duration) -> u64 {
        self.cancel();

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let result = validate_address(&candidate);
            // The receiver is gone once the UI has shut down
            let _ = tx.send((ticket, result));
        });

        logging::debug(&format!("Scheduled validation #{} in {:?}", ticket, delay));
        self.in_flight = Some((ticket, handle));
        ticket
    }

    /// Abort the pending validation, if any
    pub fn cancel(&mut self) {
        if let Some((ticket, handle)) = self.in_flight.take() {
            handle.abort();
            logging::debug(&format!("Cancelled validation #{}", ticket));
        }
    }

    /// Whether a result for `ticket` is current. Accepting clears it.
    pub fn accept(&mut self, ticket: u64) -> bool {
        match &self.in_flight {
            Some((current, _)) if *current == ticket => {
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl Drop for ValidationScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
