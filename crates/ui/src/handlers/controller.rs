// Input controller: turns user actions into scheduled validations
use crate::models::{InputSource, ResultSink, ScheduledResult};
use crate::scheduler::ValidationScheduler;
use std::time::Duration;
use tokio::sync::mpsc;

pub struct InputController {
    scheduler: ValidationScheduler,
    delay: Duration,
}

impl InputController {
    pub fn new(tx: mpsc::UnboundedSender<ScheduledResult>, delay: Duration) -> Self {
        InputController {
            scheduler: ValidationScheduler::new(tx),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle a submit (Enter or the validate button).
    ///
    /// Blank input is ignored. Otherwise the sink goes pending and a
    /// validation of the trimmed text is scheduled; its ticket is returned.
    pub fn submit<I, S>(&mut self, input: &I, sink: &mut S) -> Option<u64>
    where
        I: InputSource,
        S: ResultSink,
    {
        let address = input.current_text().trim().to_string();
        if address.is_empty() {
            return None;
        }

        sink.show_pending();
        Some(self.scheduler.schedule(address, self.delay))
    }

    /// Hand a finished validation to the sink unless it was superseded
    pub fn deliver<S: ResultSink>(&mut self, scheduled: ScheduledResult, sink: &mut S) -> bool {
        let (ticket, result) = scheduled;
        if !self.scheduler.accept(ticket) {
            logging::debug(&format!("Dropping stale validation #{}", ticket));
            return false;
        }

        sink.show_result(&result);
        true
    }

    /// The text changed under a pending or shown result
    pub fn input_changed<S: ResultSink>(&mut self, sink: &mut S) {
        self.scheduler.cancel();
        sink.reset();
    }

    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending()
    }
}
