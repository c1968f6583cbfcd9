//! Cancellable scheduled advances.

use crate::AdvanceTicket;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// A character advance waiting on the tokio timer.
///
/// When the delay elapses the ticket is sent on the channel it was armed
/// with. Cancelling, or dropping the handle, aborts the timer task, so an
/// advance never outlives its owner.
#[derive(Debug)]
pub struct ScheduledAdvance {
    ticket: AdvanceTicket,
    handle: JoinHandle<()>,
}

impl ScheduledAdvance {
    /// Arm an advance that delivers `ticket` on `fired` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(
        ticket: AdvanceTicket,
        delay: Duration,
        fired: UnboundedSender<AdvanceTicket>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session ended; nothing to do.
            let _ = fired.send(ticket);
        });
        Self { ticket, handle }
    }

    /// Ticket this advance will deliver.
    pub fn ticket(&self) -> AdvanceTicket {
        self.ticket
    }

    /// Cancel the advance.
    pub fn cancel(self) {
        drop(self);
    }

    /// Whether the timer task has finished, by firing or by being aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
