//! Reveal observers.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Receives the output of a [`RevealSession`](crate::RevealSession).
///
/// Called on the session task, in order: one `on_frame` with the empty
/// prefix when a source arrives, one per revealed character, then a single
/// `on_complete` when the whole source is visible.
pub trait RevealObserver: Send + 'static {
    /// The visible prefix changed.
    fn on_frame(&mut self, prefix: &str);

    /// The reveal of `source` finished.
    fn on_complete(&mut self, source: &str);
}

/// One observable reveal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// New visible prefix
    Frame(String),
    /// Reveal of this source completed
    Complete(String),
}

/// Observer that forwards every event into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    events: UnboundedSender<RevealEvent>,
}

impl ChannelObserver {
    /// Create an observer and the receiving end of its channel.
    pub fn new() -> (Self, UnboundedReceiver<RevealEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (Self { events }, rx)
    }
}

impl RevealObserver for ChannelObserver {
    fn on_frame(&mut self, prefix: &str) {
        let _ = self.events.send(RevealEvent::Frame(prefix.to_string()));
    }

    fn on_complete(&mut self, source: &str) {
        let _ = self.events.send(RevealEvent::Complete(source.to_string()));
    }
}
