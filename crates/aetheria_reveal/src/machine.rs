//! Reveal state machine.

use crate::{RevealPhase, RevealState};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Per-character delay used when none is given.
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(15);

/// Identifies one armed character advance.
///
/// A ticket is only honoured while it is the machine's pending ticket, so an
/// advance that fires after a reset or cancellation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("session {session} advance {seq}")]
pub struct AdvanceTicket {
    session: u64,
    seq: u64,
}

/// What the driver must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Arm one advance that fires after `delay`, cancelling any other
    Schedule {
        /// Ticket to hand back to [`Revealer::on_advance`]
        ticket: AdvanceTicket,
        /// Time to wait before firing
        delay: Duration,
    },
    /// The reveal just completed; notify completion once
    Complete,
    /// Nothing changed
    Unchanged,
}

/// Letter-by-letter reveal of a source string.
///
/// States are `Idle` (no source yet), `Revealing(position)` and `Complete`.
/// Supplying a different source from any state restarts at position zero.
/// Each successful advance reveals exactly one more character, whatever the
/// delay, and at most one advance is pending at any time.
///
/// # Examples
///
/// ```
/// use aetheria_reveal::{Directive, Revealer};
/// use std::time::Duration;
///
/// let mut revealer = Revealer::new(Duration::ZERO);
/// let mut directive = revealer.set_source("hi");
/// let mut frames = vec![revealer.prefix().to_string()];
/// while let Directive::Schedule { ticket, .. } = directive {
///     directive = revealer.on_advance(ticket).unwrap();
///     frames.push(revealer.prefix().to_string());
/// }
/// assert_eq!(frames, ["", "h", "hi"]);
/// assert_eq!(directive, Directive::Complete);
/// ```
#[derive(Debug, Clone)]
pub struct Revealer {
    source: Arc<str>,
    /// Characters revealed
    position: usize,
    /// Byte length of the revealed prefix
    offset: usize,
    phase: RevealPhase,
    delay: Duration,
    session: u64,
    next_seq: u64,
    pending: Option<AdvanceTicket>,
    armed: u64,
}

impl Default for Revealer {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_DELAY)
    }
}

impl Revealer {
    /// Creates an idle revealer with the given per-character delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            source: Arc::from(""),
            position: 0,
            offset: 0,
            phase: RevealPhase::Idle,
            delay,
            session: 0,
            next_seq: 0,
            pending: None,
            armed: 0,
        }
    }

    /// Supply the text to reveal.
    ///
    /// A source equal to the current one leaves a live or finished reveal
    /// alone and returns [`Directive::Unchanged`]; use [`Revealer::restart`]
    /// to replay it. A reveal halted by [`Revealer::cancel`] restarts. An
    /// empty source completes immediately without arming anything.
    pub fn set_source(&mut self, source: impl Into<String>) -> Directive {
        let source = source.into();
        let progressing = self.phase == RevealPhase::Complete || self.pending.is_some();
        if progressing && *source == *self.source {
            trace!("Source unchanged, keeping reveal progress");
            return Directive::Unchanged;
        }
        self.source = Arc::from(source);
        self.restart()
    }

    /// Restart the current source from position zero.
    pub fn restart(&mut self) -> Directive {
        self.session += 1;
        self.pending = None;
        self.position = 0;
        self.offset = 0;

        debug!(
            session = self.session,
            chars = self.source.chars().count(),
            "Starting reveal"
        );

        if self.source.is_empty() {
            self.phase = RevealPhase::Complete;
            return Directive::Complete;
        }
        self.phase = RevealPhase::Revealing;
        self.arm()
    }

    /// Handle a fired advance.
    ///
    /// Returns `None` for a ticket that is no longer pending. Otherwise one
    /// more character becomes visible and the next directive is returned.
    pub fn on_advance(&mut self, ticket: AdvanceTicket) -> Option<Directive> {
        if self.pending != Some(ticket) {
            trace!(%ticket, "Ignoring stale advance");
            return None;
        }
        self.pending = None;

        let next = self.source[self.offset..].chars().next()?;
        self.offset += next.len_utf8();
        self.position += 1;

        if self.offset == self.source.len() {
            self.phase = RevealPhase::Complete;
            debug!(session = self.session, chars = self.position, "Reveal complete");
            Some(Directive::Complete)
        } else {
            Some(self.arm())
        }
    }

    /// Drop the pending advance, if any, so nothing fires after teardown.
    ///
    /// Progress is kept and the machine stops advancing until a source is
    /// supplied or [`Revealer::restart`] is called.
    pub fn cancel(&mut self) -> Option<AdvanceTicket> {
        self.pending.take()
    }

    fn arm(&mut self) -> Directive {
        let ticket = AdvanceTicket {
            session: self.session,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.armed += 1;
        self.pending = Some(ticket);
        Directive::Schedule {
            ticket,
            delay: self.delay,
        }
    }

    /// The visible prefix.
    pub fn prefix(&self) -> &str {
        &self.source[..self.offset]
    }

    /// The full source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Characters revealed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// The advance currently awaited, if any.
    pub fn pending(&self) -> Option<AdvanceTicket> {
        self.pending
    }

    /// Per-character delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the per-character delay for advances armed from now on.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Total advances armed over the machine's lifetime.
    pub fn armed_advances(&self) -> u64 {
        self.armed
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RevealState {
        RevealState::new(Arc::clone(&self.source), self.position, self.phase)
    }
}
