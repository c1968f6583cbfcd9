//! Progressive text reveal.
//!
//! [`Revealer`] is a pure state machine: it decides what to show and when the
//! next character is due, but never sleeps. [`RevealSession`] drives one on a
//! tokio task, arming a single [`ScheduledAdvance`] at a time and reporting
//! each frame to a [`RevealObserver`].

mod machine;
mod observer;
mod scheduler;
mod session;
mod state;

pub use machine::{AdvanceTicket, DEFAULT_CHAR_DELAY, Directive, Revealer};
pub use observer::{ChannelObserver, RevealEvent, RevealObserver};
pub use scheduler::ScheduledAdvance;
pub use session::RevealSession;
pub use state::{RevealPhase, RevealState};
