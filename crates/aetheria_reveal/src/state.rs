//! Reveal state snapshots.

use derive_getters::Getters;
use serde::Serialize;
use std::sync::Arc;

/// Where a reveal session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum RevealPhase {
    /// No source has been supplied yet
    #[display("idle")]
    Idle,
    /// Characters are still being revealed
    #[display("revealing")]
    Revealing,
    /// The whole source is visible
    #[display("complete")]
    Complete,
}

/// Point-in-time view of a reveal.
///
/// `revealed_prefix_length` counts characters, not bytes, and only ever
/// grows within one session. The source is shared with the revealer, so a
/// snapshot never copies the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct RevealState {
    /// Full text being revealed
    #[getter(skip)]
    source: Arc<str>,
    /// Characters currently visible
    revealed_prefix_length: usize,
    /// Whether the whole source is visible
    is_complete: bool,
    /// Current phase
    phase: RevealPhase,
}

impl RevealState {
    pub(crate) fn new(
        source: Arc<str>,
        revealed_prefix_length: usize,
        phase: RevealPhase,
    ) -> Self {
        Self {
            source,
            revealed_prefix_length,
            is_complete: phase == RevealPhase::Complete,
            phase,
        }
    }

    /// The idle state: empty source, nothing revealed.
    pub fn idle() -> Self {
        Self::new(Arc::from(""), 0, RevealPhase::Idle)
    }

    /// Full text being revealed.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The visible prefix of the source.
    pub fn prefix(&self) -> &str {
        match self.source.char_indices().nth(self.revealed_prefix_length) {
            Some((end, _)) => &self.source[..end],
            None => &self.source,
        }
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::idle()
    }
}
