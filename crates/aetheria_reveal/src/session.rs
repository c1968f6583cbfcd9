//! Tokio driver for the reveal state machine.

use crate::{
    AdvanceTicket, ChannelObserver, Directive, RevealEvent, RevealObserver, RevealState,
    Revealer, ScheduledAdvance,
};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace};

#[derive(Debug)]
enum Command {
    Source(String),
    Restart,
    Delay(Duration),
    Shutdown,
}

/// A running reveal, driven on its own tokio task.
///
/// Sources are queued in order. Each advance is a [`ScheduledAdvance`]; the
/// previous one is cancelled before the next is armed, so at most one is
/// pending. Dropping the session aborts the task along with its timer.
///
/// # Examples
///
/// ```
/// use aetheria_reveal::{RevealEvent, RevealSession};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (session, mut events) = RevealSession::with_channel(Duration::ZERO);
/// session.set_source("ok");
/// let mut frames = Vec::new();
/// while let Some(event) = events.recv().await {
///     match event {
///         RevealEvent::Frame(prefix) => frames.push(prefix),
///         RevealEvent::Complete(_) => break,
///     }
/// }
/// assert_eq!(frames, ["", "o", "ok"]);
/// session.shutdown().await;
/// # }
/// ```
#[derive(Debug)]
pub struct RevealSession {
    commands: UnboundedSender<Command>,
    state: watch::Receiver<RevealState>,
    task: Option<JoinHandle<()>>,
}

impl RevealSession {
    /// Start a session reporting to `observer`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<O>(delay: Duration, observer: O) -> Self
    where
        O: RevealObserver,
    {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(RevealState::idle());
        let task = tokio::spawn(run(Revealer::new(delay), observer, command_rx, state_tx));
        Self {
            commands,
            state,
            task: Some(task),
        }
    }

    /// Start a session whose events arrive on the returned channel.
    pub fn with_channel(delay: Duration) -> (Self, UnboundedReceiver<RevealEvent>) {
        let (observer, events) = ChannelObserver::new();
        (Self::spawn(delay, observer), events)
    }

    /// Supply a new source. Returns `false` if the session has ended.
    pub fn set_source(&self, source: impl Into<String>) -> bool {
        self.commands.send(Command::Source(source.into())).is_ok()
    }

    /// Replay the current source from the start. Returns `false` if the
    /// session has ended.
    pub fn restart(&self) -> bool {
        self.commands.send(Command::Restart).is_ok()
    }

    /// Change the per-character delay. The advance already armed keeps its
    /// delay; every later one uses the new value. Returns `false` if the
    /// session has ended.
    pub fn set_delay(&self, delay: Duration) -> bool {
        self.commands.send(Command::Delay(delay)).is_ok()
    }

    /// Latest state snapshot.
    pub fn state(&self) -> RevealState {
        self.state.borrow().clone()
    }

    /// Receiver that tracks the live state.
    pub fn subscribe(&self) -> watch::Receiver<RevealState> {
        self.state.clone()
    }

    /// Cancel any pending advance and wait for the session task to end.
    pub async fn shutdown(mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for RevealSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[instrument(skip_all)]
async fn run<O>(
    mut machine: Revealer,
    mut observer: O,
    mut commands: UnboundedReceiver<Command>,
    state: watch::Sender<RevealState>,
) where
    O: RevealObserver,
{
    let (fired_tx, mut fired) = mpsc::unbounded_channel::<AdvanceTicket>();
    let mut pending: Option<ScheduledAdvance> = None;

    loop {
        tokio::select! {
            command = commands.recv() => {
                let directive = match command {
                    Some(Command::Source(source)) => machine.set_source(source),
                    Some(Command::Restart) => machine.restart(),
                    Some(Command::Delay(delay)) => {
                        debug!(?delay, "Reveal delay changed");
                        machine.set_delay(delay);
                        continue;
                    }
                    Some(Command::Shutdown) | None => break,
                };
                if directive == Directive::Unchanged {
                    continue;
                }
                if let Some(previous) = pending.take() {
                    trace!(ticket = %previous.ticket(), "Cancelling advance for replaced source");
                    previous.cancel();
                }
                observer.on_frame(machine.prefix());
                pending = apply(directive, &machine, &mut observer, &fired_tx);
                state.send_replace(machine.state());
            }
            Some(ticket) = fired.recv() => {
                let Some(directive) = machine.on_advance(ticket) else {
                    continue;
                };
                if let Some(spent) = pending.take() {
                    spent.cancel();
                }
                observer.on_frame(machine.prefix());
                pending = apply(directive, &machine, &mut observer, &fired_tx);
                state.send_replace(machine.state());
            }
        }
    }

    if let Some(advance) = pending.take() {
        advance.cancel();
    }
    machine.cancel();
    debug!("Reveal session ended");
}

fn apply<O>(
    directive: Directive,
    machine: &Revealer,
    observer: &mut O,
    fired: &UnboundedSender<AdvanceTicket>,
) -> Option<ScheduledAdvance>
where
    O: RevealObserver,
{
    match directive {
        Directive::Schedule { ticket, delay } => {
            Some(ScheduledAdvance::arm(ticket, delay, fired.clone()))
        }
        Directive::Complete => {
            observer.on_complete(machine.source());
            None
        }
        Directive::Unchanged => None,
    }
}
