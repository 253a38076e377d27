//! Async session driver: owns the session, serializes events, scopes
//! timers to the phase that created them.
//!
//! All mutation happens on one task: inputs arrive on an mpsc channel and
//! each is applied to completion before the next is read, so transitions
//! never interleave. Tick tasks are held in abort-on-drop guards and
//! reconciled against the phase after every event, which guarantees a
//! timer cannot outlive the phase that owns it, `Reset` included. A tick
//! already queued when its phase ends is applied as a no-op by the
//! transition table.

use crate::command::{route_key, Command};
use crate::session::Session;
use crate::view::SessionView;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Inbound event for the driver task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// A presenter command.
    Command(Command),
    /// An abstract key press; routed per the keyboard rules (space
    /// answers, letters fill, the rest is dropped).
    Key(char),
}

/// Error returned when sending to a driver that has shut down.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("session driver is no longer running")]
pub struct DriverClosed;

/// Handle to a running session driver.
///
/// Dropping the handle aborts the driver task and every timer it owns.
pub struct SessionDriver {
    inputs: mpsc::UnboundedSender<SessionInput>,
    views: watch::Receiver<SessionView>,
    task: JoinHandle<()>,
}

impl SessionDriver {
    /// Spawns a driver with entropy-seeded borrow randomness.
    pub fn spawn() -> Self {
        Self::spawn_with_rng(StdRng::from_entropy())
    }

    /// Spawns a driver with the given RNG; tests seed this for
    /// reproducible borrows.
    pub fn spawn_with_rng(rng: StdRng) -> Self {
        let (inputs, input_rx) = mpsc::unbounded_channel();
        let (view_tx, views) = watch::channel(SessionView::project(&Session::Idle));
        let tick_tx = inputs.clone();
        let task = tokio::spawn(run(input_rx, view_tx, tick_tx, rng));
        Self {
            inputs,
            views,
            task,
        }
    }

    /// Sends one input to the driver.
    pub fn send(&self, input: SessionInput) -> Result<(), DriverClosed> {
        self.inputs.send(input).map_err(|_| DriverClosed)
    }

    /// A sender for feeding inputs from another task.
    pub fn sender(&self) -> mpsc::UnboundedSender<SessionInput> {
        self.inputs.clone()
    }

    /// A receiver following the display projection; updated after every
    /// applied event.
    pub fn views(&self) -> watch::Receiver<SessionView> {
        self.views.clone()
    }
}

impl Drop for SessionDriver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A running 1-second tick task. Aborted when dropped, so replacing or
/// clearing the guard is all it takes to stop the clock.
struct TickGuard(JoinHandle<()>);

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn spawn_ticker(tick: Command, tx: mpsc::UnboundedSender<SessionInput>) -> TickGuard {
    TickGuard(tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // The first interval tick completes immediately; skip it so the
        // clock decrements one full second after the phase begins.
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(SessionInput::Command(tick)).is_err() {
                return;
            }
        }
    }))
}

/// Starts or stops a tick task so it matches what the phase owns.
fn reconcile(
    guard: &mut Option<TickGuard>,
    wanted: bool,
    tick: Command,
    tx: &mpsc::UnboundedSender<SessionInput>,
) {
    match (wanted, guard.is_some()) {
        (true, false) => {
            debug!(%tick, "starting tick source");
            *guard = Some(spawn_ticker(tick, tx.clone()));
        }
        (false, true) => {
            debug!(%tick, "stopping tick source");
            *guard = None;
        }
        _ => {}
    }
}

async fn run(
    mut inputs: mpsc::UnboundedReceiver<SessionInput>,
    views: watch::Sender<SessionView>,
    tick_tx: mpsc::UnboundedSender<SessionInput>,
    mut rng: StdRng,
) {
    let mut session = Session::new();
    let mut global_tick: Option<TickGuard> = None;
    let mut question_tick: Option<TickGuard> = None;

    while let Some(input) = inputs.recv().await {
        let command = match input {
            SessionInput::Command(command) => Some(command),
            SessionInput::Key(ch) => route_key(ch),
        };
        let Some(command) = command else { continue };

        session.apply(command, &mut rng);

        let timers = session.timers();
        reconcile(&mut global_tick, timers.global, Command::GlobalTick, &tick_tx);
        reconcile(
            &mut question_tick,
            timers.question,
            Command::QuestionTick,
            &tick_tx,
        );

        if views.send(SessionView::project(&session)).is_err() {
            // No frontend left watching; keep driving regardless, the
            // session is still live for whoever reattaches via a handle.
            debug!("no view subscribers");
        }
    }

    info!("input channel closed, driver stopping");
}
