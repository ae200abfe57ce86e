//! Display refresh scheduling
//!
//! A refresh is a one-shot: scheduling yields a handle, and the tick for
//! that handle arrives once. The controller reschedules from inside the
//! tick, so an abandoned chain simply stops. Handles are generation
//! numbers and never repeat, which lets the receiver recognize a tick
//! that was already in flight when its handle was cancelled.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Ownership token for one pending refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefreshHandle(u64);

impl RefreshHandle {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Host primitive that delivers one refresh tick per `schedule` call
pub trait RefreshScheduler {
    /// Request one future tick. `None` when the host cannot schedule
    /// refreshes at all.
    fn schedule(&mut self) -> Option<RefreshHandle>;

    /// Release a pending tick so that it never fires
    fn cancel(&mut self, handle: RefreshHandle);
}

/// Scheduler for hosts without a refresh primitive
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRefresh;

impl RefreshScheduler for NoRefresh {
    fn schedule(&mut self) -> Option<RefreshHandle> {
        None
    }

    fn cancel(&mut self, _handle: RefreshHandle) {}
}

/// Capacity of the tick channel. Only one tick is ever pending, the slack
/// covers a tick that was sent just before being cancelled.
const TICK_CHANNEL_CAPACITY: usize = 8;

/// Tokio-backed scheduler firing one tick per frame interval
///
/// Each scheduled refresh is a task that sleeps for the frame interval and
/// then sends its handle down the tick channel. Cancelling aborts the task.
#[derive(Debug)]
pub struct FrameScheduler {
    frame_interval: Duration,
    tick_tx: mpsc::Sender<RefreshHandle>,
    next_generation: u64,
    pending: Option<(RefreshHandle, JoinHandle<()>)>,
}

impl FrameScheduler {
    /// Create a scheduler and the receiver its ticks arrive on
    pub fn new(frame_interval: Duration) -> (Self, mpsc::Receiver<RefreshHandle>) {
        let (tick_tx, tick_rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        let scheduler = Self {
            frame_interval,
            tick_tx,
            next_generation: 0,
            pending: None,
        };
        (scheduler, tick_rx)
    }

    /// Whether a tick is currently scheduled
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|(_, task)| !task.is_finished())
            .unwrap_or(false)
    }
}

impl RefreshScheduler for FrameScheduler {
    fn schedule(&mut self) -> Option<RefreshHandle> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("No async runtime available, live refresh disabled");
                return None;
            }
        };

        if let Some((previous, task)) = self.pending.take() {
            if !task.is_finished() {
                debug!(generation = previous.generation(), "Replacing pending refresh");
                task.abort();
            }
        }

        self.next_generation += 1;
        let handle = RefreshHandle::new(self.next_generation);
        let tick_tx = self.tick_tx.clone();
        let frame_interval = self.frame_interval;

        let task = runtime.spawn(async move {
            tokio::time::sleep(frame_interval).await;
            // The receiver is gone only while the app is shutting down
            let _ = tick_tx.send(handle).await;
        });

        self.pending = Some((handle, task));
        Some(handle)
    }

    fn cancel(&mut self, handle: RefreshHandle) {
        match self.pending.take() {
            Some((pending, task)) if pending == handle => {
                task.abort();
                debug!(generation = handle.generation(), "Cancelled refresh");
            }
            other => self.pending = other,
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        if let Some((_, task)) = self.pending.take() {
            task.abort();
        }
    }
}
