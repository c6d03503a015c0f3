//! Tokio task driving a [`RevealScheduler`] in real time.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{RevealScheduler, RevealState, RevealTimings, ScheduledTimer};

/// Runs the staged reveal on a tokio task and publishes every state change.
///
/// Each generation owns one spawned task that sleeps on the pending timer and
/// fires it. [`RevealTask::restart`] and [`RevealTask::stop`] abort that task,
/// and dropping the handle does the same, so no timer outlives its owner.
///
/// Must be created and restarted from within a tokio runtime.
#[derive(Debug)]
pub struct RevealTask {
    timings: RevealTimings,
    sender: Arc<watch::Sender<RevealState>>,
    handle: Option<JoinHandle<()>>,
}

impl RevealTask {
    /// Starts revealing a collection of `len` reviews.
    #[must_use]
    pub fn spawn(timings: RevealTimings, len: usize) -> Self {
        let (sender, _receiver) = watch::channel(RevealState::default());
        let mut task = Self {
            timings,
            sender: Arc::new(sender),
            handle: None,
        };
        task.restart(len);
        task
    }

    /// Subscribes to state snapshots; the receiver survives restarts.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RevealState> {
        self.sender.subscribe()
    }

    /// Returns the most recently published state.
    #[must_use]
    pub fn state(&self) -> RevealState {
        self.sender.borrow().clone()
    }

    /// Aborts the running sequence and starts a new one for `len` reviews.
    pub fn restart(&mut self, len: usize) {
        self.abort();
        let mut scheduler = RevealScheduler::new(self.timings);
        let first = scheduler.load(len);
        self.sender.send_replace(scheduler.state());
        if first.is_some() {
            let sender = Arc::clone(&self.sender);
            self.handle = Some(tokio::spawn(run(scheduler, first, sender)));
        }
    }

    /// Aborts the running sequence; the last published state is kept.
    pub fn stop(&mut self) {
        self.abort();
    }

    /// Returns true while timers are still pending.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for RevealTask {
    fn drop(&mut self) {
        self.abort();
    }
}

async fn run(
    mut scheduler: RevealScheduler,
    first: Option<ScheduledTimer>,
    sender: Arc<watch::Sender<RevealState>>,
) {
    let mut next = first;
    while let Some(timer) = next {
        tokio::time::sleep(timer.delay).await;
        next = scheduler.fire(timer.ticket);
        sender.send_replace(scheduler.state());
    }
}
