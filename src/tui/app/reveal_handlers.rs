//! Reveal timer commands.
//!
//! Each pending scheduler timer becomes one bubbletea command that sleeps
//! and then delivers its ticket. The scheduler rejects tickets that were
//! superseded by a reload or stop, so a late timer is harmless.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::StorefrontApp;
use crate::reviews::TimerTicket;
use crate::reviews::reveal::ScheduledTimer;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

impl StorefrontApp {
    /// Applies a fired reveal timer and arms the next one.
    pub(super) fn handle_reveal_timer(&mut self, ticket: TimerTicket) -> Option<Cmd> {
        let was_complete = self.scheduler.state().all_revealed;
        let next = self.scheduler.fire(ticket);

        if !was_complete && self.scheduler.state().all_revealed {
            let revealed = self.scheduler.reveal_count();
            tracing::info!(revealed, "review reveal complete");
            self.telemetry
                .record(TelemetryEvent::RevealCompleted { revealed });
        }

        next.map(Self::arm_reveal_timer)
    }

    /// Creates a command that delivers `timer`'s ticket after its delay.
    pub(super) fn arm_reveal_timer(timer: ScheduledTimer) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(timer.delay).await;
            Some(Box::new(AppMsg::RevealTimerFired(timer.ticket)) as Box<dyn Any + Send>)
        })
    }
}
