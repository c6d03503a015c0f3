//! Staged reveal of the review feed.
//!
//! [`RevealScheduler`] discloses up to [`MAX_REVEAL`] reviews one at a time.
//! An initial delay (loader shown) precedes the first review; each revealed
//! review then settles before a short loading pulse introduces the next.
//! After the last review settles, a final timer raises the "view all"
//! affordance.
//!
//! The scheduler is a pure state machine: it never sleeps. Every transition
//! returns the next [`ScheduledTimer`] for the caller to arm, and the caller
//! hands the timer's [`TimerTicket`] back through [`RevealScheduler::fire`]
//! when it elapses. Only the single pending ticket is honoured, so timers
//! armed before a [`RevealScheduler::load`] or [`RevealScheduler::stop`] are
//! ignored when they eventually fire.

mod driver;

pub use driver::RevealTask;

use std::ops::Range;
use std::time::Duration;

/// Maximum number of reviews disclosed by the staged reveal.
pub const MAX_REVEAL: usize = 5;

/// Number of most recently revealed reviews kept visible.
pub const VISIBLE_WINDOW: usize = 3;

/// Durations of each reveal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimings {
    /// Loader shown before the first review.
    pub initial_delay: Duration,
    /// Time a revealed review stays the latest before the next pulse.
    pub settle: Duration,
    /// Loader shown before each subsequent review.
    pub pulse: Duration,
    /// Delay between the last review settling and "view all" appearing.
    pub view_all: Duration,
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(2000),
            settle: Duration::from_millis(2700),
            pulse: Duration::from_millis(800),
            view_all: Duration::from_millis(1000),
        }
    }
}

impl RevealTimings {
    /// Returns the delay used for a timer of the given kind.
    #[must_use]
    pub const fn delay_for(&self, kind: TimerKind) -> Duration {
        match kind {
            TimerKind::InitialDelay => self.initial_delay,
            TimerKind::Settle => self.settle,
            TimerKind::Pulse => self.pulse,
            TimerKind::ViewAll => self.view_all,
        }
    }
}

/// Purpose of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Ends the initial loader and reveals the first review.
    InitialDelay,
    /// Ends the settle interval and starts a pulse.
    Settle,
    /// Ends a pulse and reveals the next review.
    Pulse,
    /// Raises the "view all" affordance.
    ViewAll,
}

/// Identity of a scheduled timer.
///
/// The generation changes on every [`RevealScheduler::load`]; the sequence
/// changes on every timer scheduled within a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    generation: u64,
    sequence: u64,
}

impl TimerTicket {
    /// Generation the ticket belongs to.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    /// Position of the ticket within its generation.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.sequence
    }
}

/// A timer the caller must arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    /// Ticket to pass back to [`RevealScheduler::fire`].
    pub ticket: TimerTicket,
    /// What happens when the timer fires.
    pub kind: TimerKind,
    /// How long to wait before firing.
    pub delay: Duration,
}

/// Position of the reveal sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// No data loaded, or the collection is empty.
    #[default]
    Idle,
    /// Loader shown before the first review.
    InitialDelay,
    /// The review at this index is the latest revealed one.
    Settled(usize),
    /// Loader shown while moving from `from` to the next review.
    Pulsing {
        /// Index of the review revealed before the pulse.
        from: usize,
    },
}

/// Snapshot of the reveal for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealState {
    /// Current phase.
    pub phase: RevealPhase,
    /// Index of the most recently revealed review.
    pub cursor: Option<usize>,
    /// Whether the loader is shown.
    pub is_pulsing: bool,
    /// Indices of the visible reviews: at most [`VISIBLE_WINDOW`] ending at
    /// the cursor.
    pub window: Range<usize>,
    /// Whether every review has been revealed and "view all" is shown.
    pub all_revealed: bool,
}

impl RevealState {
    /// Returns the visible slice of `items`.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.window.clone()).unwrap_or_default()
    }
}

/// Single owned state machine staging the review reveal.
#[derive(Debug, Clone, Default)]
pub struct RevealScheduler {
    timings: RevealTimings,
    generation: u64,
    sequence: u64,
    reveal_count: usize,
    phase: RevealPhase,
    cursor: Option<usize>,
    all_revealed: bool,
    pending: Option<ScheduledTimer>,
}

impl RevealScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new(timings: RevealTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// Restarts the reveal for a collection of `len` reviews.
    ///
    /// Any pending timer is superseded. Returns the initial-delay timer, or
    /// `None` for an empty collection (which stays idle).
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::reviews::reveal::{RevealPhase, RevealScheduler, RevealTimings, TimerKind};
    ///
    /// let mut scheduler = RevealScheduler::new(RevealTimings::default());
    /// let timer = scheduler.load(3).expect("non-empty feed schedules a timer");
    /// assert_eq!(timer.kind, TimerKind::InitialDelay);
    ///
    /// let next = scheduler.fire(timer.ticket).expect("settle timer follows");
    /// assert_eq!(scheduler.state().phase, RevealPhase::Settled(0));
    /// assert_eq!(next.kind, TimerKind::Settle);
    /// ```
    pub fn load(&mut self, len: usize) -> Option<ScheduledTimer> {
        self.generation = self.generation.wrapping_add(1);
        self.sequence = 0;
        self.reveal_count = len.min(MAX_REVEAL);
        self.cursor = None;
        self.all_revealed = false;
        self.pending = None;

        if self.reveal_count == 0 {
            self.phase = RevealPhase::Idle;
            tracing::debug!(generation = self.generation, "reveal idle: no reviews");
            return None;
        }

        tracing::debug!(
            generation = self.generation,
            reveal_count = self.reveal_count,
            "reveal started"
        );
        self.phase = RevealPhase::InitialDelay;
        Some(self.schedule(TimerKind::InitialDelay))
    }

    /// Applies the timer identified by `ticket`.
    ///
    /// Returns the next timer to arm. Tickets other than the pending one are
    /// ignored and leave the state unchanged.
    pub fn fire(&mut self, ticket: TimerTicket) -> Option<ScheduledTimer> {
        let Some(pending) = self.pending.filter(|timer| timer.ticket == ticket) else {
            tracing::debug!(
                generation = ticket.generation,
                sequence = ticket.sequence,
                "ignoring stale reveal timer"
            );
            return None;
        };
        self.pending = None;

        match pending.kind {
            TimerKind::InitialDelay => Some(self.settle_at(0)),
            TimerKind::Settle => {
                let from = self.cursor.unwrap_or_default();
                self.phase = RevealPhase::Pulsing { from };
                Some(self.schedule(TimerKind::Pulse))
            }
            TimerKind::Pulse => {
                let next = self.cursor.map_or(0, |cursor| cursor.saturating_add(1));
                Some(self.settle_at(next))
            }
            TimerKind::ViewAll => {
                self.all_revealed = true;
                tracing::debug!(
                    generation = self.generation,
                    revealed = self.reveal_count,
                    "reveal complete"
                );
                None
            }
        }
    }

    /// Cancels the pending timer. Later calls to [`Self::fire`] are no-ops.
    pub fn stop(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!(generation = self.generation, "reveal stopped");
        }
    }

    /// Returns a snapshot of the reveal.
    #[must_use]
    pub fn state(&self) -> RevealState {
        RevealState {
            phase: self.phase,
            cursor: self.cursor,
            is_pulsing: matches!(
                self.phase,
                RevealPhase::InitialDelay | RevealPhase::Pulsing { .. }
            ),
            window: self.window(),
            all_revealed: self.all_revealed,
        }
    }

    /// Returns the pending timer, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<ScheduledTimer> {
        self.pending
    }

    /// Number of reviews the current sequence discloses.
    #[must_use]
    pub const fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    /// Index of the review the loader is introducing, if the loader is shown.
    #[must_use]
    pub const fn revealing_index(&self) -> Option<usize> {
        match self.phase {
            RevealPhase::InitialDelay => Some(0),
            RevealPhase::Pulsing { from } => Some(from.saturating_add(1)),
            RevealPhase::Idle | RevealPhase::Settled(_) => None,
        }
    }

    /// Returns the configured timings.
    #[must_use]
    pub const fn timings(&self) -> RevealTimings {
        self.timings
    }

    fn settle_at(&mut self, index: usize) -> ScheduledTimer {
        self.cursor = Some(index);
        self.phase = RevealPhase::Settled(index);
        let is_last = index.saturating_add(1) >= self.reveal_count;
        if is_last {
            self.schedule(TimerKind::ViewAll)
        } else {
            self.schedule(TimerKind::Settle)
        }
    }

    fn schedule(&mut self, kind: TimerKind) -> ScheduledTimer {
        self.sequence = self.sequence.wrapping_add(1);
        let timer = ScheduledTimer {
            ticket: TimerTicket {
                generation: self.generation,
                sequence: self.sequence,
            },
            kind,
            delay: self.timings.delay_for(kind),
        };
        self.pending = Some(timer);
        timer
    }

    fn window(&self) -> Range<usize> {
        self.cursor.map_or(0..0, |cursor| {
            let end = cursor.saturating_add(1);
            end.saturating_sub(VISIBLE_WINDOW)..end
        })
    }
}

#[cfg(test)]
mod tests;
