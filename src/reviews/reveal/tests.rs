//! Tests for the staged review reveal.

use std::time::Duration;

use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn scheduler() -> RevealScheduler {
    RevealScheduler::new(RevealTimings::default())
}

/// Fires timers until none remain, recording every timer and state.
fn run_to_completion(
    scheduler: &mut RevealScheduler,
    first: Option<ScheduledTimer>,
) -> (Vec<ScheduledTimer>, Vec<RevealState>) {
    let mut timers = Vec::new();
    let mut states = Vec::new();
    let mut next = first;
    while let Some(timer) = next {
        timers.push(timer);
        next = scheduler.fire(timer.ticket);
        states.push(scheduler.state());
    }
    (timers, states)
}

fn total_delay(timers: &[ScheduledTimer]) -> Duration {
    timers.iter().map(|timer| timer.delay).sum()
}

#[rstest]
fn empty_collection_stays_idle(mut scheduler: RevealScheduler) {
    assert_eq!(scheduler.load(0), None);
    assert_eq!(scheduler.state().phase, RevealPhase::Idle);
    assert_eq!(scheduler.pending(), None);
    assert_eq!(scheduler.state().window, 0..0);
}

#[rstest]
fn load_shows_loader_before_first_review(mut scheduler: RevealScheduler) {
    let timer = scheduler.load(2).expect("timer should be scheduled");
    let state = scheduler.state();

    assert_eq!(timer.kind, TimerKind::InitialDelay);
    assert_eq!(timer.delay, Duration::from_millis(2000));
    assert_eq!(state.phase, RevealPhase::InitialDelay);
    assert!(state.is_pulsing);
    assert_eq!(state.cursor, None);
    assert_eq!(scheduler.revealing_index(), Some(0));
}

#[rstest]
fn three_reviews_complete_after_ten_seconds(mut scheduler: RevealScheduler) {
    let first = scheduler.load(3);
    let (timers, states) = run_to_completion(&mut scheduler, first);

    let kinds: Vec<TimerKind> = timers.iter().map(|timer| timer.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TimerKind::InitialDelay,
            TimerKind::Settle,
            TimerKind::Pulse,
            TimerKind::Settle,
            TimerKind::Pulse,
            TimerKind::ViewAll,
        ]
    );
    let until_terminal = timers
        .iter()
        .take_while(|timer| timer.kind != TimerKind::ViewAll)
        .map(|timer| timer.delay)
        .sum::<Duration>();
    assert_eq!(until_terminal, Duration::from_millis(9000));
    assert_eq!(total_delay(&timers), Duration::from_millis(10_000));

    let last = states.last().expect("states recorded");
    assert_eq!(last.phase, RevealPhase::Settled(2));
    assert_eq!(last.cursor, Some(2));
    assert!(last.all_revealed);
    assert!(!last.is_pulsing);
}

#[rstest]
#[case::single(1, 1)]
#[case::three(3, 3)]
#[case::exactly_max(5, 5)]
#[case::more_than_max(12, 5)]
fn settled_states_match_reveal_count(
    mut scheduler: RevealScheduler,
    #[case] len: usize,
    #[case] expected_settled: usize,
) {
    let first = scheduler.load(len);
    let (_, states) = run_to_completion(&mut scheduler, first);

    let settled: Vec<usize> = states
        .iter()
        .filter_map(|state| match state.phase {
            RevealPhase::Settled(index) if !state.all_revealed => Some(index),
            _ => None,
        })
        .collect();
    assert_eq!(settled, (0..expected_settled).collect::<Vec<_>>());
    assert_eq!(
        states.iter().filter(|state| state.all_revealed).count(),
        1,
        "view all should be raised exactly once"
    );
}

#[rstest]
fn cursor_advances_by_one_per_pulse(mut scheduler: RevealScheduler) {
    let first = scheduler.load(MAX_REVEAL);
    let (_, states) = run_to_completion(&mut scheduler, first);

    let cursors: Vec<usize> = states.iter().filter_map(|state| state.cursor).collect();
    for pair in cursors.windows(2) {
        let [previous, next] = pair else {
            continue;
        };
        assert!(
            *next == *previous || *next == previous.saturating_add(1),
            "cursor jumped from {previous} to {next}"
        );
    }
    assert_eq!(cursors.last(), Some(&(MAX_REVEAL - 1)));
}

#[rstest]
fn window_keeps_last_three_revealed(mut scheduler: RevealScheduler) {
    let first = scheduler.load(MAX_REVEAL);
    let (_, states) = run_to_completion(&mut scheduler, first);

    for state in &states {
        let Some(cursor) = state.cursor else {
            continue;
        };
        assert_eq!(state.window.end, cursor + 1, "window must end at cursor");
        assert!(state.window.len() <= VISIBLE_WINDOW);
    }
    let last = states.last().expect("states recorded");
    assert_eq!(last.window, 2..5);

    let items = ["a", "b", "c", "d", "e"];
    assert_eq!(last.visible(&items), &["c", "d", "e"]);
}

#[rstest]
fn pulse_shows_loader_for_next_index(mut scheduler: RevealScheduler) {
    let initial = scheduler.load(3).expect("initial timer");
    let settle = scheduler.fire(initial.ticket).expect("settle timer");
    let pulse = scheduler.fire(settle.ticket).expect("pulse timer");

    assert_eq!(pulse.kind, TimerKind::Pulse);
    assert_eq!(pulse.delay, Duration::from_millis(800));
    assert_eq!(scheduler.state().phase, RevealPhase::Pulsing { from: 0 });
    assert!(scheduler.state().is_pulsing);
    assert_eq!(scheduler.revealing_index(), Some(1));
    assert_eq!(scheduler.state().cursor, Some(0), "cursor waits for the pulse");
}

#[rstest]
fn stale_ticket_after_reload_is_ignored(mut scheduler: RevealScheduler) {
    let stale = scheduler.load(3).expect("initial timer");
    let fresh = scheduler.load(2).expect("reload timer");

    assert_ne!(stale.ticket, fresh.ticket);
    assert_eq!(scheduler.fire(stale.ticket), None);
    assert_eq!(scheduler.state().phase, RevealPhase::InitialDelay);
    assert_eq!(scheduler.pending(), Some(fresh));
}

#[rstest]
fn replayed_ticket_is_ignored(mut scheduler: RevealScheduler) {
    let initial = scheduler.load(3).expect("initial timer");
    let settle = scheduler.fire(initial.ticket).expect("settle timer");

    assert_eq!(scheduler.fire(initial.ticket), None);
    assert_eq!(scheduler.state().phase, RevealPhase::Settled(0));
    assert_eq!(scheduler.pending(), Some(settle));
}

#[rstest]
fn stop_cancels_pending_timer(mut scheduler: RevealScheduler) {
    let initial = scheduler.load(3).expect("initial timer");
    scheduler.stop();

    assert_eq!(scheduler.pending(), None);
    assert_eq!(scheduler.fire(initial.ticket), None);
    assert_eq!(scheduler.state().cursor, None);
}

#[rstest]
fn reload_mid_sequence_restarts_from_initial_delay(mut scheduler: RevealScheduler) {
    let first = scheduler.load(4);
    let (_, states) = run_to_completion(&mut scheduler, first);
    assert!(states.last().is_some_and(|state| state.all_revealed));

    let restarted = scheduler.load(4).expect("restart timer");
    let state = scheduler.state();
    assert_eq!(restarted.kind, TimerKind::InitialDelay);
    assert_eq!(state.cursor, None);
    assert!(!state.all_revealed);
    assert_eq!(restarted.ticket.sequence(), 1);
    assert!(restarted.ticket.generation() > 1);
}

#[rstest]
fn custom_timings_are_used() {
    let timings = RevealTimings {
        initial_delay: Duration::from_millis(10),
        settle: Duration::from_millis(20),
        pulse: Duration::from_millis(5),
        view_all: Duration::from_millis(1),
    };
    let mut scheduler = RevealScheduler::new(timings);
    let first = scheduler.load(2);
    let (timers, _) = run_to_completion(&mut scheduler, first);

    assert_eq!(total_delay(&timers), Duration::from_millis(36));
}

mod task {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::super::{RevealPhase, RevealTask, RevealTimings};

    #[tokio::test(start_paused = true)]
    async fn three_reviews_reach_view_all_at_ten_seconds() {
        let started = Instant::now();
        let task = RevealTask::spawn(RevealTimings::default(), 3);
        let mut receiver = task.subscribe();

        receiver
            .wait_for(|state| state.all_revealed)
            .await
            .expect("reveal should complete");

        assert_eq!(started.elapsed(), Duration::from_millis(10_000));
        assert_eq!(task.state().cursor, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn first_review_appears_after_initial_delay() {
        let task = RevealTask::spawn(RevealTimings::default(), 3);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(task.state().cursor, None);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(task.state().phase, RevealPhase::Settled(0));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_task_never_fires() {
        let mut task = RevealTask::spawn(RevealTimings::default(), 3);
        task.stop();

        tokio::time::sleep(Duration::from_secs(30)).await;

        assert_eq!(task.state().phase, RevealPhase::InitialDelay);
        assert_eq!(task.state().cursor, None);
        assert!(!task.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_begins_a_new_sequence() {
        let mut task = RevealTask::spawn(RevealTimings::default(), 3);
        let mut receiver = task.subscribe();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(task.state().cursor, Some(0));

        let restarted = Instant::now();
        task.restart(2);
        assert_eq!(task.state().cursor, None);

        receiver
            .wait_for(|state| state.all_revealed)
            .await
            .expect("restarted reveal should complete");
        assert_eq!(restarted.elapsed(), Duration::from_millis(6500));
        assert_eq!(task.state().cursor, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_feed_spawns_no_timers() {
        let task = RevealTask::spawn(RevealTimings::default(), 0);
        assert!(!task.is_running());
        assert_eq!(task.state().phase, RevealPhase::Idle);
    }
}
