//! Tests for the storefront TUI application model.

use bubbletea_rs::Model;
use bubbletea_rs::event::{KeyMsg, MouseMsg};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use rstest::{fixture, rstest};
use unicode_width::UnicodeWidthStr;

use super::*;
use crate::catalog::FetchError;
use crate::catalog::models::test_support::{listing, product, review_at, review_feed};
use crate::reviews::reveal::RevealPhase;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

/// App with two products and reviews A(2024-01-01, 5 views),
/// B(2024-01-03, 1 view), C(2024-01-02, 9 views) loaded.
#[fixture]
fn loaded_app() -> StorefrontApp {
    let mut app = StorefrontApp::new(AppSettings::default());
    app.handle_message(&AppMsg::WindowResized {
        width: WIDTH,
        height: HEIGHT,
    });
    app.handle_message(&AppMsg::ProductsLoaded(Ok(listing(vec![
        product(1, "Desk lamp", 1_500_000),
        product(2, "Chair", 4_200_000),
    ]))));
    app.handle_message(&AppMsg::ReviewsLoaded(Ok(review_feed(vec![
        review_at(1, "2024-01-01", 5),
        review_at(2, "2024-01-03", 1),
        review_at(3, "2024-01-02", 9),
    ]))));
    app
}

/// Opens the review list and the first review in latest-first order.
fn open_first_review(app: &mut StorefrontApp) {
    app.handle_message(&AppMsg::ShowAllReviews);
    app.handle_message(&AppMsg::Select);
}

fn key(code: KeyCode) -> Box<dyn std::any::Any + Send> {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::empty(),
    })
}

fn mouse(column: u16, button: MouseEventKind) -> Box<dyn std::any::Any + Send> {
    Box::new(MouseMsg {
        x: column,
        y: 10,
        button,
        modifiers: KeyModifiers::empty(),
    })
}

/// Drags the left mouse button between two columns.
fn drag(app: &mut StorefrontApp, from: u16, to: u16) {
    app.update(mouse(from, MouseEventKind::Down(MouseButton::Left)));
    app.update(mouse(to, MouseEventKind::Drag(MouseButton::Left)));
    app.update(mouse(to, MouseEventKind::Up(MouseButton::Left)));
}

#[rstest]
fn new_app_starts_loading_on_storefront() {
    let app = StorefrontApp::new(AppSettings::default());

    assert_eq!(app.view_mode, ViewMode::Storefront);
    assert!(app.products.is_loading());
    assert!(app.reviews.is_loading());
    assert!(app.view().contains("[Loading...]"));
}

#[rstest]
fn sorted_reviews_follow_sort_order(mut loaded_app: StorefrontApp) {
    let ids = |app: &StorefrontApp| -> Vec<u64> {
        app.sorted_reviews().iter().map(|review| review.id).collect()
    };

    assert_eq!(ids(&loaded_app), vec![2, 3, 1]);
    loaded_app.handle_message(&AppMsg::ToggleSort);
    assert_eq!(loaded_app.sort_order(), SortOrder::Views);
    assert_eq!(ids(&loaded_app), vec![3, 1, 2]);
}

#[rstest]
fn select_in_review_list_opens_detail(mut loaded_app: StorefrontApp) {
    open_first_review(&mut loaded_app);

    assert_eq!(loaded_app.view_mode, ViewMode::ReviewDetail);
    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(2)));
    assert_eq!(loaded_app.current_index(), Some(0));
}

#[rstest]
fn detail_navigation_round_trips_and_stops_at_boundaries(mut loaded_app: StorefrontApp) {
    open_first_review(&mut loaded_app);

    loaded_app.handle_message(&AppMsg::PreviousDetail);
    assert_eq!(
        loaded_app.selection(),
        Some(DetailItem::Review(2)),
        "previous at the first review is a no-op"
    );

    loaded_app.handle_message(&AppMsg::NextDetail);
    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(3)));
    loaded_app.handle_message(&AppMsg::PreviousDetail);
    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(2)));

    loaded_app.handle_message(&AppMsg::NextDetail);
    loaded_app.handle_message(&AppMsg::NextDetail);
    loaded_app.handle_message(&AppMsg::NextDetail);
    assert_eq!(
        loaded_app.selection(),
        Some(DetailItem::Review(1)),
        "next at the last review is a no-op"
    );
}

#[rstest]
fn resort_while_detail_open_recomputes_position(mut loaded_app: StorefrontApp) {
    open_first_review(&mut loaded_app);
    loaded_app.handle_message(&AppMsg::NextDetail);
    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(3)));
    assert_eq!(loaded_app.current_index(), Some(1));

    loaded_app.handle_message(&AppMsg::ToggleSort);

    assert_eq!(loaded_app.current_index(), Some(0));
    loaded_app.handle_message(&AppMsg::NextDetail);
    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(1)));
}

#[rstest]
fn escape_from_detail_returns_to_list_at_current_review(mut loaded_app: StorefrontApp) {
    open_first_review(&mut loaded_app);
    loaded_app.handle_message(&AppMsg::NextDetail);

    loaded_app.handle_message(&AppMsg::EscapePressed);

    assert_eq!(loaded_app.view_mode, ViewMode::ReviewList);
    assert_eq!(loaded_app.selection(), None);
    assert_eq!(loaded_app.review_cursor_position(), 1);

    loaded_app.handle_message(&AppMsg::EscapePressed);
    assert_eq!(loaded_app.view_mode, ViewMode::Storefront);
}

#[rstest]
#[case::threshold_is_a_no_op(200, 150, 2)]
#[case::past_threshold_goes_next(200, 149, 3)]
#[case::rightward_at_start_is_a_no_op(200, 251, 2)]
fn swipe_navigates_past_threshold(
    mut loaded_app: StorefrontApp,
    #[case] start: i64,
    #[case] end: i64,
    #[case] expected_id: u64,
) {
    open_first_review(&mut loaded_app);

    loaded_app.handle_message(&AppMsg::SwipeBegin(start));
    loaded_app.handle_message(&AppMsg::SwipeMove(end));
    loaded_app.handle_message(&AppMsg::SwipeEnd);

    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(expected_id)));
}

#[rstest]
fn swipe_right_goes_to_previous(mut loaded_app: StorefrontApp) {
    open_first_review(&mut loaded_app);
    loaded_app.handle_message(&AppMsg::NextDetail);

    loaded_app.handle_message(&AppMsg::SwipeBegin(100));
    loaded_app.handle_message(&AppMsg::SwipeMove(160));
    loaded_app.handle_message(&AppMsg::SwipeEnd);

    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(2)));
}

#[rstest]
#[case::short_drag_is_a_no_op(30, 25, 2)]
#[case::long_leftward_drag_goes_next(30, 20, 3)]
fn mouse_drag_swipes_between_reviews(
    mut loaded_app: StorefrontApp,
    #[case] from: u16,
    #[case] to: u16,
    #[case] expected_id: u64,
) {
    open_first_review(&mut loaded_app);

    drag(&mut loaded_app, from, to);

    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(expected_id)));
    assert!(!loaded_app.navigator.is_swiping());
}

#[rstest]
fn reviews_missing_numbers_do_not_stall_navigation() {
    let api: crate::catalog::models::ApiReviewFeed = serde_json::from_value(serde_json::json!({
        "articles": [
            { "title": "Untracked" },
            { "article_no": 7, "title": "Older", "created_date": "2024-01-01" },
            { "title": "Also untracked" },
            { "article_no": 8, "title": "Newer", "created_date": "2024-01-02" }
        ]
    }))
    .expect("feed should deserialise");
    let mut app = StorefrontApp::new(AppSettings::default());
    app.handle_message(&AppMsg::ReviewsLoaded(Ok(api.into())));

    open_first_review(&mut app);
    assert_eq!(app.selection(), Some(DetailItem::Review(8)));
    assert_eq!(app.current_index(), Some(0));

    app.handle_message(&AppMsg::NextDetail);
    assert_eq!(app.selection(), Some(DetailItem::Review(7)));
    assert_eq!(app.current_index(), Some(1));
}

#[rstest]
fn swipe_is_ignored_outside_detail(mut loaded_app: StorefrontApp) {
    loaded_app.handle_message(&AppMsg::SwipeBegin(200));
    loaded_app.handle_message(&AppMsg::SwipeMove(0));
    loaded_app.handle_message(&AppMsg::SwipeEnd);

    assert_eq!(loaded_app.selection(), None);
    assert!(!loaded_app.navigator.is_swiping());
}

#[rstest]
fn latest_toast_opens_only_after_reveal(mut loaded_app: StorefrontApp) {
    loaded_app.handle_message(&AppMsg::OpenLatestToast);
    assert_eq!(loaded_app.selection(), None, "nothing revealed yet");

    let ticket = loaded_app
        .scheduler
        .pending()
        .map(|timer| timer.ticket)
        .expect("initial delay should be pending");
    loaded_app.handle_message(&AppMsg::RevealTimerFired(ticket));
    assert_eq!(loaded_app.reveal_state().phase, RevealPhase::Settled(0));

    loaded_app.handle_message(&AppMsg::OpenLatestToast);

    assert_eq!(loaded_app.view_mode, ViewMode::ReviewDetail);
    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(1)));

    loaded_app.handle_message(&AppMsg::EscapePressed);
    assert_eq!(loaded_app.view_mode, ViewMode::Storefront);
}

#[rstest]
fn selecting_a_product_requests_its_sales_report(mut loaded_app: StorefrontApp) {
    loaded_app.handle_message(&AppMsg::CursorDown);
    assert_eq!(loaded_app.product_cursor_position(), 1);

    let cmd = loaded_app.handle_message(&AppMsg::Select);

    assert!(cmd.is_some(), "opening a product should fetch its report");
    assert_eq!(loaded_app.view_mode, ViewMode::ProductDetail);
    assert_eq!(loaded_app.selection(), Some(DetailItem::Product(2)));
    assert!(loaded_app.sales_report.is_loading());
}

#[rstest]
fn sales_report_for_another_product_is_ignored(mut loaded_app: StorefrontApp) {
    loaded_app.handle_message(&AppMsg::Select);

    loaded_app.handle_message(&AppMsg::SalesReportLoaded {
        product_id: 2,
        result: Ok(SalesReport(serde_json::json!({"product": 2}))),
    });
    assert!(loaded_app.sales_report.is_loading());

    loaded_app.handle_message(&AppMsg::SalesReportLoaded {
        product_id: 1,
        result: Ok(SalesReport(serde_json::json!({"product": 1}))),
    });
    assert_eq!(
        loaded_app.sales_report.ready(),
        Some(&SalesReport(serde_json::json!({"product": 1})))
    );
    assert!(loaded_app.view().contains("\"product\": 1"));
}

#[rstest]
fn escape_from_product_detail_clears_selection(mut loaded_app: StorefrontApp) {
    loaded_app.handle_message(&AppMsg::Select);
    loaded_app.handle_message(&AppMsg::EscapePressed);

    assert_eq!(loaded_app.view_mode, ViewMode::Storefront);
    assert_eq!(loaded_app.selection(), None);
}

#[rstest]
fn product_cursor_stays_in_bounds(mut loaded_app: StorefrontApp) {
    loaded_app.handle_message(&AppMsg::CursorUp);
    assert_eq!(loaded_app.product_cursor_position(), 0);

    for _ in 0..5 {
        loaded_app.handle_message(&AppMsg::CursorDown);
    }
    assert_eq!(loaded_app.product_cursor_position(), 1);
}

#[rstest]
fn review_failure_does_not_block_products() {
    let mut app = StorefrontApp::new(AppSettings::default());
    app.handle_message(&AppMsg::ProductsLoaded(Ok(listing(vec![product(
        1,
        "Desk lamp",
        1_500_000,
    )]))));

    let cmd = app.handle_message(&AppMsg::ReviewsLoaded(Err(FetchError::Status {
        operation: "reviews".to_owned(),
        status: 503,
        message: "unavailable".to_owned(),
    })));

    assert!(cmd.is_none(), "a failed feed schedules no reveal timer");
    assert_eq!(app.reveal_state().phase, RevealPhase::Idle);
    let view = app.view();
    assert!(view.contains("Desk lamp"));
    assert!(view.contains("Reviews unavailable"));
    assert!(!view.contains("[Loading...]"));

    app.handle_message(&AppMsg::ShowAllReviews);
    assert_eq!(
        app.view_mode,
        ViewMode::Storefront,
        "the review list needs resolved reviews"
    );
}

#[rstest]
fn toast_thumbnail_falls_back_to_first_product_image(mut loaded_app: StorefrontApp) {
    let ticket = loaded_app
        .scheduler
        .pending()
        .map(|timer| timer.ticket)
        .expect("initial delay should be pending");
    loaded_app.handle_message(&AppMsg::RevealTimerFired(ticket));

    assert!(
        loaded_app
            .view()
            .contains("[https://cdn.example/product-1.jpg] Review 1")
    );
}

#[rstest]
fn view_fills_terminal_exactly(mut loaded_app: StorefrontApp) {
    let frame = loaded_app.view();
    let lines: Vec<&str> = frame.lines().collect();

    assert_eq!(lines.len(), usize::from(HEIGHT));
    assert!(
        lines
            .iter()
            .all(|line| line.width() == usize::from(WIDTH) - 1)
    );
    assert!(
        lines
            .last()
            .is_some_and(|line| line.starts_with("j/k:move")),
        "status bar should sit on the last row"
    );

    open_first_review(&mut loaded_app);
    let detail = loaded_app.view();
    assert_eq!(detail.lines().count(), usize::from(HEIGHT));
    assert!(detail.contains("1/3"));
}

#[rstest]
fn resize_updates_frame_size(mut loaded_app: StorefrontApp) {
    loaded_app.handle_message(&AppMsg::WindowResized {
        width: 40,
        height: 12,
    });

    let frame = loaded_app.view();
    assert_eq!(frame.lines().count(), 12);
    assert!(frame.lines().all(|line| line.width() == 39));
}

#[rstest]
fn help_overlay_closes_on_any_key(mut loaded_app: StorefrontApp) {
    loaded_app.update(key(KeyCode::Char('?')));
    assert!(loaded_app.show_help);
    assert!(loaded_app.view().contains("Keyboard Shortcuts"));

    loaded_app.update(key(KeyCode::Char('j')));

    assert!(!loaded_app.show_help);
    assert_eq!(
        loaded_app.product_cursor_position(),
        0,
        "closing help should swallow the key"
    );
}

#[rstest]
fn detail_keys_step_through_reviews(mut loaded_app: StorefrontApp) {
    loaded_app.update(key(KeyCode::Char('v')));
    loaded_app.update(key(KeyCode::Enter));
    loaded_app.update(key(KeyCode::Right));

    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(3)));

    loaded_app.update(key(KeyCode::Char('h')));
    assert_eq!(loaded_app.selection(), Some(DetailItem::Review(2)));
}

#[rstest]
fn quit_returns_command(mut loaded_app: StorefrontApp) {
    assert!(loaded_app.handle_message(&AppMsg::Quit).is_some());
    assert!(loaded_app.scheduler.pending().is_none());
}
