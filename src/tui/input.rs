//! Input handling for the TUI application.
//!
//! Translates terminal key and mouse events into application messages.
//! Detail stepping keys only apply while a review detail is open. A left
//! button drag becomes a swipe gesture.

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};

use super::messages::AppMsg;

/// Which view is receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Product grid with the toast feed.
    Storefront,
    /// Product modal.
    ProductDetail,
    /// Full sorted review list.
    ReviewList,
    /// Single review with previous/next stepping.
    ReviewDetail,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Enter => Some(AppMsg::Select),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Char('s') => Some(AppMsg::ToggleSort),
        KeyCode::Char('r') => Some(AppMsg::RefreshReviews),
        KeyCode::Char('v') => Some(AppMsg::ShowAllReviews),
        KeyCode::Char('t') => Some(AppMsg::OpenLatestToast),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

/// Maps a key event to a message, taking the active view into account.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if context == InputContext::ReviewDetail {
        match key.key {
            KeyCode::Char('l') | KeyCode::Right => return Some(AppMsg::NextDetail),
            KeyCode::Char('h') | KeyCode::Left => return Some(AppMsg::PreviousDetail),
            _ => {}
        }
    }
    map_key_to_message(key)
}

/// Approximate width of one terminal cell in pixels.
///
/// Mouse reports arrive in columns; swipe thresholds are in pixels.
pub const CELL_WIDTH_PX: i64 = 8;

/// Converts a terminal column to a horizontal pixel position.
#[must_use]
pub fn column_to_pixels(column: u16) -> i64 {
    i64::from(column).saturating_mul(CELL_WIDTH_PX)
}

/// Maps a mouse event to a swipe message.
///
/// Left button press, drag, and release begin, move, and end the gesture.
/// Everything else is ignored.
#[must_use]
pub fn map_mouse_to_message(mouse: &bubbletea_rs::event::MouseMsg) -> Option<AppMsg> {
    let x = column_to_pixels(mouse.x);
    match mouse.button {
        MouseEventKind::Down(MouseButton::Left) => Some(AppMsg::SwipeBegin(x)),
        MouseEventKind::Drag(MouseButton::Left) => Some(AppMsg::SwipeMove(x)),
        MouseEventKind::Up(MouseButton::Left) => Some(AppMsg::SwipeEnd),
        _ => None,
    }
}
