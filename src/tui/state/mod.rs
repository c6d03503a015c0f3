//! State management for the storefront TUI.
//!
//! Holds per-resource load states and the list cursor shared by the product
//! grid and the review list.

mod list_cursor;
mod load_state;

pub use list_cursor::ListCursor;
pub use load_state::LoadState;
