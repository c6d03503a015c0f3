//! UI components for the storefront TUI.
//!
//! Each component renders from a borrowed view context and holds no data of
//! its own, so the app model stays the single owner of state.

mod product_detail;
mod product_grid;
mod review_detail;
mod review_list;
mod review_toast;
pub(crate) mod text_truncate;
pub(crate) mod text_wrap;

pub use product_detail::{ProductDetailComponent, ProductDetailViewContext};
pub use product_grid::{ProductGridComponent, ProductGridViewContext};
pub use review_detail::{ReviewDetailComponent, ReviewDetailViewContext};
pub use review_list::{ReviewListComponent, ReviewListViewContext};
pub use review_toast::{ReviewToastComponent, ReviewToastViewContext};
