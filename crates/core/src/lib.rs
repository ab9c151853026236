//! Domain types and pure state containers for the shoplist client.
//!
//! Everything in this crate is I/O-free: wire types shared with the shop
//! service, client-side validation, the cached table/product view state,
//! and the dialog mode of the UI. Network access lives in
//! `shoplist-client`; composition lives in `shoplist-app`.

pub mod error;
pub mod types;
pub mod ui;
pub mod validate;
pub mod view;

pub use error::CoreError;
pub use types::{Product, ProductDraft, ProductId, Table};
pub use ui::UiMode;
pub use view::TableViewState;
