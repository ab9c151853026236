//! Composition layer of the shoplist client.
//!
//! [`ListOrchestrator`] owns the table list and the product-rows-per-table
//! cache, drives the fetch-on-mount and refresh-after-mutation lifecycle,
//! and funnels every dialog through a single [`UiMode`]. [`ProductEditor`]
//! holds the transient form state of one create/edit dialog, and
//! [`TitleStore`] persists the last-entered table title across restarts.
//!
//! [`UiMode`]: shoplist_core::UiMode

pub mod editor;
pub mod orchestrator;
pub mod titles;

pub use editor::{EditorMode, EditorOutcome, ProductEditor};
pub use orchestrator::ListOrchestrator;
pub use titles::TitleStore;
