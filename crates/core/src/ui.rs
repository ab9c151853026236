//! Dialog state of the list UI as a single tagged variant.
//!
//! One mode per orchestrator instance replaces per-feature open/close
//! booleans, so "edit dialog and delete confirmation open at once" is
//! unrepresentable.

use crate::types::{Product, ProductId};

/// What dialog, if any, the list UI currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiMode {
    /// No dialog open.
    #[default]
    Idle,
    /// The edit dialog is open for one product row.
    EditingProduct {
        table_name: String,
        product: Product,
    },
    /// A per-row delete confirmation is pending.
    ConfirmingProductDelete {
        table_name: String,
        id: ProductId,
    },
    /// A whole-table delete confirmation is pending.
    ConfirmingTableDelete { table_name: String },
}

impl UiMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, UiMode::Idle)
    }
}
