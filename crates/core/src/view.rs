//! Cached projection of server state: the table list and each table's rows.
//!
//! [`TableViewState`] is the single shared container the orchestrator
//! writes. All writes go through the transition functions below, and the
//! per-table product entry is only ever replaced wholesale. That keeps
//! concurrent refreshes of different tables conflict-free: each refresh
//! touches exactly one key.

use std::collections::HashMap;

use crate::types::{Product, Table};

/// In-memory view of the remote store: known tables plus a mapping from
/// table name to its cached product rows.
///
/// The cache is authoritative only until the next mutation; after any
/// mutation the affected table must be refreshed from the server rather
/// than patched locally (server-assigned fields such as `id` would drift).
#[derive(Debug, Default)]
pub struct TableViewState {
    tables: Vec<Table>,
    products: HashMap<String, Vec<Product>>,
}

impl TableViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole table list (initial mount).
    pub fn replace_tables(&mut self, tables: Vec<Table>) {
        self.tables = tables;
    }

    /// Append a freshly created table, taken straight from the creation
    /// response. No re-fetch of the table list happens on create.
    pub fn push_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Drop a table from the list by name.
    ///
    /// The table's entry in the products mapping is intentionally left in
    /// place: it is never rendered again once its owning row is gone, and
    /// reclaiming it is not worth a second write point.
    pub fn remove_table(&mut self, table_name: &str) {
        self.tables.retain(|t| t.table_name != table_name);
    }

    /// Replace one table's cached rows wholesale.
    ///
    /// This is the only write into the products mapping; partial in-place
    /// edits do not exist.
    pub fn set_products(&mut self, table_name: &str, products: Vec<Product>) {
        self.products.insert(table_name.to_string(), products);
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn contains_table(&self, table_name: &str) -> bool {
        self.tables.iter().any(|t| t.table_name == table_name)
    }

    /// Cached rows for a table, or an empty slice if nothing is cached yet.
    pub fn products_of(&self, table_name: &str) -> &[Product] {
        self.products
            .get(table_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
