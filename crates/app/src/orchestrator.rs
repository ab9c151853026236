//! Top-level coordinator for the multi-list UI.
//!
//! [`ListOrchestrator`] is the sole writer of the shared
//! [`TableViewState`]: it populates the table list and every table's rows
//! on mount, re-fetches exactly one table after each mutation, and routes
//! all dialogs (edit, per-row delete, whole-table delete) through one
//! [`UiMode`]. Created once and shared via `Arc`; all methods take
//! `&self`.
//!
//! Failure policy: every remote call site here catches its error, logs
//! it, and leaves the view state unchanged except where a step was
//! already committed before the failing call. Nothing is re-thrown.

use tokio::sync::RwLock;

use shoplist_client::RemoteStore;
use shoplist_core::{Product, ProductId, Table, TableViewState, UiMode};

use crate::editor::{EditorOutcome, ProductEditor};
use crate::titles::TitleStore;

/// Coordinates the remote store, the cached view state, the dialog mode,
/// and the persisted title.
pub struct ListOrchestrator {
    store: RemoteStore,
    state: RwLock<TableViewState>,
    mode: RwLock<UiMode>,
    titles: TitleStore,
}

impl ListOrchestrator {
    pub fn new(store: RemoteStore, titles: TitleStore) -> Self {
        Self {
            store,
            state: RwLock::new(TableViewState::new()),
            mode: RwLock::new(UiMode::Idle),
            titles,
        }
    }

    /// Initial mount: fetch all tables, then every table's rows, and
    /// commit the completed mapping in one write so rows are never
    /// observable half-populated.
    ///
    /// The per-table fetches run concurrently. A table whose fetch fails
    /// contributes an empty entry (and a log line) rather than failing
    /// the whole load.
    pub async fn load(&self) {
        let tables = match self.store.list_tables().await {
            Ok(tables) => tables,
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch tables");
                return;
            }
        };

        let fetches = tables.iter().map(|table| {
            let name = table.table_name.clone();
            async move {
                let rows = self.store.list_products(&name).await;
                (name, rows)
            }
        });
        let results = futures::future::join_all(fetches).await;

        let mut state = self.state.write().await;
        state.replace_tables(tables);
        for (name, rows) in results {
            match rows {
                Ok(rows) => state.set_products(&name, rows),
                Err(err) => {
                    tracing::warn!(table = %name, error = %err, "Failed to fetch products on load");
                    state.set_products(&name, Vec::new());
                }
            }
        }
    }

    /// Re-fetch one table's rows and replace only that mapping entry.
    ///
    /// This is the completion step of every product mutation: the cache is
    /// never patched locally, because server-assigned fields (ids) would
    /// drift. On failure the old rows stay in place.
    pub async fn refresh_products(&self, table_name: &str) {
        match self.store.list_products(table_name).await {
            Ok(rows) => self.state.write().await.set_products(table_name, rows),
            Err(err) => {
                tracing::error!(table = %table_name, error = %err, "Failed to refresh products");
            }
        }
    }

    /// Create a table from a user-supplied title.
    ///
    /// On success the new table is appended straight from the creation
    /// response (no list re-fetch) and the submitted title is persisted
    /// for recall across restarts.
    pub async fn create_table(&self, title: &str) {
        match self.store.create_table(title).await {
            Ok(table) => {
                tracing::info!(table = %table.table_name, "Table created");
                self.state.write().await.push_table(table);
                self.titles.remember_title(title);
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to create table");
            }
        }
    }

    // ---- dialog flow ----

    /// Ask for confirmation before deleting a whole table.
    pub async fn request_table_delete(&self, table_name: impl Into<String>) {
        *self.mode.write().await = UiMode::ConfirmingTableDelete {
            table_name: table_name.into(),
        };
    }

    /// Ask for confirmation before deleting one product row.
    pub async fn request_product_delete(&self, table_name: impl Into<String>, id: ProductId) {
        *self.mode.write().await = UiMode::ConfirmingProductDelete {
            table_name: table_name.into(),
            id,
        };
    }

    /// Dismiss whatever dialog is pending. No remote call is made.
    pub async fn cancel_dialog(&self) {
        *self.mode.write().await = UiMode::Idle;
    }

    /// Confirm a pending whole-table delete.
    ///
    /// Calls the remote delete, then drops the table from the local list
    /// by name. A remote error (e.g. the table was already gone) is
    /// logged and treated as non-fatal: delete converges to "table
    /// removed" either way. The table's orphaned products entry is left
    /// in the mapping; it is never rendered again.
    pub async fn confirm_table_delete(&self) {
        let pending = {
            let mode = self.mode.read().await;
            match &*mode {
                UiMode::ConfirmingTableDelete { table_name } => table_name.clone(),
                _ => return,
            }
        };

        if let Err(err) = self.store.delete_table(&pending).await {
            tracing::warn!(table = %pending, error = %err, "Table delete reported an error");
        }

        self.state.write().await.remove_table(&pending);
        *self.mode.write().await = UiMode::Idle;
    }

    /// Confirm a pending per-row delete.
    ///
    /// Only a successful remote delete closes the dialog and triggers the
    /// table's refresh; on failure the confirmation stays pending and the
    /// cached rows are untouched.
    pub async fn confirm_product_delete(&self) {
        let (table_name, id) = {
            let mode = self.mode.read().await;
            match &*mode {
                UiMode::ConfirmingProductDelete { table_name, id } => (table_name.clone(), *id),
                _ => return,
            }
        };

        match self.store.delete_product(&table_name, id).await {
            Ok(()) => {
                *self.mode.write().await = UiMode::Idle;
                self.refresh_products(&table_name).await;
            }
            Err(err) => {
                tracing::error!(table = %table_name, id, error = %err, "Failed to delete product");
            }
        }
    }

    // ---- editor composition ----

    /// A create-mode editor for one table. The editor owns its own
    /// open/close flag; it does not touch the dialog mode.
    pub fn new_product_editor(&self, table_name: impl Into<String>) -> ProductEditor {
        ProductEditor::create(table_name)
    }

    /// Open the edit dialog for one row: records the editing mode and
    /// hands back an editor seeded from the product.
    pub async fn begin_product_edit(
        &self,
        table_name: impl Into<String>,
        product: Product,
    ) -> ProductEditor {
        let table_name = table_name.into();
        *self.mode.write().await = UiMode::EditingProduct {
            table_name: table_name.clone(),
            product: product.clone(),
        };
        ProductEditor::edit(table_name, product)
    }

    /// Submit an editor's draft and, on success, refresh the affected
    /// table and clear the editing mode. The refresh only runs after the
    /// mutation has resolved, so it never races ahead of its own write.
    pub async fn complete_editor(&self, editor: &mut ProductEditor) -> EditorOutcome {
        let outcome = editor.submit(&self.store).await;

        if let EditorOutcome::Saved { table_name } = &outcome {
            self.refresh_products(table_name).await;
            let mut mode = self.mode.write().await;
            if matches!(&*mode, UiMode::EditingProduct { .. }) {
                *mode = UiMode::Idle;
            }
        }

        outcome
    }

    // ---- read accessors ----

    /// Snapshot of the known tables.
    pub async fn tables(&self) -> Vec<Table> {
        self.state.read().await.tables().to_vec()
    }

    /// Snapshot of one table's cached rows (empty if nothing cached).
    pub async fn products_of(&self, table_name: &str) -> Vec<Product> {
        self.state.read().await.products_of(table_name).to_vec()
    }

    /// Current dialog mode.
    pub async fn mode(&self) -> UiMode {
        self.mode.read().await.clone()
    }

    /// The title remembered from the last successful table creation.
    pub fn last_title(&self) -> Option<String> {
        self.titles.load_last_title()
    }
}
