//! Form state for creating or editing one product row.
//!
//! One draft shape serves both modes. A successful submit clears/closes
//! the dialog and reports which table needs a refresh; a failed submit
//! logs the error and leaves the dialog open with the user's input
//! intact. Nothing here surfaces an error to the user beyond the log
//! channel, and nothing propagates past [`ProductEditor::submit`].

use shoplist_client::RemoteStore;
use shoplist_core::{Product, ProductDraft};

/// How the editor was instantiated.
#[derive(Debug, Clone)]
pub enum EditorMode {
    /// Creating a new row in `table_name`; the draft starts empty.
    Create { table_name: String },
    /// Editing an existing row; the draft is seeded from `product`.
    Edit { table_name: String, product: Product },
}

/// Result of a submit attempt, reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The mutation succeeded; `table_name` must be refreshed.
    Saved { table_name: String },
    /// The call failed (or was blocked by validation); the dialog stays
    /// open and the draft is untouched.
    Failed,
}

/// Local state of one create/edit dialog.
#[derive(Debug)]
pub struct ProductEditor {
    mode: EditorMode,
    draft: ProductDraft,
    open: bool,
}

impl ProductEditor {
    /// A create-mode editor, initially closed. Visibility is owned here:
    /// call [`open`](Self::open) to show the dialog.
    pub fn create(table_name: impl Into<String>) -> Self {
        Self {
            mode: EditorMode::Create {
                table_name: table_name.into(),
            },
            draft: ProductDraft::default(),
            open: false,
        }
    }

    /// An edit-mode editor, opened immediately with the draft seeded from
    /// the given record. Visibility is owned by the caller, which decides
    /// when to construct and when to drop this editor.
    pub fn edit(table_name: impl Into<String>, product: Product) -> Self {
        let draft = ProductDraft::from_product(&product);
        Self {
            mode: EditorMode::Edit {
                table_name: table_name.into(),
                product,
            },
            draft,
            open: true,
        }
    }

    /// Open the dialog. In create mode this resets the draft to empty.
    pub fn open(&mut self) {
        if matches!(self.mode, EditorMode::Create { .. }) {
            self.draft = ProductDraft::default();
        }
        self.open = true;
    }

    /// Close the dialog without submitting. The draft is discarded on the
    /// next open in create mode and on the next [`sync_to`](Self::sync_to)
    /// in edit mode.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Re-seed an edit-mode editor from a different record, e.g. when the
    /// user opens another row while the dialog is already up. No-op in
    /// create mode.
    pub fn sync_to(&mut self, product: Product) {
        if let EditorMode::Edit {
            product: current, ..
        } = &mut self.mode
        {
            self.draft = ProductDraft::from_product(&product);
            *current = product;
        }
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.draft.product_name = name.into();
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.draft.note = note.into();
    }

    pub fn set_buy(&mut self, buy: bool) {
        self.draft.buy = buy;
    }

    pub fn toggle_buy(&mut self) {
        self.draft.buy = !self.draft.buy;
    }

    /// Submit the draft.
    ///
    /// Create mode posts a new product; edit mode replaces the record in
    /// full (every field from the draft, none merged). On success the
    /// draft is cleared (create) and the dialog closes; the caller is told
    /// which table to refresh. On failure the error is logged and the
    /// dialog stays open with the draft unchanged.
    pub async fn submit(&mut self, store: &RemoteStore) -> EditorOutcome {
        match &self.mode {
            EditorMode::Create { table_name } => {
                match store.create_product(table_name, &self.draft).await {
                    Ok(created) => {
                        tracing::debug!(table = %table_name, id = created.id, "Product created");
                        let table_name = table_name.clone();
                        self.draft = ProductDraft::default();
                        self.open = false;
                        EditorOutcome::Saved { table_name }
                    }
                    Err(err) => {
                        tracing::error!(table = %table_name, error = %err, "Failed to create product");
                        EditorOutcome::Failed
                    }
                }
            }
            EditorMode::Edit {
                table_name,
                product,
            } => {
                match store
                    .update_product(table_name, product.id, &self.draft)
                    .await
                {
                    Ok(()) => {
                        tracing::debug!(table = %table_name, id = product.id, "Product updated");
                        let table_name = table_name.clone();
                        self.open = false;
                        EditorOutcome::Saved { table_name }
                    }
                    Err(err) => {
                        tracing::error!(
                            table = %table_name,
                            id = product.id,
                            error = %err,
                            "Failed to update product"
                        );
                        EditorOutcome::Failed
                    }
                }
            }
        }
    }
}
