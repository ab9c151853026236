//! Wire types shared with the shop service.

use serde::{Deserialize, Deserializer, Serialize};

/// Product ids are server-assigned integers, unique within their table.
pub type ProductId = i64;

/// A named shopping list.
///
/// `table_name` is the server-assigned identifier (unique, derived from the
/// user-supplied title at creation); `title` is the user-facing label and
/// carries no uniqueness guarantee. Tables are never renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub table_name: String,
    pub title: String,
}

/// A single row within a table.
///
/// A product is addressable only by the pair (owning table name, `id`);
/// the id alone is meaningless across tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    pub buy: bool,
    /// Free-text note. The wire may send `null` or omit the field; both
    /// deserialize as the empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
}

/// Unsaved form state for a product being created or edited.
///
/// Shared by both editor modes; also the request body for product creation
/// and full-record update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub product_name: String,
    pub buy: bool,
    pub note: String,
}

impl ProductDraft {
    /// Seed a draft from an existing record (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            buy: product.buy,
            note: product.note.clone(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
