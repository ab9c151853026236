//! Client-side preconditions checked before a remote call is issued.
//!
//! The shop service enforces its own constraints; these checks only cover
//! the cases where the client must refuse to send the request at all
//! (empty required fields).

use crate::error::CoreError;

/// Validate a table title: non-empty after trimming.
pub fn validate_table_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Table title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a product name: non-empty after trimming.
pub fn validate_product_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Product name must not be empty".to_string(),
        ));
    }
    Ok(())
}
