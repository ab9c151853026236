//! REST client for the shop service HTTP endpoints.
//!
//! Wraps table listing/creation/deletion and per-table product CRUD
//! using [`reqwest`]. Callers get a three-way error split: a request that
//! never produced a response is [`StoreError::Network`], a non-2xx status
//! is [`StoreError::Server`], and a client-side precondition failure is
//! [`StoreError::Validation`] (the request is never issued).

use serde::Deserialize;
use shoplist_core::validate::{validate_product_name, validate_table_title};
use shoplist_core::{CoreError, Product, ProductDraft, ProductId, Table};

/// HTTP client for a single shop service instance.
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

/// Response returned by `POST /create_table/`.
///
/// The service assigns the table identifier; the title is echoed by the
/// caller, not returned.
#[derive(Debug, Deserialize)]
struct CreateTableResponse {
    table_name: String,
}

/// Errors from the shop service REST layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS) or the response
    /// body could not be read/decoded.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("shop service error ({status}): {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A client-side precondition failed; no request was sent.
    #[error("{0}")]
    Validation(String),
}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => StoreError::Validation(msg),
        }
    }
}

impl RemoteStore {
    /// Create a new client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (connection pooling across several stores).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// List all known tables.
    ///
    /// Sends `GET /tables`.
    pub async fn list_tables(&self) -> Result<Vec<Table>, StoreError> {
        let response = self
            .client
            .get(format!("{}/tables", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a new table from a user-supplied title.
    ///
    /// Sends `POST /create_table/`. The service assigns the unique
    /// `table_name`; the returned [`Table`] carries the submitted title.
    /// An empty title is rejected before any request is made.
    pub async fn create_table(&self, title: &str) -> Result<Table, StoreError> {
        validate_table_title(title)?;

        let body = serde_json::json!({ "title": title });

        let response = self
            .client
            .post(format!("{}/create_table/", self.base_url))
            .json(&body)
            .send()
            .await?;

        let created: CreateTableResponse = Self::parse_response(response).await?;
        Ok(Table {
            table_name: created.table_name,
            title: title.to_string(),
        })
    }

    /// Delete a whole table.
    ///
    /// Sends `DELETE /tables/{table_name}`. Deleting an already-deleted
    /// table surfaces [`StoreError::Server`]; callers treat that as
    /// non-fatal.
    pub async fn delete_table(&self, table_name: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(format!("{}/tables/{}", self.base_url, table_name))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// List one table's product rows.
    ///
    /// Sends `GET /products/{table_name}/`. A table with no rows yields an
    /// empty vec; a table unknown to the service yields a server error.
    pub async fn list_products(&self, table_name: &str) -> Result<Vec<Product>, StoreError> {
        let response = self
            .client
            .get(format!("{}/products/{}/", self.base_url, table_name))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a product in a table.
    ///
    /// Sends `POST /products/{table_name}/` and returns the full
    /// server-assigned record, including its fresh `id`. An empty product
    /// name is rejected before any request is made.
    pub async fn create_product(
        &self,
        table_name: &str,
        draft: &ProductDraft,
    ) -> Result<Product, StoreError> {
        validate_product_name(&draft.product_name)?;

        let response = self
            .client
            .post(format!("{}/products/{}/", self.base_url, table_name))
            .json(draft)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Replace a product record in full.
    ///
    /// Sends `PUT /products/{table_name}/{id}` with every field supplied;
    /// the service does not merge, it overwrites. The response body (the
    /// service echoes the updated record) is discarded.
    pub async fn update_product(
        &self,
        table_name: &str,
        id: ProductId,
        record: &ProductDraft,
    ) -> Result<(), StoreError> {
        validate_product_name(&record.product_name)?;

        let response = self
            .client
            .put(format!("{}/products/{}/{}", self.base_url, table_name, id))
            .json(record)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Delete one product from a table.
    ///
    /// Sends `DELETE /products/{table_name}/{id}`. The id is only
    /// meaningful together with its owning table, so the path is always
    /// table-scoped.
    pub async fn delete_product(&self, table_name: &str, id: ProductId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(format!("{}/products/{}/{}", self.base_url, table_name, id))
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`StoreError::Server`] containing the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let url = response.url().clone();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(%url, status = status.as_u16(), "shop service returned an error");
            return Err(StoreError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
