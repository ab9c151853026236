//! In-process stub of the shop service for orchestrator tests.
//!
//! Same JSON/HTTP surface as the real service over an in-memory store,
//! plus per-endpoint hit counters so tests can assert which remote calls
//! the orchestrator did (and did not) issue.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use shoplist_core::{Product, ProductDraft, ProductId, Table};

/// In-memory backing store plus request accounting.
#[derive(Default)]
pub struct StubState {
    pub tables: Vec<Table>,
    pub products: HashMap<String, Vec<Product>>,
    next_id: ProductId,
    /// `GET /products/{table}/` hits per table name.
    pub list_product_hits: HashMap<String, usize>,
    /// `DELETE /tables/{table}` hits, successful or not.
    pub table_delete_hits: usize,
}

pub type SharedState = Arc<Mutex<StubState>>;

#[derive(Deserialize)]
struct CreateTableBody {
    title: String,
}

async fn list_tables(State(state): State<SharedState>) -> Json<Vec<Table>> {
    Json(state.lock().unwrap().tables.clone())
}

async fn create_table(
    State(state): State<SharedState>,
    Json(body): Json<CreateTableBody>,
) -> Json<serde_json::Value> {
    let mut state = state.lock().unwrap();

    let base = body.title.trim().to_lowercase().replace(' ', "_");
    let mut table_name = base.clone();
    let mut n = 1;
    while state.tables.iter().any(|t| t.table_name == table_name) {
        n += 1;
        table_name = format!("{base}_{n}");
    }

    state.tables.push(Table {
        table_name: table_name.clone(),
        title: body.title.clone(),
    });
    state.products.insert(table_name.clone(), Vec::new());

    Json(serde_json::json!({ "table_name": table_name }))
}

async fn delete_table(
    State(state): State<SharedState>,
    Path(table_name): Path<String>,
) -> StatusCode {
    let mut state = state.lock().unwrap();
    state.table_delete_hits += 1;
    if !state.tables.iter().any(|t| t.table_name == table_name) {
        return StatusCode::NOT_FOUND;
    }
    state.tables.retain(|t| t.table_name != table_name);
    state.products.remove(&table_name);
    StatusCode::OK
}

async fn list_products(
    State(state): State<SharedState>,
    Path(table_name): Path<String>,
) -> Result<Json<Vec<Product>>, StatusCode> {
    let mut state = state.lock().unwrap();
    *state.list_product_hits.entry(table_name.clone()).or_insert(0) += 1;
    state
        .products
        .get(&table_name)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_product(
    State(state): State<SharedState>,
    Path(table_name): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.next_id += 1;
    let product = Product {
        id: state.next_id,
        product_name: draft.product_name,
        buy: draft.buy,
        note: draft.note,
    };
    let rows = state
        .products
        .get_mut(&table_name)
        .ok_or(StatusCode::NOT_FOUND)?;
    rows.push(product.clone());
    Ok(Json(product))
}

async fn update_product(
    State(state): State<SharedState>,
    Path((table_name, id)): Path<(String, ProductId)>,
    Json(record): Json<ProductDraft>,
) -> Result<Json<Product>, StatusCode> {
    let mut state = state.lock().unwrap();
    let rows = state
        .products
        .get_mut(&table_name)
        .ok_or(StatusCode::NOT_FOUND)?;
    let row = rows
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    row.product_name = record.product_name;
    row.buy = record.buy;
    row.note = record.note;
    Ok(Json(row.clone()))
}

async fn delete_product(
    State(state): State<SharedState>,
    Path((table_name, id)): Path<(String, ProductId)>,
) -> Result<Json<Product>, StatusCode> {
    let mut state = state.lock().unwrap();
    let rows = state
        .products
        .get_mut(&table_name)
        .ok_or(StatusCode::NOT_FOUND)?;
    let pos = rows
        .iter()
        .position(|p| p.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(rows.remove(pos)))
}

/// Bind the stub service to an ephemeral port and serve it in the
/// background. Returns the base URL plus a handle to the backing store.
pub async fn spawn_stub() -> (String, SharedState) {
    let state: SharedState = Arc::new(Mutex::new(StubState::default()));

    let app = Router::new()
        .route("/tables", get(list_tables))
        .route("/create_table/", post(create_table))
        .route("/tables/{table_name}", delete(delete_table))
        .route("/products/{table_name}/", get(list_products))
        .route("/products/{table_name}/", post(create_product))
        .route("/products/{table_name}/{id}", put(update_product))
        .route("/products/{table_name}/{id}", delete(delete_product))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub serve");
    });

    (format!("http://{addr}"), state)
}
