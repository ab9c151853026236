/// Client configuration loaded from environment variables.
///
/// The default points at the shop service's local development address.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the shop service (default: `http://localhost:8000`).
    pub base_url: String,
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                 |
    /// |--------------------|-------------------------|
    /// | `SHOPLIST_API_URL` | `http://localhost:8000` |
    pub fn from_env() -> Self {
        let base_url = std::env::var("SHOPLIST_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into());

        Self { base_url }
    }
}
