//! # API Client
//!
//! Main HTTP client for catalog API communication.

use crate::config::ApiConfig;
use crate::core::error::Result;
use crate::core::service::CatalogService;
use reqwest::Client;
use shared::{Categoria, Producto};

/// HTTP client for communicating with the catalog API server.
///
/// Holds a connection pool plus the injected base address; the base address
/// is fixed for the lifetime of the client.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the configured base address.
    ///
    /// The client is configured with a 10 second timeout to prevent freezing.
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Implement CatalogService trait for ApiClient
#[async_trait::async_trait]
impl CatalogService for ApiClient {
    async fn get_categorias(&self) -> Result<Vec<Categoria>> {
        crate::services::api::categorias::get_all(self).await
    }

    async fn create_categoria(
        &self,
        nueva: crate::services::api::NuevaCategoria,
    ) -> Result<Categoria> {
        crate::services::api::categorias::create(self, nueva).await
    }

    async fn delete_categoria(&self, id: &str) -> Result<Categoria> {
        crate::services::api::categorias::delete(self, id).await
    }

    async fn get_productos(&self, categoria_id: &str) -> Result<Vec<Producto>> {
        crate::services::api::productos::get_by_categoria(self, categoria_id).await
    }

    async fn create_producto(
        &self,
        nuevo: crate::services::api::NuevoProducto,
    ) -> Result<Producto> {
        crate::services::api::productos::create(self, nuevo).await
    }

    async fn update_producto(&self, id: &str, producto: &Producto) -> Result<Producto> {
        crate::services::api::productos::update(self, id, producto).await
    }

    async fn delete_producto(&self, id: &str) -> Result<Producto> {
        crate::services::api::productos::delete(self, id).await
    }
}
