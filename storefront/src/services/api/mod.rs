//! # Catalog API Client Module
//!
//! HTTP client for the remote catalog API. One module per collection
//! endpoint, free functions taking the shared [`ApiClient`].
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs         - Module exports and documentation
//! ├── client.rs      - ApiClient struct and CatalogService impl
//! ├── categorias.rs  - Category endpoints (list, create, delete)
//! └── productos.rs   - Product endpoints (list, create, update, delete)
//! ```

pub mod categorias;
pub mod client;
pub mod productos;

pub use categorias::NuevaCategoria;
pub use client::ApiClient;
pub use productos::NuevoProducto;
