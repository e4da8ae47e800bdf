//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the storefront client and the
//! catalog REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::catalog`]**: Category and product DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_fecha`]**: Format creation dates for display
//!   - **[`utils::format_precio`]**: Format prices for display
//!
//! ## Wire Format
//!
//! The catalog API speaks camelCase JSON (`fechaCreacion`, `categoriaId`), so
//! every DTO carries `#[serde(rename_all = "camelCase")]`. All structs
//! implement both `Serialize` and `Deserialize` for bidirectional
//! communication.
//!
//! ## Example JSON
//!
//! ```rust
//! use shared::dto::catalog::Producto;
//!
//! let producto: Producto = serde_json::from_str(
//!     r#"{
//!         "id": "p-1",
//!         "categoriaId": "c-1",
//!         "nombre": "Mouse",
//!         "precio": 49.9,
//!         "cantidad": 3,
//!         "imagen": "https://cdn.example.com/mouse.jpg",
//!         "fechaCreacion": "2024-01-01T00:00:00Z"
//!     }"#,
//! ).unwrap();
//!
//! assert_eq!(producto.categoria_id, "c-1");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
