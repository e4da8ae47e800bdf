use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category
///
/// The `id` is assigned by the server on creation and is never mutated by
/// the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    /// URI of the category image uploaded on creation
    pub imagen: String,
    pub fecha_creacion: DateTime<Utc>,
}

/// Product within a category
///
/// `categoria_id` is immutable after creation. `precio` and `cantidad` are
/// numeric on the wire; the client only holds them as text inside form
/// drafts, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: String,
    pub categoria_id: String,
    pub nombre: String,
    pub precio: f64,
    pub cantidad: i64,
    /// URI of the product image; not re-uploaded on edit
    pub imagen: String,
    pub fecha_creacion: DateTime<Utc>,
}

/// Error response body returned by the API on rejected writes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
