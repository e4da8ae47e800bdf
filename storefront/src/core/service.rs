//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity.
//!
//! [`CatalogService`] abstracts the remote catalog API so controllers can be
//! exercised against a mock in tests. The remaining traits are the platform
//! capabilities the controllers consume but do not implement: toast/dialog
//! notifications, screen navigation, and image selection. The console binary
//! backs them with stdin/stdout; a GUI shell would back them with its own
//! widgets.

use crate::app::state::Destination;
use crate::core::error::Result;
use crate::services::api::{NuevaCategoria, NuevoProducto};
use async_trait::async_trait;
use shared::{Categoria, Producto};
use std::path::PathBuf;

/// Operations of the remote catalog API.
///
/// Implemented by [`crate::services::api::ApiClient`]; tests substitute a
/// mock to observe traffic without a server.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List all categories
    async fn get_categorias(&self) -> Result<Vec<Categoria>>;

    /// Create a category (multipart upload including the image file)
    async fn create_categoria(&self, nueva: NuevaCategoria) -> Result<Categoria>;

    /// Delete a category by id, returning the deleted entity
    async fn delete_categoria(&self, id: &str) -> Result<Categoria>;

    /// List the products of one category
    async fn get_productos(&self, categoria_id: &str) -> Result<Vec<Producto>>;

    /// Create a product (multipart upload including the image file)
    async fn create_producto(&self, nuevo: NuevoProducto) -> Result<Producto>;

    /// Update a product with a full JSON body; no image re-upload
    async fn update_producto(&self, id: &str, producto: &Producto) -> Result<Producto>;

    /// Delete a product by id, returning the deleted entity
    async fn delete_producto(&self, id: &str) -> Result<Producto>;
}

/// Image-selection service.
///
/// Produces a local file reference to upload, or `None` when the user
/// cancels the picker. Cancellation must leave the form untouched.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick_image(&self) -> Option<PathBuf>;
}

/// Screen navigation service.
///
/// Controllers request transitions by destination name plus parameter
/// bundle; the host shell owns the actual screen stack and re-delivers
/// focus to a screen via the controllers' `on_focus`.
pub trait Navigator: Send + Sync {
    /// Push the given destination
    fn navigate(&self, destination: Destination);

    /// Return to the previous screen
    fn back(&self);
}

/// User notification service.
///
/// One-way toasts for success/error/advisory messages, plus the two-choice
/// confirmation prompt that gates every delete.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a success notification
    fn success(&self, message: &str);

    /// Show a failure notification
    fn error(&self, message: &str);

    /// Show an advisory notification (non-blocking)
    fn info(&self, message: &str);

    /// Ask the user to confirm a destructive action; `false` cancels it
    async fn confirm(&self, title: &str, message: &str) -> bool;
}
