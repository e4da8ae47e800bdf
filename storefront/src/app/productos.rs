//! # Product List Screen
//!
//! Owns the product collection of one category plus the inline edit surface.
//! Synchronization follows the category screen: full reload on mount/focus,
//! overlay reload on pull-to-refresh, local removal after a confirmed
//! delete. Saving an edit closes the draft and re-runs the load cycle.

use crate::app::state::{Destination, EditDraft, FormPhase, ListPhase};
use crate::core::service::{CatalogService, Navigator, Notifier};
use crate::services::api::productos::build_update;
use shared::Producto;
use std::sync::Arc;

/// List synchronization controller for the product screen.
pub struct ProductosScreen {
    api: Arc<dyn CatalogService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    categoria_id: String,
    categoria_nombre: String,
    productos: Vec<Producto>,
    phase: ListPhase,
    editing: Option<EditDraft>,
}

impl ProductosScreen {
    pub fn new(
        api: Arc<dyn CatalogService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        categoria_id: impl Into<String>,
        categoria_nombre: impl Into<String>,
    ) -> Self {
        Self {
            api,
            navigator,
            notifier,
            categoria_id: categoria_id.into(),
            categoria_nombre: categoria_nombre.into(),
            productos: Vec::new(),
            phase: ListPhase::Loading,
            editing: None,
        }
    }

    /// The list as of the last successful fetch.
    pub fn productos(&self) -> &[Producto] {
        &self.productos
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Screen title for header display.
    pub fn title(&self) -> String {
        Destination::Productos {
            categoria_id: self.categoria_id.clone(),
            categoria_nombre: self.categoria_nombre.clone(),
        }
        .title()
    }

    /// The edit draft, if the edit surface is open.
    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    /// Mutable access for the host to bind the draft's text fields.
    pub fn editing_mut(&mut self) -> Option<&mut EditDraft> {
        self.editing.as_mut()
    }

    /// Initial load on screen mount.
    pub async fn on_mount(&mut self) {
        self.fetch(false).await;
    }

    /// Reload when control returns to this screen.
    ///
    /// The host shell must invoke this from its navigation-focus event; new
    /// and changed products are picked up here, never merged directly.
    pub async fn on_focus(&mut self) {
        self.fetch(false).await;
    }

    /// Pull-to-refresh.
    pub async fn refresh(&mut self) {
        self.fetch(true).await;
    }

    #[tracing::instrument(skip(self), fields(categoria_id = %self.categoria_id))]
    async fn fetch(&mut self, refreshing: bool) {
        self.phase = if refreshing {
            ListPhase::Refreshing
        } else {
            ListPhase::Loading
        };

        match self.api.get_productos(&self.categoria_id).await {
            Ok(productos) => {
                if productos.is_empty() {
                    self.notifier
                        .info("No hay productos disponibles en esta categoría.");
                }
                self.productos = productos;
                self.phase = if self.productos.is_empty() {
                    ListPhase::Empty
                } else {
                    ListPhase::Ready
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Producto list fetch failed");
                self.notifier.error(&e.to_string());
                // prior data stays visible
                self.phase = ListPhase::Ready;
            }
        }
    }

    /// Delete a product after explicit user confirmation.
    pub async fn delete(&mut self, producto_id: &str) {
        let confirmed = self
            .notifier
            .confirm(
                "Confirmar eliminación",
                "¿Estás seguro de que deseas eliminar este producto?",
            )
            .await;
        if !confirmed {
            return;
        }

        match self.api.delete_producto(producto_id).await {
            Ok(_) => {
                self.productos.retain(|p| p.id != producto_id);
                if self.productos.is_empty() && !self.phase.is_busy() {
                    self.phase = ListPhase::Empty;
                }
                self.notifier.success("Producto eliminado correctamente");
            }
            Err(e) => {
                tracing::warn!(error = %e, producto_id, "Producto delete failed");
                self.notifier.error(&e.to_string());
            }
        }
    }

    /// Open the edit surface for a listed product.
    pub fn begin_edit(&mut self, producto_id: &str) {
        if let Some(producto) = self.productos.iter().find(|p| p.id == producto_id) {
            self.editing = Some(EditDraft::new(producto.clone()));
        }
    }

    /// Close the edit surface, discarding the draft.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validate and submit the edit draft.
    ///
    /// A failing validation keeps the draft open and never touches the
    /// network. On success the draft is closed and the list reloaded; on a
    /// remote failure the draft stays open for correction.
    pub async fn save_edit(&mut self) {
        let Some(draft) = self.editing.as_mut() else {
            return;
        };
        if draft.phase == FormPhase::Submitting {
            return;
        }

        let payload =
            match build_update(&draft.producto, &draft.nombre, &draft.precio, &draft.cantidad) {
                Ok(payload) => payload,
                Err(e) => {
                    self.notifier.error(&e.to_string());
                    return;
                }
            };

        draft.phase = FormPhase::Submitting;
        let id = draft.producto.id.clone();

        let result = self.api.update_producto(&id, &payload).await;

        match result {
            Ok(_) => {
                self.editing = None;
                self.fetch(false).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, producto_id = %id, "Producto update failed");
                if let Some(draft) = self.editing.as_mut() {
                    draft.phase = FormPhase::Editing;
                }
                self.notifier.error(&e.to_string());
            }
        }
    }

    /// Open the product creation form for this category.
    pub fn open_add(&self) {
        self.navigator.navigate(Destination::AddProducto {
            categoria_id: self.categoria_id.clone(),
            categoria_nombre: self.categoria_nombre.clone(),
        });
    }
}
