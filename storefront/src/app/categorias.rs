//! # Category List Screen
//!
//! Owns the in-memory category collection and keeps it in sync with the
//! remote catalog: full reload on mount and on regained focus, overlay
//! reload on pull-to-refresh, and local removal after a confirmed delete.

use crate::app::state::{Destination, ListPhase};
use crate::core::service::{CatalogService, Navigator, Notifier};
use shared::Categoria;
use std::sync::Arc;

/// List synchronization controller for the category screen.
pub struct CategoriasScreen {
    api: Arc<dyn CatalogService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    categorias: Vec<Categoria>,
    phase: ListPhase,
}

impl CategoriasScreen {
    pub fn new(
        api: Arc<dyn CatalogService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            navigator,
            notifier,
            categorias: Vec::new(),
            phase: ListPhase::Loading,
        }
    }

    /// The list as of the last successful fetch.
    pub fn categorias(&self) -> &[Categoria] {
        &self.categorias
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Initial load on screen mount.
    pub async fn on_mount(&mut self) {
        self.fetch(false).await;
    }

    /// Reload when control returns to this screen.
    ///
    /// The host shell must invoke this from its navigation-focus event; new
    /// and changed categories are picked up here, never merged directly.
    pub async fn on_focus(&mut self) {
        self.fetch(false).await;
    }

    /// Pull-to-refresh.
    pub async fn refresh(&mut self) {
        self.fetch(true).await;
    }

    #[tracing::instrument(skip(self))]
    async fn fetch(&mut self, refreshing: bool) {
        self.phase = if refreshing {
            ListPhase::Refreshing
        } else {
            ListPhase::Loading
        };

        match self.api.get_categorias().await {
            Ok(categorias) => {
                if categorias.is_empty() {
                    self.notifier
                        .info("No hay categorías disponibles en este momento.");
                }
                self.categorias = categorias;
                self.phase = if self.categorias.is_empty() {
                    ListPhase::Empty
                } else {
                    ListPhase::Ready
                };
            }
            Err(e) => {
                tracing::warn!(error = %e, "Categoria list fetch failed");
                self.notifier.error(&e.to_string());
                // prior data stays visible
                self.phase = ListPhase::Ready;
            }
        }
    }

    /// Delete a category after explicit user confirmation.
    ///
    /// On success the row is removed locally, without a refetch; on failure
    /// (or a declined prompt) the list is left untouched.
    pub async fn delete(&mut self, categoria_id: &str) {
        let confirmed = self
            .notifier
            .confirm(
                "Confirmar eliminación",
                "¿Estás seguro de que deseas eliminar esta categoría?",
            )
            .await;
        if !confirmed {
            return;
        }

        match self.api.delete_categoria(categoria_id).await {
            Ok(_) => {
                self.categorias.retain(|c| c.id != categoria_id);
                if self.categorias.is_empty() && !self.phase.is_busy() {
                    self.phase = ListPhase::Empty;
                }
                self.notifier.success("Categoría eliminada correctamente");
            }
            Err(e) => {
                tracing::warn!(error = %e, categoria_id, "Categoria delete failed");
                self.notifier.error(&e.to_string());
            }
        }
    }

    /// Open the products of a category.
    pub fn open_categoria(&self, categoria: &Categoria) {
        self.navigator.navigate(Destination::Productos {
            categoria_id: categoria.id.clone(),
            categoria_nombre: categoria.nombre.clone(),
        });
    }

    /// Open the category creation form.
    pub fn open_add(&self) {
        self.navigator.navigate(Destination::AddCategoria);
    }
}
