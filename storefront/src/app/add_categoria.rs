//! # Category Creation Form
//!
//! Collects nombre, descripcion, and an image reference, validates them, and
//! submits the multipart create request. On success the form navigates back;
//! the category list picks the new entity up through its focus reload.

use crate::app::state::FormPhase;
use crate::core::service::{CatalogService, ImagePicker, Navigator, Notifier};
use crate::services::api::NuevaCategoria;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Form submission controller for the category creation screen.
pub struct AddCategoriaForm {
    api: Arc<dyn CatalogService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    picker: Arc<dyn ImagePicker>,
    pub nombre: String,
    pub descripcion: String,
    imagen: Option<PathBuf>,
    phase: FormPhase,
}

impl AddCategoriaForm {
    pub fn new(
        api: Arc<dyn CatalogService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        picker: Arc<dyn ImagePicker>,
    ) -> Self {
        Self {
            api,
            navigator,
            notifier,
            picker,
            nombre: String::new(),
            descripcion: String::new(),
            imagen: None,
            phase: FormPhase::Editing,
        }
    }

    /// The currently selected image, if any.
    pub fn imagen(&self) -> Option<&Path> {
        self.imagen.as_deref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Ask the image-selection service for a file.
    ///
    /// A cancelled pick leaves the previous selection (or none) untouched
    /// and never changes the form phase.
    pub async fn pick_image(&mut self) {
        if let Some(path) = self.picker.pick_image().await {
            self.imagen = Some(path);
        }
    }

    /// Validate and submit the form.
    ///
    /// A failing validation shows its specific message and stays in
    /// `Editing` without contacting the API. Submission is ignored while a
    /// previous one is in flight.
    #[tracing::instrument(skip(self), fields(nombre = %self.nombre))]
    pub async fn submit(&mut self) {
        if self.phase == FormPhase::Submitting {
            return;
        }

        let payload =
            match NuevaCategoria::from_form(self.imagen.as_deref(), &self.nombre, &self.descripcion)
            {
                Ok(payload) => payload,
                Err(e) => {
                    self.notifier.error(&e.to_string());
                    return;
                }
            };

        self.phase = FormPhase::Submitting;
        let result = self.api.create_categoria(payload).await;
        self.phase = FormPhase::Editing;

        match result {
            Ok(_) => {
                self.notifier.success("Categoría creada correctamente");
                self.navigator.back();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Categoria create failed");
                self.notifier
                    .error(&format!("No se pudo guardar la categoría: {}", e));
            }
        }
    }
}
