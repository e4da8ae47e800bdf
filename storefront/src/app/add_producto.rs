//! # Product Creation Form
//!
//! Collects nombre, precio, cantidad, and an image reference for a product
//! of one category. precio and cantidad are held as text and only become
//! numbers inside the payload builder, after validation.

use crate::app::state::FormPhase;
use crate::core::service::{CatalogService, ImagePicker, Navigator, Notifier};
use crate::services::api::NuevoProducto;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Form submission controller for the product creation screen.
pub struct AddProductoForm {
    api: Arc<dyn CatalogService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    picker: Arc<dyn ImagePicker>,
    categoria_id: String,
    pub categoria_nombre: String,
    pub nombre: String,
    pub precio: String,
    pub cantidad: String,
    imagen: Option<PathBuf>,
    phase: FormPhase,
}

impl AddProductoForm {
    pub fn new(
        api: Arc<dyn CatalogService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        picker: Arc<dyn ImagePicker>,
        categoria_id: impl Into<String>,
        categoria_nombre: impl Into<String>,
    ) -> Self {
        Self {
            api,
            navigator,
            notifier,
            picker,
            categoria_id: categoria_id.into(),
            categoria_nombre: categoria_nombre.into(),
            nombre: String::new(),
            precio: String::new(),
            cantidad: String::new(),
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
    #[tracing::instrument(skip(self), fields(nombre = %self.nombre, categoria_id = %self.categoria_id))]
    pub async fn submit(&mut self) {
        if self.phase == FormPhase::Submitting {
            return;
        }

        let payload = match NuevoProducto::from_form(
            &self.nombre,
            &self.precio,
            &self.cantidad,
            self.imagen.as_deref(),
            &self.categoria_id,
        ) {
            Ok(payload) => payload,
            Err(e) => {
                self.notifier.error(&e.to_string());
                return;
            }
        };

        self.phase = FormPhase::Submitting;
        let result = self.api.create_producto(payload).await;
        self.phase = FormPhase::Editing;

        match result {
            Ok(_) => {
                self.notifier.success("Producto agregado correctamente");
                self.navigator.back();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Producto create failed");
                self.notifier
                    .error(&format!("No se pudo guardar el producto: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{MockCatalog, RecordingNavigator, RecordingNotifier, StubPicker};

    struct Harness {
        api: Arc<MockCatalog>,
        navigator: Arc<RecordingNavigator>,
        notifier: Arc<RecordingNotifier>,
        picker: Arc<StubPicker>,
        form: AddProductoForm,
    }

    fn harness() -> Harness {
        let api = Arc::new(MockCatalog::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let picker = Arc::new(StubPicker::default());
        let form = AddProductoForm::new(
            api.clone(),
            navigator.clone(),
            notifier.clone(),
            picker.clone(),
            "cat-7",
            "Electrónicos",
        );
        Harness {
            api,
            navigator,
            notifier,
            picker,
            form,
        }
    }

    async fn fill_valid(h: &mut Harness) {
        *h.picker.image.lock().unwrap() = Some(PathBuf::from("/tmp/producto.jpg"));
        h.form.pick_image().await;
        h.form.nombre = "Mouse".to_string();
        h.form.precio = "49.9".to_string();
        h.form.cantidad = "3".to_string();
    }

    #[tokio::test]
    async fn test_submit_valid_form_navigates_back() {
        let mut h = harness();
        fill_valid(&mut h).await;

        h.form.submit().await;

        assert_eq!(h.api.calls.lock().unwrap().as_slice(), ["create_producto"]);
        assert_eq!(
            h.notifier.successes.lock().unwrap().as_slice(),
            ["Producto agregado correctamente"]
        );
        assert_eq!(*h.navigator.backs.lock().unwrap(), 1);

        let productos = h.api.productos.lock().unwrap();
        assert_eq!(productos[0].categoria_id, "cat-7");
        assert_eq!(productos[0].precio, 49.9);
        assert_eq!(productos[0].cantidad, 3);
    }

    #[tokio::test]
    async fn test_negative_precio_never_contacts_api() {
        let mut h = harness();
        fill_valid(&mut h).await;
        h.form.precio = "-5".to_string();

        h.form.submit().await;

        assert!(h.api.calls.lock().unwrap().is_empty());
        assert_eq!(
            h.notifier.errors.lock().unwrap().as_slice(),
            ["El precio debe ser un número positivo"]
        );
    }

    #[tokio::test]
    async fn test_fractional_cantidad_never_contacts_api() {
        let mut h = harness();
        fill_valid(&mut h).await;
        h.form.cantidad = "3.5".to_string();

        h.form.submit().await;

        assert!(h.api.calls.lock().unwrap().is_empty());
        assert_eq!(
            h.notifier.errors.lock().unwrap().as_slice(),
            ["La cantidad debe ser un número entero positivo"]
        );
    }

    #[tokio::test]
    async fn test_missing_image_never_contacts_api() {
        let mut h = harness();
        h.form.nombre = "Mouse".to_string();
        h.form.precio = "49.9".to_string();
        h.form.cantidad = "3".to_string();

        h.form.submit().await;

        assert!(h.api.calls.lock().unwrap().is_empty());
        assert_eq!(
            h.notifier.errors.lock().unwrap().as_slice(),
            ["Todos los campos son obligatorios"]
        );
    }

    #[tokio::test]
    async fn test_failed_create_shows_reason_and_stays() {
        let mut h = harness();
        fill_valid(&mut h).await;
        *h.api.fail_create.lock().unwrap() = Some(crate::core::error::AppError::Fetch(
            "Error al crear producto".to_string(),
        ));

        h.form.submit().await;

        assert_eq!(
            h.notifier.errors.lock().unwrap().as_slice(),
            ["No se pudo guardar el producto: Error al crear producto"]
        );
        assert_eq!(*h.navigator.backs.lock().unwrap(), 0);
        assert_eq!(h.form.phase(), FormPhase::Editing);
    }
}
