//! # Application State Types
//!
//! Screen destinations and the small state machines shared by the list and
//! form controllers.

use shared::Producto;

/// Navigation destinations, with their parameter bundles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Category list (home screen)
    Categorias,
    /// Products of one category
    Productos {
        categoria_id: String,
        categoria_nombre: String,
    },
    /// Category creation form
    AddCategoria,
    /// Product creation form, scoped to its category
    AddProducto {
        categoria_id: String,
        categoria_nombre: String,
    },
}

impl Destination {
    /// Get the screen title for header display
    pub fn title(&self) -> String {
        match self {
            Destination::Categorias => "Categorías".to_string(),
            Destination::Productos {
                categoria_nombre, ..
            } if !categoria_nombre.is_empty() => format!("Productos - {}", categoria_nombre),
            Destination::Productos { .. } => "Productos".to_string(),
            Destination::AddCategoria => "Agregar Categoría".to_string(),
            Destination::AddProducto { .. } => "Agregar Producto".to_string(),
        }
    }
}

/// Phase of a list screen
///
/// `Loading` and `Refreshing` are mutually exclusive; at most one fetch is
/// in flight per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Initial or focus-triggered load; only a progress indicator is shown
    Loading,
    /// Pull-to-refresh; the previous list stays visible underneath
    Refreshing,
    /// List populated
    Ready,
    /// Ready with zero items; the empty-state message is shown
    Empty,
}

impl ListPhase {
    /// True while a fetch is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, ListPhase::Loading | ListPhase::Refreshing)
    }
}

/// Phase of a submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fields mutable, submit enabled
    Editing,
    /// Request in flight, submit disabled
    Submitting,
}

/// Working copy of the product under edit.
///
/// The three mutable fields are held as text until submission; the original
/// entity supplies everything else for the update body.
#[derive(Debug, Clone)]
pub struct EditDraft {
    /// The entity being edited, as fetched
    pub producto: Producto,
    pub nombre: String,
    pub precio: String,
    pub cantidad: String,
    pub phase: FormPhase,
}

impl EditDraft {
    /// Start a draft from the entity's current values.
    pub fn new(producto: Producto) -> Self {
        Self {
            nombre: producto.nombre.clone(),
            precio: producto.precio.to_string(),
            cantidad: producto.cantidad.to_string(),
            phase: FormPhase::Editing,
            producto,
        }
    }
}
