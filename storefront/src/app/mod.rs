//! # Application Module
//!
//! One controller per screen, mirroring the four screens of the app:
//!
//! ```text
//! app/
//! ├── state.rs         - Destinations, list/form phases, edit draft
//! ├── categorias.rs    - Category list (list sync controller)
//! ├── productos.rs     - Product list + edit surface
//! ├── add_categoria.rs - Category creation form
//! └── add_producto.rs  - Product creation form
//! ```
//!
//! Controllers own their state exclusively and are driven by the host shell:
//! lifecycle (`on_mount`, `on_focus`), user actions (`refresh`, `delete`,
//! `submit`, ...), and field bindings (public `String` fields / `editing_mut`).
//! Every remote outcome is reported through the injected [`crate::core::service::Notifier`];
//! nothing here panics or propagates an error to the shell.

pub mod add_categoria;
pub mod add_producto;
pub mod categorias;
pub mod productos;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use add_categoria::AddCategoriaForm;
pub use add_producto::AddProductoForm;
pub use categorias::CategoriasScreen;
pub use productos::ProductosScreen;
pub use state::{Destination, EditDraft, FormPhase, ListPhase};
