//! # Storefront Catalog Client - Library Root
//!
//! Client-side core of the storefront management app: keeps per-screen lists
//! of categories and products in sync with the remote catalog API, validates
//! form input before submission, and reports every outcome to the user
//! through pluggable notification, navigation, and image-selection services.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              storefront (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - Screen controllers and state machines    │
//! │  services   - Catalog HTTP client (reqwest)            │
//! │  utils      - Form validation                          │
//! │  core       - Error taxonomy + service traits          │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!                          │ HTTP (JSON / multipart)
//!                          ▼
//!               ┌─────────────────────┐
//!               │  Catalog API server │
//!               │                     │
//!               │  /categorias        │
//!               │  /productos         │
//!               └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: One controller per screen. `CategoriasScreen` and
//!   `ProductosScreen` own their list state and reconcile it with the remote
//!   collection on mount, focus, and pull-to-refresh; `AddCategoriaForm` and
//!   `AddProductoForm` gate submission behind validation.
//! - **services**: `ApiClient` plus per-endpoint modules for the four
//!   collection endpoints.
//! - **core**: `AppError` and the dependency-injection traits
//!   (`CatalogService`, `Navigator`, `Notifier`, `ImagePicker`).
//! - **utils**: Pure validation of form fields and numeric input.
//! - **config**: `ApiConfig`, the injected base address of the API.
//!
//! ## Concurrency Model
//!
//! Strictly sequential: every controller method awaits its network call to
//! completion before returning, and each controller exclusively owns its
//! state (`&mut self`). There is no shared mutation and no locking.

pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;
