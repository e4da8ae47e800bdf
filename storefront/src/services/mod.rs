//! # Services Module
//!
//! External service integrations for the storefront client.
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             Screen controllers              │
//! │                                             │
//! │            ┌──────────────────┐             │
//! │            │  ApiClient       │             │
//! │            │  (api/)          │             │
//! │            └────────┬─────────┘             │
//! └─────────────────────┼───────────────────────┘
//!                       │ HTTP (JSON / multipart)
//!                       ▼
//!            ┌─────────────────────┐
//!            │  Catalog API server │
//!            │                     │
//!            │  GET    /categorias │
//!            │  POST   /categorias │
//!            │  DELETE /categorias/{id}
//!            │  GET    /productos/{categoriaId}
//!            │  POST   /productos  │
//!            │  PUT    /productos/{id}
//!            │  DELETE /productos/{id}
//!            └─────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every endpoint returns `Result<T, AppError>`:
//! - Network failures: `AppError::Fetch("Error de red: ...")`
//! - Non-2xx with a structured body: `AppError::Validation(body.error)`
//! - Non-2xx without one: `AppError::Fetch` with a per-operation message
//!
//! No operation retries automatically.

pub mod api;
