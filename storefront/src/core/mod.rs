//! # Core Abstractions
//!
//! Foundational abstractions used throughout the client:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Traits for dependency injection (`CatalogService`,
//!   `ImagePicker`, `Navigator`, `Notifier`)
//!
//! ## Dependency Injection
//!
//! Controllers hold `Arc<dyn CatalogService>` (and the platform traits)
//! rather than concrete types, so production wires in
//! [`crate::services::api::ApiClient`] while tests wire in mocks.

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{AppError, Result};
pub use service::{CatalogService, ImagePicker, Navigator, Notifier};
