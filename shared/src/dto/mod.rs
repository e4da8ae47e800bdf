//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the catalog REST API.
//!
//! ## Module Organization
//!
//! - [`catalog`] - Category and product entities plus the API error body
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`)
//! - **Dates**: RFC 3339 strings, deserialized into `chrono::DateTime<Utc>`
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod catalog;

pub use catalog::*;
