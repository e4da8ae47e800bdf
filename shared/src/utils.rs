//! # Shared Utility Functions
//!
//! Display formatting helpers used by the storefront front-ends.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_precio;
//!
//! assert_eq!(format_precio(49.9), "S/49.90");
//! ```

use chrono::{DateTime, Utc};

/// Format a creation date for list-row display (day/month/year).
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use shared::utils::format_fecha;
///
/// let fecha = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
/// assert_eq!(format_fecha(&fecha), "15/03/2024");
/// ```
pub fn format_fecha(fecha: &DateTime<Utc>) -> String {
    fecha.format("%d/%m/%Y").to_string()
}

/// Format a price in soles with two decimals, e.g. `S/49.90`.
pub fn format_precio(precio: f64) -> String {
    format!("S/{:.2}", precio)
}
