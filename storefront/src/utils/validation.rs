//! Validation of form input before submission
//!
//! Pure and synchronous: nothing here touches the network or mutates its
//! input. Each check returns the user-facing reason inside the matching
//! [`AppError`] variant; the text-to-number coercion itself happens at the
//! submission boundary (the payload builders in [`crate::services::api`]).

use crate::core::error::{AppError, Result};
use std::path::Path;

/// Parse a decimal field ("49.9") into an f64, rejecting non-finite values.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a whole-number field ("3") into an i64. Fractional text is rejected.
pub fn parse_entero(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Validate the category creation form: image, nombre, and descripcion are
/// all required.
pub fn validate_new_categoria(
    imagen: Option<&Path>,
    nombre: &str,
    descripcion: &str,
) -> Result<()> {
    if imagen.is_none() || nombre.trim().is_empty() || descripcion.trim().is_empty() {
        return Err(AppError::MissingField(
            "Todos los campos son obligatorios".to_string(),
        ));
    }

    Ok(())
}

/// Validate the product creation form.
///
/// All fields are required; precio must be a number strictly greater than
/// zero and cantidad a whole number strictly greater than zero.
pub fn validate_new_producto(
    nombre: &str,
    precio: &str,
    cantidad: &str,
    imagen: Option<&Path>,
) -> Result<()> {
    if nombre.trim().is_empty()
        || precio.trim().is_empty()
        || cantidad.trim().is_empty()
        || imagen.is_none()
    {
        return Err(AppError::MissingField(
            "Todos los campos son obligatorios".to_string(),
        ));
    }

    match parse_decimal(precio) {
        Some(n) if n > 0.0 => {}
        _ => {
            return Err(AppError::InvalidNumber(
                "El precio debe ser un número positivo".to_string(),
            ))
        }
    }

    match parse_entero(cantidad) {
        Some(n) if n > 0 => {}
        _ => {
            return Err(AppError::InvalidNumber(
                "La cantidad debe ser un número entero positivo".to_string(),
            ))
        }
    }

    Ok(())
}

/// Validate the product edit form.
///
/// Edit only requires nombre to be non-empty and both numeric fields to
/// parse; positivity is not re-checked here.
pub fn validate_edit_producto(nombre: &str, precio: &str, cantidad: &str) -> Result<()> {
    if nombre.trim().is_empty() {
        return Err(AppError::MissingField(
            "Todos los campos deben estar correctamente llenos.".to_string(),
        ));
    }

    if parse_decimal(precio).is_none() || parse_decimal(cantidad).is_none() {
        return Err(AppError::InvalidNumber(
            "Todos los campos deben estar correctamente llenos.".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn imagen() -> PathBuf {
        PathBuf::from("/tmp/imagen.jpg")
    }

    #[test]
    fn test_new_categoria_requires_all_fields() {
        assert!(validate_new_categoria(Some(&imagen()), "Electrónicos", "Equipos").is_ok());

        assert!(matches!(
            validate_new_categoria(None, "Electrónicos", "Equipos"),
            Err(AppError::MissingField(_))
        ));
        assert!(matches!(
            validate_new_categoria(Some(&imagen()), "   ", "Equipos"),
            Err(AppError::MissingField(_))
        ));
        assert!(matches!(
            validate_new_categoria(Some(&imagen()), "Electrónicos", ""),
            Err(AppError::MissingField(_))
        ));
    }

    #[test]
    fn test_new_producto_requires_all_fields() {
        assert!(validate_new_producto("Mouse", "49.9", "3", Some(&imagen())).is_ok());

        assert!(matches!(
            validate_new_producto("", "49.9", "3", Some(&imagen())),
            Err(AppError::MissingField(_))
        ));
        assert!(matches!(
            validate_new_producto("Mouse", "", "3", Some(&imagen())),
            Err(AppError::MissingField(_))
        ));
        assert!(matches!(
            validate_new_producto("Mouse", "49.9", "", Some(&imagen())),
            Err(AppError::MissingField(_))
        ));
        assert!(matches!(
            validate_new_producto("Mouse", "49.9", "3", None),
            Err(AppError::MissingField(_))
        ));
    }

    #[test]
    fn test_new_producto_precio_must_be_positive_number() {
        for precio in ["-5", "0", "abc", "1/2"] {
            assert!(
                matches!(
                    validate_new_producto("Mouse", precio, "3", Some(&imagen())),
                    Err(AppError::InvalidNumber(ref m)) if m.contains("precio")
                ),
                "precio {precio:?} should be rejected"
            );
        }

        assert!(validate_new_producto("Mouse", "0.01", "3", Some(&imagen())).is_ok());
    }

    #[test]
    fn test_new_producto_cantidad_must_be_positive_integer() {
        for cantidad in ["-1", "0", "3.5", "tres"] {
            assert!(
                matches!(
                    validate_new_producto("Mouse", "49.9", cantidad, Some(&imagen())),
                    Err(AppError::InvalidNumber(ref m)) if m.contains("cantidad")
                ),
                "cantidad {cantidad:?} should be rejected"
            );
        }

        assert!(validate_new_producto("Mouse", "49.9", "1", Some(&imagen())).is_ok());
    }

    #[test]
    fn test_edit_producto_only_checks_numbers_parse() {
        assert!(validate_edit_producto("Mouse", "49.9", "3").is_ok());

        // Positivity is not re-checked on edit
        assert!(validate_edit_producto("Mouse", "-5", "3").is_ok());
        assert!(validate_edit_producto("Mouse", "49.9", "3.5").is_ok());

        assert!(matches!(
            validate_edit_producto("  ", "49.9", "3"),
            Err(AppError::MissingField(_))
        ));
        assert!(matches!(
            validate_edit_producto("Mouse", "caro", "3"),
            Err(AppError::InvalidNumber(_))
        ));
        assert!(matches!(
            validate_edit_producto("Mouse", "49.9", ""),
            Err(AppError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_decimal(" 49.9 "), Some(49.9));
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_entero("3"), Some(3));
        assert_eq!(parse_entero("3.5"), None);
    }
}
