//! # Product Endpoints
//!
//! List, create, update, and delete the products of a category.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use crate::utils::validation::{
    parse_decimal, parse_entero, validate_edit_producto, validate_new_producto,
};
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use shared::{ErrorResponse, Producto};
use std::path::{Path, PathBuf};

/// Payload for creating a product.
///
/// Built through [`NuevoProducto::from_form`]: by the time an instance
/// exists, precio and cantidad are numbers, never raw text.
#[derive(Debug, Clone)]
pub struct NuevoProducto {
    pub nombre: String,
    pub precio: f64,
    pub cantidad: i64,
    pub categoria_id: String,
    /// Local image file selected by the user
    pub imagen: PathBuf,
}

impl NuevoProducto {
    /// Validate raw form fields and assemble the payload.
    pub fn from_form(
        nombre: &str,
        precio: &str,
        cantidad: &str,
        imagen: Option<&Path>,
        categoria_id: &str,
    ) -> Result<Self> {
        validate_new_producto(nombre, precio, cantidad, imagen)?;

        let imagen = imagen.map(Path::to_path_buf).ok_or_else(|| {
            AppError::MissingField("Todos los campos son obligatorios".to_string())
        })?;
        let precio = parse_decimal(precio).ok_or_else(|| {
            AppError::InvalidNumber("El precio debe ser un número positivo".to_string())
        })?;
        let cantidad = parse_entero(cantidad).ok_or_else(|| {
            AppError::InvalidNumber("La cantidad debe ser un número entero positivo".to_string())
        })?;

        Ok(Self {
            nombre: nombre.trim().to_string(),
            precio,
            cantidad,
            categoria_id: categoria_id.to_string(),
            imagen,
        })
    }
}

/// Build the full update body from an edit draft.
///
/// Only nombre, precio, and cantidad are mutable; everything else is carried
/// over from the original entity. A fractional cantidad is truncated toward
/// zero.
pub fn build_update(
    original: &Producto,
    nombre: &str,
    precio: &str,
    cantidad: &str,
) -> Result<Producto> {
    validate_edit_producto(nombre, precio, cantidad)?;

    let precio = parse_decimal(precio).ok_or_else(|| {
        AppError::InvalidNumber("Todos los campos deben estar correctamente llenos.".to_string())
    })?;
    let cantidad = parse_decimal(cantidad).ok_or_else(|| {
        AppError::InvalidNumber("Todos los campos deben estar correctamente llenos.".to_string())
    })? as i64;

    Ok(Producto {
        nombre: nombre.trim().to_string(),
        precio,
        cantidad,
        ..original.clone()
    })
}

/// List the products of one category.
#[tracing::instrument(skip(client))]
pub async fn get_by_categoria(client: &ApiClient, categoria_id: &str) -> Result<Vec<Producto>> {
    let url = format!("{}/productos/{}", client.base_url(), categoria_id);
    let start = std::time::Instant::now();

    tracing::debug!("Fetching productos");

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Producto fetch network error");
        AppError::Fetch(format!("Error de red: {}", e))
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let productos = response.json::<Vec<Producto>>().await.map_err(|e| {
            tracing::error!(error = %e, "Producto response parse error");
            AppError::Fetch(format!("Respuesta inválida: {}", e))
        })?;

        tracing::debug!(
            count = productos.len(),
            duration_ms = duration.as_millis(),
            "Productos fetched successfully"
        );
        Ok(productos)
    } else {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Producto fetch failed"
        );
        Err(AppError::Fetch("Error al obtener productos".to_string()))
    }
}

/// Create a product.
///
/// Multipart body: the image bytes as a file part, the entity fields as text
/// parts (including the owning `categoriaId`).
#[tracing::instrument(skip(client, nuevo), fields(nombre = %nuevo.nombre, categoria_id = %nuevo.categoria_id))]
pub async fn create(client: &ApiClient, nuevo: NuevoProducto) -> Result<Producto> {
    let url = format!("{}/productos", client.base_url());
    let start = std::time::Instant::now();

    let imagen = tokio::fs::read(&nuevo.imagen).await.map_err(|e| {
        tracing::error!(error = %e, imagen = %nuevo.imagen.display(), "Image read error");
        AppError::Fetch(format!("No se pudo leer la imagen: {}", e))
    })?;

    let part = Part::bytes(imagen)
        .file_name(format!("producto-{}.jpg", Utc::now().timestamp_millis()))
        .mime_str("image/jpeg")
        .map_err(|e| AppError::Fetch(format!("Error de red: {}", e)))?;

    let form = Form::new()
        .part("imagen", part)
        .text("nombre", nuevo.nombre)
        .text("precio", nuevo.precio.to_string())
        .text("cantidad", nuevo.cantidad.to_string())
        .text("categoriaId", nuevo.categoria_id);

    let response = client
        .client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Producto create network error");
            AppError::Fetch(format!("Error de red: {}", e))
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let producto = response.json::<Producto>().await.map_err(|e| {
            tracing::error!(error = %e, "Producto create response parse error");
            AppError::Fetch(format!("Respuesta inválida: {}", e))
        })?;

        tracing::info!(
            id = %producto.id,
            duration_ms = duration.as_millis(),
            "Producto created"
        );
        Ok(producto)
    } else {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Producto create rejected"
        );
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(AppError::Validation(body.error)),
            Err(_) => Err(AppError::Fetch("Error al crear producto".to_string())),
        }
    }
}

/// Update a product with a full JSON body. No image re-upload.
#[tracing::instrument(skip(client, producto))]
pub async fn update(client: &ApiClient, id: &str, producto: &Producto) -> Result<Producto> {
    let url = format!("{}/productos/{}", client.base_url(), id);

    let response = client
        .client
        .put(&url)
        .json(producto)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Producto update network error");
            AppError::Fetch(format!("Error de red: {}", e))
        })?;

    let status = response.status();

    if status.is_success() {
        response.json::<Producto>().await.map_err(|e| {
            tracing::error!(error = %e, "Producto update response parse error");
            AppError::Fetch(format!("Respuesta inválida: {}", e))
        })
    } else {
        tracing::warn!(status = status.as_u16(), "Producto update rejected");
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(AppError::Validation(body.error)),
            Err(_) => Err(AppError::Fetch("Error al actualizar producto".to_string())),
        }
    }
}

/// Delete a product by id.
#[tracing::instrument(skip(client))]
pub async fn delete(client: &ApiClient, id: &str) -> Result<Producto> {
    let url = format!("{}/productos/{}", client.base_url(), id);

    let response = client.client.delete(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Producto delete network error");
        AppError::Fetch(format!("Error de red: {}", e))
    })?;

    let status = response.status();

    if status.is_success() {
        response.json::<Producto>().await.map_err(|e| {
            tracing::error!(error = %e, "Producto delete response parse error");
            AppError::Fetch(format!("Respuesta inválida: {}", e))
        })
    } else {
        tracing::warn!(status = status.as_u16(), "Producto delete failed");
        Err(AppError::Fetch("Error al eliminar producto".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn producto() -> Producto {
        Producto {
            id: "p-1".to_string(),
            categoria_id: "cat-7".to_string(),
            nombre: "Mouse".to_string(),
            precio: 49.9,
            cantidad: 3,
            imagen: "https://cdn.example.com/p-1.jpg".to_string(),
            fecha_creacion: chrono::Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_from_form_coerces_numbers() {
        let imagen = PathBuf::from("/tmp/producto.jpg");
        let nuevo =
            NuevoProducto::from_form(" Mouse ", "49.9", "3", Some(&imagen), "cat-7").unwrap();

        assert_eq!(nuevo.nombre, "Mouse");
        assert_eq!(nuevo.precio, 49.9);
        assert_eq!(nuevo.cantidad, 3);
        assert_eq!(nuevo.categoria_id, "cat-7");
    }

    #[test]
    fn test_from_form_rejects_invalid_numbers() {
        let imagen = PathBuf::from("/tmp/producto.jpg");

        assert!(matches!(
            NuevoProducto::from_form("Mouse", "-5", "3", Some(&imagen), "cat-7"),
            Err(AppError::InvalidNumber(_))
        ));
        assert!(matches!(
            NuevoProducto::from_form("Mouse", "49.9", "3.5", Some(&imagen), "cat-7"),
            Err(AppError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_build_update_replaces_mutable_fields_only() {
        let original = producto();
        let actualizado = build_update(&original, "Mouse Pro", "59.9", "5").unwrap();

        assert_eq!(actualizado.nombre, "Mouse Pro");
        assert_eq!(actualizado.precio, 59.9);
        assert_eq!(actualizado.cantidad, 5);
        assert_eq!(actualizado.id, original.id);
        assert_eq!(actualizado.categoria_id, original.categoria_id);
        assert_eq!(actualizado.imagen, original.imagen);
        assert_eq!(actualizado.fecha_creacion, original.fecha_creacion);
    }

    #[test]
    fn test_build_update_truncates_fractional_cantidad() {
        let actualizado = build_update(&producto(), "Mouse", "49.9", "3.9").unwrap();
        assert_eq!(actualizado.cantidad, 3);
    }

    #[test]
    fn test_build_update_rejects_unparseable_fields() {
        assert!(matches!(
            build_update(&producto(), "Mouse", "caro", "3"),
            Err(AppError::InvalidNumber(_))
        ));
        assert!(matches!(
            build_update(&producto(), "", "49.9", "3"),
            Err(AppError::MissingField(_))
        ));
    }
}
