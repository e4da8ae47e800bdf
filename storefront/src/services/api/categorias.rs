//! # Category Endpoints
//!
//! List, create, and delete product categories.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use crate::utils::validation::validate_new_categoria;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use shared::{Categoria, ErrorResponse};
use std::path::{Path, PathBuf};

/// Payload for creating a category.
///
/// Built through [`NuevaCategoria::from_form`], so an instance always holds
/// trimmed, validated fields. The image travels as a multipart file part.
#[derive(Debug, Clone)]
pub struct NuevaCategoria {
    pub nombre: String,
    pub descripcion: String,
    /// Local image file selected by the user
    pub imagen: PathBuf,
}

impl NuevaCategoria {
    /// Validate raw form fields and assemble the payload.
    pub fn from_form(imagen: Option<&Path>, nombre: &str, descripcion: &str) -> Result<Self> {
        validate_new_categoria(imagen, nombre, descripcion)?;

        let imagen = imagen.map(Path::to_path_buf).ok_or_else(|| {
            AppError::MissingField("Todos los campos son obligatorios".to_string())
        })?;

        Ok(Self {
            nombre: nombre.trim().to_string(),
            descripcion: descripcion.trim().to_string(),
            imagen,
        })
    }
}

/// List all categories.
#[tracing::instrument(skip(client))]
pub async fn get_all(client: &ApiClient) -> Result<Vec<Categoria>> {
    let url = format!("{}/categorias", client.base_url());
    let start = std::time::Instant::now();

    tracing::debug!("Fetching categorias");

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Categoria fetch network error");
        AppError::Fetch(format!("Error de red: {}", e))
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let categorias = response.json::<Vec<Categoria>>().await.map_err(|e| {
            tracing::error!(error = %e, "Categoria response parse error");
            AppError::Fetch(format!("Respuesta inválida: {}", e))
        })?;

        tracing::debug!(
            count = categorias.len(),
            duration_ms = duration.as_millis(),
            "Categorias fetched successfully"
        );
        Ok(categorias)
    } else {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Categoria fetch failed"
        );
        Err(AppError::Fetch("Error al obtener categorías".to_string()))
    }
}

/// Create a category.
///
/// The body is multipart form data because it carries the image bytes; the
/// remaining fields travel as text parts.
#[tracing::instrument(skip(client, nueva), fields(nombre = %nueva.nombre))]
pub async fn create(client: &ApiClient, nueva: NuevaCategoria) -> Result<Categoria> {
    let url = format!("{}/categorias", client.base_url());
    let start = std::time::Instant::now();

    let imagen = tokio::fs::read(&nueva.imagen).await.map_err(|e| {
        tracing::error!(error = %e, imagen = %nueva.imagen.display(), "Image read error");
        AppError::Fetch(format!("No se pudo leer la imagen: {}", e))
    })?;

    let part = Part::bytes(imagen)
        .file_name(format!("imagen-{}.jpg", Utc::now().timestamp_millis()))
        .mime_str("image/jpeg")
        .map_err(|e| AppError::Fetch(format!("Error de red: {}", e)))?;

    let form = Form::new()
        .part("imagen", part)
        .text("nombre", nueva.nombre)
        .text("descripcion", nueva.descripcion);

    let response = client
        .client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Categoria create network error");
            AppError::Fetch(format!("Error de red: {}", e))
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let categoria = response.json::<Categoria>().await.map_err(|e| {
            tracing::error!(error = %e, "Categoria create response parse error");
            AppError::Fetch(format!("Respuesta inválida: {}", e))
        })?;

        tracing::info!(
            id = %categoria.id,
            duration_ms = duration.as_millis(),
            "Categoria created"
        );
        Ok(categoria)
    } else {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Categoria create rejected"
        );
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(AppError::Validation(body.error)),
            Err(_) => Err(AppError::Fetch("Error al crear categoría".to_string())),
        }
    }
}

/// Delete a category by id.
#[tracing::instrument(skip(client))]
pub async fn delete(client: &ApiClient, id: &str) -> Result<Categoria> {
    let url = format!("{}/categorias/{}", client.base_url(), id);

    let response = client.client.delete(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Categoria delete network error");
        AppError::Fetch(format!("Error de red: {}", e))
    })?;

    let status = response.status();

    if status.is_success() {
        response.json::<Categoria>().await.map_err(|e| {
            tracing::error!(error = %e, "Categoria delete response parse error");
            AppError::Fetch(format!("Respuesta inválida: {}", e))
        })
    } else {
        tracing::warn!(status = status.as_u16(), "Categoria delete failed");
        Err(AppError::Fetch("Error al eliminar categoría".to_string()))
    }
}
