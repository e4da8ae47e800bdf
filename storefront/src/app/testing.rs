//! Test doubles for the screen controllers.
//!
//! `MockCatalog` keeps the collections in memory and records every call so
//! tests can assert on traffic (or the absence of it). The recorders for the
//! platform traits capture notifications and navigation requests.

use crate::app::state::Destination;
use crate::core::error::{AppError, Result};
use crate::core::service::{CatalogService, ImagePicker, Navigator, Notifier};
use crate::services::api::{NuevaCategoria, NuevoProducto};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shared::{Categoria, Producto};
use std::path::PathBuf;
use std::sync::Mutex;

pub(crate) fn categoria(id: &str, nombre: &str) -> Categoria {
    Categoria {
        id: id.to_string(),
        nombre: nombre.to_string(),
        descripcion: "Equipos electrónicos".to_string(),
        imagen: format!("https://cdn.example.com/{id}.jpg"),
        fecha_creacion: Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap(),
    }
}

pub(crate) fn producto(id: &str, nombre: &str) -> Producto {
    Producto {
        id: id.to_string(),
        categoria_id: "cat-7".to_string(),
        nombre: nombre.to_string(),
        precio: 49.9,
        cantidad: 3,
        imagen: format!("https://cdn.example.com/{id}.jpg"),
        fecha_creacion: Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap(),
    }
}

/// In-memory stand-in for the remote catalog.
#[derive(Default)]
pub(crate) struct MockCatalog {
    pub categorias: Mutex<Vec<Categoria>>,
    pub productos: Mutex<Vec<Producto>>,
    /// Fail list operations when set
    pub fail_fetch: Mutex<bool>,
    /// Fail update operations when set
    pub fail_update: Mutex<bool>,
    /// Error to return from create operations, if any
    pub fail_create: Mutex<Option<AppError>>,
    /// Every operation, in call order, e.g. `"delete_categoria:cat-1"`
    pub calls: Mutex<Vec<String>>,
}

impl MockCatalog {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CatalogService for MockCatalog {
    async fn get_categorias(&self) -> Result<Vec<Categoria>> {
        self.record("get_categorias".to_string());
        if *self.fail_fetch.lock().unwrap() {
            return Err(AppError::Fetch("Error al obtener categorías".to_string()));
        }
        Ok(self.categorias.lock().unwrap().clone())
    }

    async fn create_categoria(&self, nueva: NuevaCategoria) -> Result<Categoria> {
        self.record("create_categoria".to_string());
        if let Some(e) = self.fail_create.lock().unwrap().clone() {
            return Err(e);
        }

        let mut categorias = self.categorias.lock().unwrap();
        let creada = Categoria {
            id: format!("cat-{}", categorias.len() + 1),
            nombre: nueva.nombre,
            descripcion: nueva.descripcion,
            imagen: format!("https://cdn.example.com/{}", categorias.len() + 1),
            fecha_creacion: Utc::now(),
        };
        categorias.push(creada.clone());
        Ok(creada)
    }

    async fn delete_categoria(&self, id: &str) -> Result<Categoria> {
        self.record(format!("delete_categoria:{id}"));
        let mut categorias = self.categorias.lock().unwrap();
        match categorias.iter().position(|c| c.id == id) {
            Some(i) => Ok(categorias.remove(i)),
            None => Err(AppError::Fetch("Error al eliminar categoría".to_string())),
        }
    }

    async fn get_productos(&self, categoria_id: &str) -> Result<Vec<Producto>> {
        self.record(format!("get_productos:{categoria_id}"));
        if *self.fail_fetch.lock().unwrap() {
            return Err(AppError::Fetch("Error al obtener productos".to_string()));
        }
        Ok(self
            .productos
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.categoria_id == categoria_id)
            .cloned()
            .collect())
    }

    async fn create_producto(&self, nuevo: NuevoProducto) -> Result<Producto> {
        self.record("create_producto".to_string());
        if let Some(e) = self.fail_create.lock().unwrap().clone() {
            return Err(e);
        }

        let mut productos = self.productos.lock().unwrap();
        let creado = Producto {
            id: format!("p-{}", productos.len() + 1),
            categoria_id: nuevo.categoria_id,
            nombre: nuevo.nombre,
            precio: nuevo.precio,
            cantidad: nuevo.cantidad,
            imagen: format!("https://cdn.example.com/p-{}", productos.len() + 1),
            fecha_creacion: Utc::now(),
        };
        productos.push(creado.clone());
        Ok(creado)
    }

    async fn update_producto(&self, id: &str, producto: &Producto) -> Result<Producto> {
        self.record(format!("update_producto:{id}"));
        if *self.fail_update.lock().unwrap() {
            return Err(AppError::Fetch("Error al actualizar producto".to_string()));
        }

        let mut productos = self.productos.lock().unwrap();
        match productos.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = producto.clone();
                Ok(producto.clone())
            }
            None => Err(AppError::Fetch("Error al actualizar producto".to_string())),
        }
    }

    async fn delete_producto(&self, id: &str) -> Result<Producto> {
        self.record(format!("delete_producto:{id}"));
        let mut productos = self.productos.lock().unwrap();
        match productos.iter().position(|p| p.id == id) {
            Some(i) => Ok(productos.remove(i)),
            None => Err(AppError::Fetch("Error al eliminar producto".to_string())),
        }
    }
}

/// Records every notification; `confirm` answers with `confirm_response`.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
    pub infos: Mutex<Vec<String>>,
    pub confirms: Mutex<Vec<String>>,
    pub confirm_response: Mutex<bool>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    async fn confirm(&self, title: &str, message: &str) -> bool {
        self.confirms
            .lock()
            .unwrap()
            .push(format!("{title}: {message}"));
        *self.confirm_response.lock().unwrap()
    }
}

/// Records navigation requests.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub destinations: Mutex<Vec<Destination>>,
    pub backs: Mutex<usize>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        self.destinations.lock().unwrap().push(destination);
    }

    fn back(&self) {
        *self.backs.lock().unwrap() += 1;
    }
}

/// Image picker returning a preset path, or `None` to simulate cancellation.
#[derive(Default)]
pub(crate) struct StubPicker {
    pub image: Mutex<Option<PathBuf>>,
}

#[async_trait]
impl ImagePicker for StubPicker {
    async fn pick_image(&self) -> Option<PathBuf> {
        self.image.lock().unwrap().clone()
    }
}
