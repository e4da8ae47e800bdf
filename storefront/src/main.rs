//! # Storefront Console
//!
//! Interactive console front-end for the storefront catalog. Drives the
//! screen controllers from a prompt loop and backs the platform services
//! (notifications, navigation, image selection) with stdin/stdout; all
//! business behavior lives in the library.
//!
//! ## Usage
//!
//! ```bash
//! STOREFRONT_API_URL=http://192.168.1.102:3000/api cargo run --bin storefront
//! ```

use async_trait::async_trait;
use shared::utils::{format_fecha, format_precio};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use storefront::app::state::Destination;
use storefront::app::{AddCategoriaForm, AddProductoForm, CategoriasScreen, ProductosScreen};
use storefront::config::ApiConfig;
use storefront::core::service::{CatalogService, ImagePicker, Navigator, Notifier};
use storefront::services::api::ApiClient;
use tracing_subscriber::EnvFilter;

/// Navigation request queued by a controller for the prompt loop to act on.
enum NavRequest {
    Push(Destination),
    Back,
}

/// Navigator that queues requests instead of switching screens itself.
#[derive(Default)]
struct ConsoleNavigator {
    pending: Mutex<Vec<NavRequest>>,
}

impl ConsoleNavigator {
    fn take(&self) -> Option<NavRequest> {
        let mut pending = self.pending.lock().unwrap();
        if pending.is_empty() {
            None
        } else {
            Some(pending.remove(0))
        }
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, destination: Destination) {
        self.pending
            .lock()
            .unwrap()
            .push(NavRequest::Push(destination));
    }

    fn back(&self) {
        self.pending.lock().unwrap().push(NavRequest::Back);
    }
}

/// Notifier that prints toasts and asks confirmation questions on stdin.
struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("[Éxito] {message}");
    }

    fn error(&self, message: &str) {
        println!("[Error] {message}");
    }

    fn info(&self, message: &str) {
        println!("[Aviso] {message}");
    }

    async fn confirm(&self, title: &str, message: &str) -> bool {
        println!("{title}");
        let respuesta = prompt(&format!("{message} (s/n): ")).unwrap_or_default();
        matches!(respuesta.to_lowercase().as_str(), "s" | "si" | "sí")
    }
}

/// Image "picker" that asks for a file path; an empty line cancels.
struct ConsolePicker;

#[async_trait]
impl ImagePicker for ConsolePicker {
    async fn pick_image(&self) -> Option<PathBuf> {
        let ruta = prompt("Ruta de la imagen (Enter para cancelar): ").unwrap_or_default();
        if ruta.is_empty() {
            None
        } else {
            Some(PathBuf::from(ruta))
        }
    }
}

struct Deps {
    api: Arc<dyn CatalogService>,
    navigator: Arc<ConsoleNavigator>,
    notifier: Arc<ConsoleNotifier>,
    picker: Arc<ConsolePicker>,
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse a 1-based list index typed by the user.
fn parse_index(text: Option<&str>) -> Option<usize> {
    text?.parse::<usize>().ok()?.checked_sub(1)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("storefront=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::from_env().map_err(anyhow::Error::msg)?;
    tracing::info!(base_url = %config.base_url, "Starting storefront console");

    let deps = Deps {
        api: Arc::new(ApiClient::new(config)),
        navigator: Arc::new(ConsoleNavigator::default()),
        notifier: Arc::new(ConsoleNotifier),
        picker: Arc::new(ConsolePicker),
    };

    categorias_screen(&deps).await
}

async fn categorias_screen(deps: &Deps) -> anyhow::Result<()> {
    let mut screen = CategoriasScreen::new(
        deps.api.clone(),
        deps.navigator.clone(),
        deps.notifier.clone(),
    );
    screen.on_mount().await;

    loop {
        println!("\n== {} ==", Destination::Categorias.title());
        if screen.categorias().is_empty() {
            println!("No hay categorías disponibles");
        }
        for (i, c) in screen.categorias().iter().enumerate() {
            println!(
                "{:>2}. {} - {} (Creado: {})",
                i + 1,
                c.nombre,
                c.descripcion,
                format_fecha(&c.fecha_creacion)
            );
        }

        let entrada = prompt("\n[n] ver productos  [a] agregar  [e n] eliminar  [r] refrescar  [q] salir\n> ")?;
        let mut partes = entrada.split_whitespace();
        match partes.next() {
            None => {}
            Some("q") => break,
            Some("r") => screen.refresh().await,
            Some("a") => {
                screen.open_add();
                if let Some(NavRequest::Push(Destination::AddCategoria)) = deps.navigator.take() {
                    add_categoria_screen(deps).await?;
                    screen.on_focus().await;
                }
            }
            Some("e") => {
                if let Some(i) = parse_index(partes.next()) {
                    if let Some(c) = screen.categorias().get(i) {
                        let id = c.id.clone();
                        screen.delete(&id).await;
                    }
                }
            }
            Some(otro) => {
                if let Some(c) = parse_index(Some(otro))
                    .and_then(|i| screen.categorias().get(i).cloned())
                {
                    screen.open_categoria(&c);
                    if let Some(NavRequest::Push(Destination::Productos {
                        categoria_id,
                        categoria_nombre,
                    })) = deps.navigator.take()
                    {
                        productos_screen(deps, categoria_id, categoria_nombre).await?;
                        screen.on_focus().await;
                    }
                }
            }
        }
    }

    Ok(())
}

async fn productos_screen(
    deps: &Deps,
    categoria_id: String,
    categoria_nombre: String,
) -> anyhow::Result<()> {
    let mut screen = ProductosScreen::new(
        deps.api.clone(),
        deps.navigator.clone(),
        deps.notifier.clone(),
        categoria_id,
        categoria_nombre,
    );
    screen.on_mount().await;

    loop {
        println!("\n== {} ==", screen.title());
        if screen.productos().is_empty() {
            println!("No hay productos disponibles");
        }
        for (i, p) in screen.productos().iter().enumerate() {
            println!(
                "{:>2}. {} - Precio: {} - Cantidad: {} (Agregado: {})",
                i + 1,
                p.nombre,
                format_precio(p.precio),
                p.cantidad,
                format_fecha(&p.fecha_creacion)
            );
        }

        let entrada = prompt("\n[a] agregar  [e n] editar  [x n] eliminar  [r] refrescar  [v] volver\n> ")?;
        let mut partes = entrada.split_whitespace();
        match partes.next() {
            None => {}
            Some("v") => break,
            Some("r") => screen.refresh().await,
            Some("a") => {
                screen.open_add();
                if let Some(NavRequest::Push(Destination::AddProducto {
                    categoria_id,
                    categoria_nombre,
                })) = deps.navigator.take()
                {
                    add_producto_screen(deps, categoria_id, categoria_nombre).await?;
                    screen.on_focus().await;
                }
            }
            Some("e") => {
                if let Some(id) = parse_index(partes.next())
                    .and_then(|i| screen.productos().get(i))
                    .map(|p| p.id.clone())
                {
                    screen.begin_edit(&id);
                    if let Some(draft) = screen.editing_mut() {
                        println!("Editar Producto (Enter conserva el valor actual)");
                        let nombre = prompt(&format!("Nombre [{}]: ", draft.nombre))?;
                        if !nombre.is_empty() {
                            draft.nombre = nombre;
                        }
                        let precio = prompt(&format!("Precio [{}]: ", draft.precio))?;
                        if !precio.is_empty() {
                            draft.precio = precio;
                        }
                        let cantidad = prompt(&format!("Cantidad [{}]: ", draft.cantidad))?;
                        if !cantidad.is_empty() {
                            draft.cantidad = cantidad;
                        }
                    }
                    screen.save_edit().await;
                    screen.cancel_edit();
                }
            }
            Some("x") => {
                if let Some(id) = parse_index(partes.next())
                    .and_then(|i| screen.productos().get(i))
                    .map(|p| p.id.clone())
                {
                    screen.delete(&id).await;
                }
            }
            Some(_) => {}
        }
    }

    Ok(())
}

async fn add_categoria_screen(deps: &Deps) -> anyhow::Result<()> {
    let mut form = AddCategoriaForm::new(
        deps.api.clone(),
        deps.navigator.clone(),
        deps.notifier.clone(),
        deps.picker.clone(),
    );

    loop {
        println!("\n== {} ==", Destination::AddCategoria.title());
        form.nombre = prompt("Nombre de la categoría: ")?;
        form.descripcion = prompt("Descripción: ")?;
        form.pick_image().await;
        form.submit().await;

        if matches!(deps.navigator.take(), Some(NavRequest::Back)) {
            return Ok(());
        }
        let otra = prompt("¿Intentar de nuevo? (s/n): ")?;
        if !matches!(otra.to_lowercase().as_str(), "s" | "si" | "sí") {
            return Ok(());
        }
    }
}

async fn add_producto_screen(
    deps: &Deps,
    categoria_id: String,
    categoria_nombre: String,
) -> anyhow::Result<()> {
    let destino = Destination::AddProducto {
        categoria_id: categoria_id.clone(),
        categoria_nombre: categoria_nombre.clone(),
    };
    let mut form = AddProductoForm::new(
        deps.api.clone(),
        deps.navigator.clone(),
        deps.notifier.clone(),
        deps.picker.clone(),
        categoria_id,
        categoria_nombre,
    );

    loop {
        println!("\n== {} ==", destino.title());
        println!("Categoría: {}", form.categoria_nombre);
        form.nombre = prompt("Nombre del producto: ")?;
        form.precio = prompt("Precio: ")?;
        form.cantidad = prompt("Cantidad: ")?;
        form.pick_image().await;
        form.submit().await;

        if matches!(deps.navigator.take(), Some(NavRequest::Back)) {
            return Ok(());
        }
        let otra = prompt("¿Intentar de nuevo? (s/n): ")?;
        if !matches!(otra.to_lowercase().as_str(), "s" | "si" | "sí") {
            return Ok(());
        }
    }
}
