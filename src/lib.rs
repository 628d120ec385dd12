use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::backend::HttpBackend;
use crate::content::ContentOverlay;
use crate::models::config::ServerConfig;
use crate::routes::editor::{save_editor, show_editor};
use crate::routes::main::show_index;
use crate::routes::properties::{show_properties, show_property};

pub mod backend;
pub mod content;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod routes;
pub mod services;

/// Prefix under which all editable homepage copy lives in the backend store.
pub const CONTENT_PREFIX: &str = "homepage.";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let backend = HttpBackend::new(server_config.backend_url.clone());
    if !backend.is_configured() {
        log::warn!("backend_url is not set; serving fallback copy and empty listings");
    }

    // Shared across workers: the overlay performs its one automatic content
    // load on first use and then serves from its cache.
    let overlay = web::Data::new(ContentOverlay::new(backend.clone(), CONTENT_PREFIX));

    // Key and store for editor flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let assets_dir = server_config.assets_dir.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", assets_dir.clone()))
            .service(show_index)
            .service(show_properties)
            .service(show_property)
            .service(show_editor)
            .service(save_editor)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(backend.clone()))
            .app_data(overlay.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
