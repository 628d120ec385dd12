//! Listings grid and property detail routes.

use actix_web::http::StatusCode;
use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::HttpBackend;
use crate::content::ContentOverlay;
use crate::domain::property::PropertyType;
use crate::dto::properties::PropertyCard;
use crate::forms::properties::FilterCriteria;
use crate::routes::{base_context, render_template, render_template_status};
use crate::services::landing as landing_service;
use crate::services::properties as properties_service;
use crate::services::ServiceError;

#[get("/properti")]
pub async fn show_properties(
    params: web::Query<FilterCriteria>,
    backend: web::Data<HttpBackend>,
    overlay: web::Data<ContentOverlay<HttpBackend>>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let filters = params.into_inner();

    let mut context = base_context(&flash_messages, "properties");
    context.insert("nav", &landing_service::load_nav(overlay.get_ref()).await);
    context.insert("type_options", &type_options());

    match properties_service::load_properties_page(backend.get_ref(), filters.clone()).await {
        Ok(page) => {
            context.insert("filters", &page.filters);
            context.insert("query_string", &page.query_string);
            context.insert("properties", &page.properties);
            render_template(&tera, "properties/index.html", &context)
        }
        Err(_) => {
            // The error is already logged; the view degrades to an inline
            // message over an empty grid.
            context.insert("filters", &filters);
            context.insert("query_string", &filters.to_query_string());
            context.insert("properties", &Vec::<PropertyCard>::new());
            context.insert("error", "Gagal memuat data");
            render_template_status(
                &tera,
                "properties/index.html",
                &context,
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

#[get("/properti/{id}")]
pub async fn show_property(
    path: web::Path<String>,
    backend: web::Data<HttpBackend>,
    overlay: web::Data<ContentOverlay<HttpBackend>>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = path.into_inner();

    let mut context = base_context(&flash_messages, "properties");
    context.insert("nav", &landing_service::load_nav(overlay.get_ref()).await);

    match properties_service::load_property_page(backend.get_ref(), &id).await {
        Ok(page) => {
            context.insert("property", &page);
            render_template(&tera, "properties/detail.html", &context)
        }
        Err(ServiceError::NotFound) => {
            context.insert("error", "Properti tidak ditemukan.");
            render_template_status(
                &tera,
                "properties/detail.html",
                &context,
                StatusCode::NOT_FOUND,
            )
        }
        Err(_) => {
            context.insert("error", "Gagal memuat detail properti");
            render_template_status(
                &tera,
                "properties/detail.html",
                &context,
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

/// Options for the type filter select, first entry meaning "no filter".
fn type_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "Semua Tipe".to_string())];
    options.extend(
        PropertyType::ALL
            .iter()
            .map(|pt| (pt.as_str().to_string(), pt.label().to_string())),
    );
    options
}
