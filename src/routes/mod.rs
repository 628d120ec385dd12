//! HTTP routes and the small rendering helpers they share.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, http::header::ContentType};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

pub mod editor;
pub mod main;
pub mod properties;

/// Maps a flash message level to the CSS alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context pre-populated with flash alerts and the current page marker.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Renders a template with the given status, degrading to a bare 500 when
/// the template itself fails.
pub fn render_template_status(
    tera: &Tera,
    name: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    render_template_status(tera, name, context, StatusCode::OK)
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
