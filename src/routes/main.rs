use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::HttpBackend;
use crate::content::ContentOverlay;
use crate::routes::{base_context, render_template};
use crate::services::landing as landing_service;

#[get("/")]
pub async fn show_index(
    overlay: web::Data<ContentOverlay<HttpBackend>>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let nav = landing_service::load_nav(overlay.get_ref()).await;
    let content = landing_service::load_landing_page(overlay.get_ref()).await;

    let mut context = base_context(&flash_messages, "index");
    context.insert("nav", &nav);
    context.insert("content", &content);

    render_template(&tera, "main/index.html", &context)
}
