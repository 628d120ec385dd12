//! Content editor routes.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::HttpBackend;
use crate::content::ContentOverlay;
use crate::forms::editor::EditorForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::editor as editor_service;
use crate::services::editor::SavePolicy;
use crate::services::landing as landing_service;

#[get("/edit")]
pub async fn show_editor(
    overlay: web::Data<ContentOverlay<HttpBackend>>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = editor_service::load_editor_page(overlay.get_ref()).await;

    let mut context = base_context(&flash_messages, "editor");
    context.insert("nav", &landing_service::load_nav(overlay.get_ref()).await);
    context.insert("fields", &page.fields);

    render_template(&tera, "editor/index.html", &context)
}

#[post("/edit")]
pub async fn save_editor(
    overlay: web::Data<ContentOverlay<HttpBackend>>,
    web::Form(form): web::Form<EditorForm>,
) -> impl Responder {
    let entries = match form.into_entries() {
        Ok(entries) => entries,
        Err(err) => {
            FlashMessage::error(format!("Formulir tidak valid: {err}")).send();
            return redirect("/edit");
        }
    };

    let report = editor_service::save_content(overlay.get_ref(), entries, SavePolicy::AbortOnFirst).await;

    match report.first_failure() {
        None => {
            FlashMessage::success("Tersimpan!").send();
        }
        Some((key, message)) => {
            FlashMessage::error(format!("Gagal menyimpan konten ({key}): {message}")).send();
        }
    }

    redirect("/edit")
}
