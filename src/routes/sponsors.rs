use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::api::http::HttpApi;
use crate::dto::list::PageQuery;
use crate::dto::sponsors::SponsorsPageData;
use crate::forms::sponsor::SponsorForm;
use crate::forms::{Panel, SaveTarget};
use crate::models::auth::AuthenticatedAdmin;
use crate::routes::{base_context, insert_save_error, list_location, redirect, render_template};
use crate::services::sponsors as sponsors_service;

const SECTION: &str = "sponsors";

fn page_context(
    flash_messages: &IncomingFlashMessages,
    admin: &AuthenticatedAdmin,
    data: &SponsorsPageData,
) -> Context {
    let mut context = base_context(flash_messages, Some(admin), SECTION);
    context.insert("data", data);
    context
}

#[get("/sponsors")]
pub async fn show_sponsors(
    admin: AuthenticatedAdmin,
    query: web::Query<PageQuery>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = sponsors_service::load_sponsors_page(api.get_ref(), &query, None).await;

    let context = page_context(&flash_messages, &admin, &data);
    render_template(&tera, "sponsors/index.html", &context)
}

#[post("/sponsors/save")]
pub async fn save_sponsor(
    admin: AuthenticatedAdmin,
    target: web::Query<SaveTarget>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<SponsorForm>,
) -> impl Responder {
    let id = target.record_id();

    match sponsors_service::submit_sponsor(api.get_ref(), id.as_ref(), &form).await {
        Ok(()) => {
            let message = if id.is_some() {
                "Sponsor updated."
            } else {
                "Sponsor added."
            };
            FlashMessage::success(message).send();
            redirect(&list_location(SECTION, target.page()))
        }
        Err(err) => {
            log::error!("Failed to save sponsor: {err}");
            let query = PageQuery {
                page: Some(target.page()),
                ..Default::default()
            };
            let data = sponsors_service::load_sponsors_page(
                api.get_ref(),
                &query,
                Some(Panel::reopen(id, form)),
            )
            .await;

            let mut context = page_context(&flash_messages, &admin, &data);
            insert_save_error(&mut context, &err);
            render_template(&tera, "sponsors/index.html", &context)
        }
    }
}

#[post("/sponsors/{sponsor_id}/delete")]
pub async fn delete_sponsor(
    _admin: AuthenticatedAdmin,
    sponsor_id: web::Path<String>,
    query: web::Query<PageQuery>,
    api: web::Data<HttpApi>,
) -> impl Responder {
    match sponsors_service::delete_sponsor(api.get_ref(), &sponsor_id).await {
        Ok(()) => {
            FlashMessage::success("Sponsor deleted.").send();
        }
        Err(err) => {
            log::error!("Failed to delete sponsor {sponsor_id}: {err}");
            FlashMessage::error("Could not delete the sponsor.").send();
        }
    }

    redirect(&list_location(SECTION, query.page()))
}
