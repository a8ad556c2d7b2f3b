use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::api::http::HttpApi;
use crate::dto::agenda_items::AgendaItemsPageData;
use crate::dto::list::PageQuery;
use crate::forms::agenda_item::AgendaItemForm;
use crate::forms::{Panel, SaveTarget};
use crate::models::auth::AuthenticatedAdmin;
use crate::routes::{base_context, insert_save_error, list_location, redirect, render_template};
use crate::services::agenda_items as agenda_items_service;

const SECTION: &str = "agenda-items";

fn page_context(
    flash_messages: &IncomingFlashMessages,
    admin: &AuthenticatedAdmin,
    data: &AgendaItemsPageData,
) -> Context {
    let mut context = base_context(flash_messages, Some(admin), SECTION);
    context.insert("data", data);
    context
}

#[get("/agenda-items")]
pub async fn show_agenda_items(
    admin: AuthenticatedAdmin,
    query: web::Query<PageQuery>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = agenda_items_service::load_agenda_items_page(api.get_ref(), &query, None).await;

    let context = page_context(&flash_messages, &admin, &data);
    render_template(&tera, "agenda_items/index.html", &context)
}

#[post("/agenda-items/save")]
pub async fn save_agenda_item(
    admin: AuthenticatedAdmin,
    target: web::Query<SaveTarget>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AgendaItemForm>,
) -> impl Responder {
    let id = target.record_id();

    match agenda_items_service::submit_agenda_item(api.get_ref(), id.as_ref(), &form).await {
        Ok(()) => {
            let message = if id.is_some() {
                "Agenda item updated."
            } else {
                "Agenda item added."
            };
            FlashMessage::success(message).send();
            redirect(&list_location(SECTION, target.page()))
        }
        Err(err) => {
            log::error!("Failed to save agenda item: {err}");
            let query = PageQuery {
                page: Some(target.page()),
                ..Default::default()
            };
            let data = agenda_items_service::load_agenda_items_page(
                api.get_ref(),
                &query,
                Some(Panel::reopen(id, form)),
            )
            .await;

            let mut context = page_context(&flash_messages, &admin, &data);
            insert_save_error(&mut context, &err);
            render_template(&tera, "agenda_items/index.html", &context)
        }
    }
}

#[post("/agenda-items/{item_id}/delete")]
pub async fn delete_agenda_item(
    _admin: AuthenticatedAdmin,
    item_id: web::Path<String>,
    query: web::Query<PageQuery>,
    api: web::Data<HttpApi>,
) -> impl Responder {
    match agenda_items_service::delete_agenda_item(api.get_ref(), &item_id).await {
        Ok(()) => {
            FlashMessage::success("Agenda item deleted.").send();
        }
        Err(err) => {
            log::error!("Failed to delete agenda item {item_id}: {err}");
            FlashMessage::error("Could not delete the agenda item.").send();
        }
    }

    redirect(&list_location(SECTION, query.page()))
}
