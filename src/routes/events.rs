use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::api::http::HttpApi;
use crate::dto::events::{EventsPageData, EventsQuery};
use crate::dto::list::PageQuery;
use crate::forms::event::EventForm;
use crate::forms::{Panel, SaveTarget};
use crate::models::auth::AuthenticatedAdmin;
use crate::routes::{base_context, insert_save_error, list_location, redirect, render_template};
use crate::services::events as events_service;

const SECTION: &str = "events";

fn page_context(
    flash_messages: &IncomingFlashMessages,
    admin: &AuthenticatedAdmin,
    data: &EventsPageData,
) -> Context {
    let mut context = base_context(flash_messages, Some(admin), SECTION);
    context.insert("data", data);
    context
}

#[get("/events")]
pub async fn show_events(
    admin: AuthenticatedAdmin,
    query: web::Query<EventsQuery>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = events_service::load_events_page(api.get_ref(), &query, None).await;

    let context = page_context(&flash_messages, &admin, &data);
    render_template(&tera, "events/index.html", &context)
}

#[post("/events/save")]
pub async fn save_event(
    admin: AuthenticatedAdmin,
    target: web::Query<SaveTarget>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<EventForm>,
) -> impl Responder {
    let id = target.record_id();

    match events_service::submit_event(api.get_ref(), id.as_ref(), &form).await {
        Ok(()) => {
            let message = if id.is_some() {
                "Event updated."
            } else {
                "Event created."
            };
            FlashMessage::success(message).send();
            redirect(&list_location(SECTION, target.page()))
        }
        Err(err) => {
            log::error!("Failed to save event: {err}");
            let query = EventsQuery {
                page: Some(target.page()),
                ..Default::default()
            };
            let data = events_service::load_events_page(
                api.get_ref(),
                &query,
                Some(Panel::reopen(id, form)),
            )
            .await;

            let mut context = page_context(&flash_messages, &admin, &data);
            insert_save_error(&mut context, &err);
            render_template(&tera, "events/index.html", &context)
        }
    }
}

#[post("/events/{event_id}/delete")]
pub async fn delete_event(
    _admin: AuthenticatedAdmin,
    event_id: web::Path<String>,
    query: web::Query<PageQuery>,
    api: web::Data<HttpApi>,
) -> impl Responder {
    match events_service::delete_event(api.get_ref(), &event_id).await {
        Ok(()) => {
            FlashMessage::success("Event deleted.").send();
        }
        Err(err) => {
            log::error!("Failed to delete event {event_id}: {err}");
            FlashMessage::error("Could not delete the event.").send();
        }
    }

    redirect(&list_location(SECTION, query.page()))
}
