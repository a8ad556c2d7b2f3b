use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::api::http::HttpApi;
use crate::dto::attendees::AttendeesPageData;
use crate::dto::list::PageQuery;
use crate::forms::attendee::AttendeeForm;
use crate::forms::{Panel, SaveTarget};
use crate::models::auth::AuthenticatedAdmin;
use crate::routes::{base_context, insert_save_error, list_location, redirect, render_template};
use crate::services::attendees as attendees_service;

const SECTION: &str = "attendees";

fn page_context(
    flash_messages: &IncomingFlashMessages,
    admin: &AuthenticatedAdmin,
    data: &AttendeesPageData,
) -> Context {
    let mut context = base_context(flash_messages, Some(admin), SECTION);
    context.insert("data", data);
    context
}

#[get("/attendees")]
pub async fn show_attendees(
    admin: AuthenticatedAdmin,
    query: web::Query<PageQuery>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = attendees_service::load_attendees_page(api.get_ref(), &query, None).await;

    let context = page_context(&flash_messages, &admin, &data);
    render_template(&tera, "attendees/index.html", &context)
}

#[post("/attendees/save")]
pub async fn save_attendee(
    admin: AuthenticatedAdmin,
    target: web::Query<SaveTarget>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AttendeeForm>,
) -> impl Responder {
    let id = target.record_id();

    match attendees_service::submit_attendee(api.get_ref(), id.as_ref(), &form).await {
        Ok(()) => {
            let message = if id.is_some() {
                "Attendee updated."
            } else {
                "Attendee registered."
            };
            FlashMessage::success(message).send();
            redirect(&list_location(SECTION, target.page()))
        }
        Err(err) => {
            log::error!("Failed to save attendee: {err}");
            let query = PageQuery {
                page: Some(target.page()),
                ..Default::default()
            };
            let data = attendees_service::load_attendees_page(
                api.get_ref(),
                &query,
                Some(Panel::reopen(id, form)),
            )
            .await;

            let mut context = page_context(&flash_messages, &admin, &data);
            insert_save_error(&mut context, &err);
            render_template(&tera, "attendees/index.html", &context)
        }
    }
}

#[post("/attendees/{attendee_id}/delete")]
pub async fn delete_attendee(
    _admin: AuthenticatedAdmin,
    attendee_id: web::Path<String>,
    query: web::Query<PageQuery>,
    api: web::Data<HttpApi>,
) -> impl Responder {
    match attendees_service::delete_attendee(api.get_ref(), &attendee_id).await {
        Ok(()) => {
            FlashMessage::success("Attendee deleted.").send();
        }
        Err(err) => {
            log::error!("Failed to delete attendee {attendee_id}: {err}");
            FlashMessage::error("Could not delete the attendee.").send();
        }
    }

    redirect(&list_location(SECTION, query.page()))
}
