use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Serialize;
use tera::{Context, Tera};

use crate::api::http::HttpApi;
use crate::dto::list::PageQuery;
use crate::dto::speakers::{SpeakerView, SpeakersPageData, SpeakersQuery};
use crate::forms::speaker::SpeakerForm;
use crate::forms::{Panel, SaveTarget};
use crate::models::auth::AuthenticatedAdmin;
use crate::routes::{base_context, insert_save_error, list_location, redirect, render_template};
use crate::services::speakers as speakers_service;

const SECTION: &str = "speakers";

/// Query string of the speakers list, keeping the operator's filters.
#[derive(Serialize)]
struct ListLocation<'a> {
    page: usize,
    search: &'a str,
    expertise: &'a str,
    company: &'a str,
    rating: &'a str,
    view: SpeakerView,
}

fn speakers_location(query: &SpeakersQuery, page: usize) -> String {
    let filters = query.filters();
    let location = ListLocation {
        page,
        search: &filters.search,
        expertise: &filters.expertise,
        company: &filters.company,
        rating: &filters.rating,
        view: query.view(),
    };
    match serde_html_form::to_string(&location) {
        Ok(params) => format!("/{SECTION}?{params}"),
        Err(err) => {
            log::warn!("Failed to encode speakers filters: {err}");
            list_location(SECTION, page)
        }
    }
}

fn page_context(
    flash_messages: &IncomingFlashMessages,
    admin: &AuthenticatedAdmin,
    data: &SpeakersPageData,
) -> Context {
    let mut context = base_context(flash_messages, Some(admin), SECTION);
    context.insert("data", data);
    context
}

#[get("/speakers")]
pub async fn show_speakers(
    admin: AuthenticatedAdmin,
    query: web::Query<SpeakersQuery>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = speakers_service::load_speakers_page(api.get_ref(), &query, None).await;

    let context = page_context(&flash_messages, &admin, &data);
    render_template(&tera, "speakers/index.html", &context)
}

/// The save form posts back the list filters next to `page` and `id`, so
/// both the redirect and a failed re-render keep them.
#[post("/speakers/save")]
pub async fn save_speaker(
    admin: AuthenticatedAdmin,
    target: web::Query<SaveTarget>,
    list_query: web::Query<SpeakersQuery>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<SpeakerForm>,
) -> impl Responder {
    let id = target.record_id();

    match speakers_service::submit_speaker(api.get_ref(), id.as_ref(), &form).await {
        Ok(()) => {
            let message = if id.is_some() {
                "Speaker updated."
            } else {
                "Speaker added."
            };
            FlashMessage::success(message).send();
            redirect(&speakers_location(&list_query, target.page()))
        }
        Err(err) => {
            log::error!("Failed to save speaker: {err}");
            let query = SpeakersQuery {
                page: Some(target.page()),
                panel: None,
                edit: None,
                details: None,
                ..list_query.into_inner()
            };
            let data = speakers_service::load_speakers_page(
                api.get_ref(),
                &query,
                Some(Panel::reopen(id, form)),
            )
            .await;

            let mut context = page_context(&flash_messages, &admin, &data);
            insert_save_error(&mut context, &err);
            render_template(&tera, "speakers/index.html", &context)
        }
    }
}

#[post("/speakers/{speaker_id}/delete")]
pub async fn delete_speaker(
    _admin: AuthenticatedAdmin,
    speaker_id: web::Path<String>,
    query: web::Query<PageQuery>,
    api: web::Data<HttpApi>,
) -> impl Responder {
    match speakers_service::delete_speaker(api.get_ref(), &speaker_id).await {
        Ok(()) => {
            FlashMessage::success("Speaker deleted.").send();
        }
        Err(err) => {
            log::error!("Failed to delete speaker {speaker_id}: {err}");
            FlashMessage::error("Could not delete the speaker.").send();
        }
    }

    redirect(&list_location(SECTION, query.page()))
}
