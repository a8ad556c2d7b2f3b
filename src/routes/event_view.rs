use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::api::http::HttpApi;
use crate::domain::types::RecordId;
use crate::dto::event_view::{EventViewState, Tab};
use crate::models::auth::AuthenticatedAdmin;
use crate::routes::{base_context, redirect, render_template, render_template_with_status};
use crate::services::event_view::EventView;

#[derive(Deserialize)]
struct EventViewParams {
    tab: Option<String>,
}

#[get("/events/{event_id}")]
pub async fn show_event(
    admin: AuthenticatedAdmin,
    event_id: web::Path<String>,
    params: web::Query<EventViewParams>,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Ok(event_id) = RecordId::new(event_id.into_inner()) else {
        FlashMessage::error("Event not found.").send();
        return redirect("/events");
    };

    let mut view = EventView::new();
    view.load(api.get_ref(), event_id).await;
    view.select_tab(Tab::from_query(params.tab.as_deref()));

    let mut context = base_context(&flash_messages, Some(&admin), "events");
    match view.into_state() {
        EventViewState::Ready(aggregate) => {
            context.insert("aggregate", &aggregate);
            context.insert("tabs", &Tab::ALL.map(|tab| (tab.as_str(), tab.label())));
            context.insert("progress_width", &aggregate.stats.progress_bar_width());
            context.insert("progress_label", &aggregate.stats.progress_label());
            render_template(&tera, "events/show.html", &context)
        }
        EventViewState::NotFound { event_id } => {
            context.insert("event_id", &event_id);
            render_template_with_status(
                &tera,
                "errors/not_found.html",
                &context,
                StatusCode::NOT_FOUND,
            )
        }
        EventViewState::Errored { event_id, message } => {
            context.insert("event_id", &event_id);
            context.insert("message", &message);
            render_template_with_status(&tera, "errors/error.html", &context, StatusCode::BAD_GATEWAY)
        }
        state => {
            log::error!("Event view settled in unexpected state {state:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
