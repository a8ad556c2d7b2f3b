//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::forms::FormError;
use crate::models::auth::AuthenticatedAdmin;
use crate::services::ServiceError;

pub mod agenda_items;
pub mod attendees;
pub mod auth;
pub mod event_view;
pub mod events;
pub mod main;
pub mod speakers;
pub mod sponsors;

/// Bootstrap alert class for a flash level.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Location of a list view on the given page.
pub fn list_location(section: &str, page: usize) -> String {
    format!("/{section}?page={page}")
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context every page starts from: alerts, the signed-in admin and the
/// active navigation entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    admin: Option<&AuthenticatedAdmin>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &admin);
    context.insert("current_page", current_page);
    context
}

/// Inline alert and highlighted inputs for a submit that did not go through.
pub fn insert_save_error(context: &mut Context, err: &ServiceError) {
    let (message, mut fields) = match err {
        ServiceError::Form(FormError::Validation(errors)) => (
            "Please fix the highlighted fields.".to_string(),
            errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect::<Vec<_>>(),
        ),
        ServiceError::Form(FormError::InvalidNumber { field, .. }) => (
            format!("The {field} field must be a number in range."),
            vec![field.to_string()],
        ),
        ServiceError::Form(FormError::InvalidDate(value)) => {
            (format!("\"{value}\" is not a valid date."), Vec::new())
        }
        _ => (
            "The server did not accept the changes. Please try again.".to_string(),
            Vec::new(),
        ),
    };
    fields.sort();

    context.insert("form_error", &message);
    context.insert("invalid_fields", &fields);
}
