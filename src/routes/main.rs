use actix_identity::Identity;
use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Serialize;
use tera::Tera;

use crate::domain::session::SessionState;
use crate::models::auth::AuthenticatedAdmin;
use crate::routes::{base_context, redirect, render_template};

#[derive(Serialize)]
struct Section {
    path: &'static str,
    title: &'static str,
    summary: &'static str,
}

const SECTIONS: [Section; 5] = [
    Section {
        path: "/events",
        title: "Events",
        summary: "Schedule, publish and track events.",
    },
    Section {
        path: "/speakers",
        title: "Speakers",
        summary: "Speaker profiles, expertise and ratings.",
    },
    Section {
        path: "/sponsors",
        title: "Sponsors",
        summary: "Sponsorship levels, contracts and contacts.",
    },
    Section {
        path: "/attendees",
        title: "Attendees",
        summary: "Registrations, tickets and check-ins.",
    },
    Section {
        path: "/agenda-items",
        title: "Agenda",
        summary: "Sessions, workshops and breaks.",
    },
];

#[get("/")]
pub async fn index(identity: Option<Identity>) -> impl Responder {
    let session = SessionState::from(identity.and_then(|identity| identity.id().ok()));
    redirect(session.landing_path())
}

#[get("/dashboard")]
pub async fn dashboard(
    admin: AuthenticatedAdmin,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, Some(&admin), "dashboard");
    context.insert("sections", &SECTIONS);

    render_template(&tera, "main/dashboard.html", &context)
}
