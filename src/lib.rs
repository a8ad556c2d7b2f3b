pub mod api;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_identity::IdentityMiddleware;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::middleware::{Compress, Logger};
    use actix_web::{App, HttpServer, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::api::http::HttpApi;
    use crate::middleware::RedirectUnauthorized;
    use crate::models::config::ServerConfig;
    use crate::routes::agenda_items::{delete_agenda_item, save_agenda_item, show_agenda_items};
    use crate::routes::attendees::{delete_attendee, save_attendee, show_attendees};
    use crate::routes::auth::{login, logout, show_login};
    use crate::routes::event_view::show_event;
    use crate::routes::events::{delete_event, save_event, show_events};
    use crate::routes::main::{dashboard, index};
    use crate::routes::speakers::{delete_speaker, save_speaker, show_speakers};
    use crate::routes::sponsors::{delete_sponsor, save_sponsor, show_sponsors};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let api = HttpApi::new(&server_config.api_base_url)
            .map_err(|e| std::io::Error::other(format!("Invalid API base URL: {e}")))?;
        log::info!("Using event API at {}", server_config.api_base_url);

        // Keys and stores for identity, sessions, and flash messages.
        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid cookie secret: {e}")))?;

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(server_config.secure_cookies)
                        .build(),
                )
                .wrap(Compress::default())
                .wrap(Logger::default())
                .service(Files::new("/assets", "./assets"))
                .service(index)
                .service(show_login)
                .service(login)
                .service(
                    web::scope("")
                        .wrap(RedirectUnauthorized)
                        .service(dashboard)
                        .service(show_events)
                        .service(save_event)
                        .service(delete_event)
                        .service(show_event)
                        .service(show_speakers)
                        .service(save_speaker)
                        .service(delete_speaker)
                        .service(show_sponsors)
                        .service(save_sponsor)
                        .service(delete_sponsor)
                        .service(show_attendees)
                        .service(save_attendee)
                        .service(delete_attendee)
                        .service(show_agenda_items)
                        .service(save_agenda_item)
                        .service(delete_agenda_item)
                        .service(logout),
                )
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(api.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

#[cfg(feature = "server")]
pub use server::run;
