use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::session::SessionState;
use crate::forms::auth::LoginForm;
use crate::middleware::LOGIN_PATH;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};

#[get("/login")]
pub async fn show_login(
    identity: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = SessionState::from(identity.and_then(|identity| identity.id().ok()));
    if session.is_authenticated() {
        return redirect(session.landing_path());
    }

    let context = base_context(&flash_messages, None, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    request: HttpRequest,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::verify_credentials(&form, &server_config.admin_credentials()) {
        Ok(SessionState::Authenticated { email }) => {
            if let Err(err) = Identity::login(&request.extensions(), email) {
                log::error!("Failed to start session: {err}");
                FlashMessage::error("Could not sign you in. Please try again.").send();
                return redirect(LOGIN_PATH);
            }
            redirect("/dashboard")
        }
        Ok(SessionState::Anonymous) | Err(ServiceError::Unauthorized) => {
            log::warn!("Rejected sign-in for {}", form.email);
            FlashMessage::error("Invalid email or password.").send();
            redirect(LOGIN_PATH)
        }
        Err(ServiceError::Form(_)) => {
            FlashMessage::error("Enter a valid email and password.").send();
            redirect(LOGIN_PATH)
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            FlashMessage::error("Could not sign you in. Please try again.").send();
            redirect(LOGIN_PATH)
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect(LOGIN_PATH)
}
