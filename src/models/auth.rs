//! Request extractor for the signed-in administrator.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest};
use serde::Serialize;

use crate::domain::session::SessionState;

/// Administrator whose identity is stored in the session cookie.
///
/// Extraction fails with 401 when no one is signed in; inside the protected
/// scope that becomes a redirect to the sign-in page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthenticatedAdmin {
    pub email: String,
}

impl FromRequest for AuthenticatedAdmin {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req
            .get_identity()
            .ok()
            .and_then(|identity| identity.id().ok());

        ready(match SessionState::from(identity) {
            SessionState::Authenticated { email } => Ok(AuthenticatedAdmin { email }),
            SessionState::Anonymous => Err(ErrorUnauthorized("sign-in required")),
        })
    }
}
