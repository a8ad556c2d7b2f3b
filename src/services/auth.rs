use validator::Validate;

use crate::domain::session::SessionState;
use crate::forms::FormError;
use crate::forms::auth::LoginForm;
use crate::services::{ServiceError, ServiceResult};

/// Credential pair the console accepts.
#[derive(Clone, Debug)]
pub struct AdminCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Checks the submitted form against the configured credentials.
///
/// Emails compare case-insensitively, passwords exactly.
pub fn verify_credentials(
    form: &LoginForm,
    admin: &AdminCredentials<'_>,
) -> ServiceResult<SessionState> {
    form.validate().map_err(FormError::from)?;

    let email = form.email.trim();
    if email.eq_ignore_ascii_case(admin.email) && form.password == admin.password {
        Ok(SessionState::Authenticated {
            email: email.to_lowercase(),
        })
    } else {
        Err(ServiceError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: AdminCredentials<'static> = AdminCredentials {
        email: "admin@example.com",
        password: "admin123",
    };

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_configured_pair() {
        let state = verify_credentials(&form("Admin@Example.com", "admin123"), &ADMIN).unwrap();
        assert_eq!(
            state,
            SessionState::Authenticated {
                email: "admin@example.com".into()
            }
        );
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(matches!(
            verify_credentials(&form("admin@example.com", "admin"), &ADMIN),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn malformed_email_is_a_form_error() {
        assert!(matches!(
            verify_credentials(&form("admin", "admin123"), &ADMIN),
            Err(ServiceError::Form(FormError::Validation(_)))
        ));
    }
}
