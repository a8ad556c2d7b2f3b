//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::services::auth::AdminCredentials;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for the session and flash cookies, at least 64 bytes.
    pub secret: String,
    /// Root of the remote event REST service.
    pub api_base_url: String,
    pub admin_email: String,
    pub admin_password: String,
    #[serde(default)]
    pub secure_cookies: bool,
}

impl ServerConfig {
    pub fn admin_credentials(&self) -> AdminCredentials<'_> {
        AdminCredentials {
            email: &self.admin_email,
            password: &self.admin_password,
        }
    }
}
