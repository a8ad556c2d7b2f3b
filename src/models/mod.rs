//! Request-scoped models and configuration of the web server.

pub mod auth;
pub mod config;
