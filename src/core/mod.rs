//! Process configuration and per-invocation secrets

pub mod config;
pub mod secrets;

pub use config::AppConfig;
pub use secrets::SecretBundle;
