pub mod auth;
pub mod config;
pub mod error;
pub mod shell;
pub mod storage;
pub mod utils;

pub use auth::CredentialStore;
pub use config::FormConfig;
