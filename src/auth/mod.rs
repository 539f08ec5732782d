//! Authentication system
//!
//! Handles credential storage, signup and login validation.

pub mod credentials;
pub mod validator;

pub use credentials::CredentialStore;
pub use validator::check_fields;
