//! Error handling
//!
//! Defines error types and handling for the login form.

pub mod handlers;
pub mod types;

pub use types::*;
