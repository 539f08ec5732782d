//! Presentation shell
//!
//! Terminal rendering of the login form: field entry, login/signup actions,
//! a status line and image selection, driven line by line.

pub mod commands;
pub mod handlers;
pub mod preview;
pub mod responses;
pub mod session;
pub mod state;

pub use commands::{Action, parse_action};
pub use handlers::{CommandResult, CommandStatus, handle_action};
pub use session::run_session;
pub use state::{FormState, StatusKind, StatusLine};
