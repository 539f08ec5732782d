//! Action handlers for the login form.
//!
//! Each handler takes the form state and the credential store, performs the
//! store call and writes the outcome back to the status line.

use super::commands::Action;
use super::preview::select_image;
use super::responses::{
    SIGNUP_OK, render_help, render_preview, render_unknown, render_welcome,
};
use super::state::FormState;
use crate::auth::CredentialStore;
use crate::error::{AuthError, FormError};
use crate::error::handlers::{handle_error, status_message};
use crate::storage::CredentialBackend;
use log::info;
use std::path::Path;

/// Whether the session keeps running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Continue,
    Exit,
}

/// Outcome of one action.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    /// View to show after the action, if any
    pub message: Option<String>,
    /// The status line changed and should be redrawn
    pub refresh_status: bool,
}

impl CommandResult {
    fn quiet() -> Self {
        Self {
            status: CommandStatus::Continue,
            message: None,
            refresh_status: false,
        }
    }

    fn view(message: String) -> Self {
        Self {
            message: Some(message),
            ..Self::quiet()
        }
    }

    fn status_changed() -> Self {
        Self {
            refresh_status: true,
            ..Self::quiet()
        }
    }
}

/// Dispatches an action to its handler.
pub fn handle_action<B: CredentialBackend>(
    form: &mut FormState,
    store: &mut CredentialStore<B>,
    action: &Action,
) -> CommandResult {
    match action {
        Action::User(username) => {
            form.set_username(username.clone());
            CommandResult::quiet()
        }
        Action::Pass(password) => {
            form.set_password(password.clone());
            CommandResult::quiet()
        }
        Action::Login => handle_login(form, store),
        Action::Signup => handle_signup(form, store),
        Action::Upload(None) => CommandResult::quiet(),
        Action::Upload(Some(path)) => handle_upload(form, Path::new(path)),
        Action::Help => CommandResult::view(render_help()),
        Action::Exit => CommandResult {
            status: CommandStatus::Exit,
            message: Some("Goodbye\n".into()),
            refresh_status: false,
        },
        Action::Blank => CommandResult::quiet(),
        Action::Unknown(raw) => {
            form.status_mut().set_error(render_unknown(raw));
            CommandResult::status_changed()
        }
    }
}

/// Checks the fields against the store and opens the welcome view on success.
fn handle_login<B: CredentialBackend>(
    form: &mut FormState,
    store: &CredentialStore<B>,
) -> CommandResult {
    if store.validate(form.username(), form.password()) {
        info!("User {} logged in", form.username());
        form.status_mut().clear();
        CommandResult {
            refresh_status: true,
            ..CommandResult::view(render_welcome(form.username()))
        }
    } else {
        report(form, &AuthError::InvalidCredentials.into());
        CommandResult::status_changed()
    }
}

/// Registers the fields as a new user.
fn handle_signup<B: CredentialBackend>(
    form: &mut FormState,
    store: &mut CredentialStore<B>,
) -> CommandResult {
    match store.register(form.username(), form.password()) {
        Ok(()) => form.status_mut().set_success(SIGNUP_OK),
        Err(e) => report(form, &e),
    }
    CommandResult::status_changed()
}

fn handle_upload(form: &mut FormState, path: &Path) -> CommandResult {
    match select_image(path) {
        Ok(image) => {
            let view = render_preview(&image);
            form.set_selected_image(image);
            CommandResult::view(view)
        }
        Err(e) => {
            report(form, &e.into());
            CommandResult::status_changed()
        }
    }
}

fn report(form: &mut FormState, err: &FormError) {
    handle_error(err);
    form.status_mut().set_error(status_message(err));
}
