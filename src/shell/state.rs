//! Module `state`
//!
//! Mutable state of the form: the two input fields, the status line and
//! the currently selected image.

use super::preview::ImageSelection;

/// Visual state of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Error,
    Success,
}

/// Single mutable status text shown under the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
    kind: StatusKind,
}

impl StatusLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.kind = StatusKind::Error;
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.kind = StatusKind::Success;
    }

    /// Empties the text and returns to the default visual state
    pub fn clear(&mut self) {
        self.text.clear();
        self.kind = StatusKind::Error;
    }
}

/// Represents the state of the form between actions.
#[derive(Default)]
pub struct FormState {
    username: String,
    password: String,
    status: StatusLine,
    selected_image: Option<ImageSelection>,
}

impl FormState {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusLine {
        &mut self.status
    }

    pub fn selected_image(&self) -> Option<&ImageSelection> {
        self.selected_image.as_ref()
    }

    pub fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn set_selected_image(&mut self, image: ImageSelection) {
        self.selected_image = Some(image);
    }
}
