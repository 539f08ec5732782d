//! Form rendering
//!
//! Text written to the terminal for the banner, status line and views.

use super::preview::ImageSelection;
use super::state::{StatusKind, StatusLine};
use console::style;

pub const PROMPT: &str = "> ";

pub const SIGNUP_OK: &str = "User registered successfully!";
pub const INPUT_TOO_LONG: &str = "Input line too long";
pub const INPUT_NOT_TEXT: &str = "Input is not valid text";

const HELP: &str = "\
  user <name>       set the user name field
  pass <password>   set the password field
  login             log in with the current fields
  signup            register the current fields as a new user
  upload <path>     preview an image file
  help              show this help
  exit              close the form
";

/// Title banner shown once when the form opens
pub fn render_banner(title: &str) -> String {
    format!(
        "{}\n{}\nType 'help' for commands.\n",
        style(title).bold(),
        style("=".repeat(title.chars().count())).dim()
    )
}

/// Status line, coloured by state. Empty status renders as nothing.
pub fn render_status(status: &StatusLine) -> String {
    if status.is_empty() {
        return String::new();
    }
    let text = match status.kind() {
        StatusKind::Error => style(status.text()).red(),
        StatusKind::Success => style(status.text()).green(),
    };
    format!("{}\n", text)
}

/// Acknowledgement view after a successful login
pub fn render_welcome(username: &str) -> String {
    format!(
        "{}\nWelcome, {}!\n",
        style("[ Welcome ]").cyan().bold(),
        username
    )
}

/// Preview area for the selected image
pub fn render_preview(image: &ImageSelection) -> String {
    format!(
        "{} {} ({}, {} bytes)\n",
        style("Image:").bold(),
        image.file_name,
        image.format,
        image.size_bytes
    )
}

pub fn render_help() -> String {
    HELP.to_string()
}

pub fn render_unknown(raw: &str) -> String {
    format!("Unknown command: {}", raw)
}
