//! Module `commands`
//!
//! Parses a line typed into the form into an [`Action`].

/// A user action on the form.
///
/// Field commands carry the typed value; an empty value clears the field.
#[derive(PartialEq)]
pub enum Action {
    /// Set the username field
    User(String),
    /// Set the password field
    Pass(String),
    /// Attempt login with the current fields
    Login,
    /// Attempt signup with the current fields
    Signup,
    /// Select an image; `None` is a cancelled chooser
    Upload(Option<String>),
    Help,
    Exit,
    /// Blank line
    Blank,
    Unknown(String),
}

impl Action {
    /// Command name, safe to log (never includes field values)
    pub fn name(&self) -> &'static str {
        match self {
            Action::User(_) => "USER",
            Action::Pass(_) => "PASS",
            Action::Login => "LOGIN",
            Action::Signup => "SIGNUP",
            Action::Upload(_) => "UPLOAD",
            Action::Help => "HELP",
            Action::Exit => "EXIT",
            Action::Blank => "BLANK",
            Action::Unknown(_) => "UNKNOWN",
        }
    }
}

// Passwords must not end up in logs through `{:?}`
impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::User(name) => write!(f, "User({:?})", name),
            Action::Pass(_) => write!(f, "Pass(***)"),
            Action::Upload(path) => write!(f, "Upload({:?})", path),
            Action::Unknown(raw) => write!(f, "Unknown({:?})", raw),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses a raw input line into an [`Action`].
///
/// The command word is case-insensitive. The argument is the rest of the line
/// with surrounding whitespace removed.
pub fn parse_action(raw: &str) -> Action {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Action::Blank;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "USER" => Action::User(arg.to_string()),
        "PASS" => Action::Pass(arg.to_string()),
        "LOGIN" => Action::Login,
        "SIGNUP" => Action::Signup,
        "UPLOAD" if arg.is_empty() => Action::Upload(None),
        "UPLOAD" => Action::Upload(Some(arg.to_string())),
        "HELP" | "?" => Action::Help,
        "EXIT" | "QUIT" | "Q" => Action::Exit,
        _ => Action::Unknown(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_actions() {
        assert_eq!(parse_action("LOGIN"), Action::Login);
        assert_eq!(parse_action("signup"), Action::Signup);
        assert_eq!(parse_action("Help"), Action::Help);
        assert_eq!(parse_action("?"), Action::Help);
        assert_eq!(parse_action("exit"), Action::Exit);
        assert_eq!(parse_action("QUIT"), Action::Exit);
        assert_eq!(parse_action("q"), Action::Exit);
    }

    #[test]
    fn test_parse_fields() {
        assert_eq!(parse_action("user alice"), Action::User("alice".to_string()));
        assert_eq!(
            parse_action("PASS  correct horse  "),
            Action::Pass("correct horse".to_string())
        );
        assert_eq!(parse_action("user"), Action::User(String::new()));
    }

    #[test]
    fn test_parse_upload() {
        assert_eq!(parse_action("upload"), Action::Upload(None));
        assert_eq!(
            parse_action("UPLOAD /tmp/cat.png"),
            Action::Upload(Some("/tmp/cat.png".to_string()))
        );
    }

    #[test]
    fn test_blank_and_unknown() {
        assert_eq!(parse_action(""), Action::Blank);
        assert_eq!(parse_action("   "), Action::Blank);
        assert_eq!(parse_action("FOO bar"), Action::Unknown("FOO bar".to_string()));
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", parse_action("pass hunter2"));
        assert_eq!(rendered, "Pass(***)");
    }
}
