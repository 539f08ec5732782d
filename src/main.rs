//! Login Form - Entry Point
//!
//! A terminal login form backed by a flat credential file.

use log::{error, info, warn};

use login_form::shell::run_session;
use login_form::utils::logging::setup_logging;
use login_form::{CredentialStore, FormConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_logging();

    let config = FormConfig::load().unwrap_or_else(|e| {
        warn!("Invalid configuration, using defaults: {}", e);
        FormConfig::default()
    });

    let mut store = CredentialStore::open(config.users_file_path());
    info!(
        "Opening login form with users file {}",
        store.backend().path().display()
    );
    // Read faults are logged by the store; the form starts with what was loaded
    let _ = store.load();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    if let Err(e) = run_session(stdin, &mut stdout, &mut store, &config).await {
        error!("Form session ended with error: {}", e);
        std::process::exit(1);
    }
}
