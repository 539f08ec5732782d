//! Logging utilities
//!
//! Log records go to stderr so they stay apart from the form on stdout.

use env_logger::{Env, Target};

/// Setup logging for the form. `RUST_LOG` overrides the default `warn` filter.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
}
