use log::{debug, error, info};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::commands::parse_action;
use super::handlers::{CommandStatus, handle_action};
use super::responses::{INPUT_NOT_TEXT, INPUT_TOO_LONG, PROMPT, render_banner, render_status};
use super::state::FormState;
use crate::auth::CredentialStore;
use crate::config::FormConfig;
use crate::storage::CredentialBackend;

/// Runs the form until `exit` or end of input.
///
/// - Reads one action per line from `reader`.
/// - Dispatches it with `handle_action` against the store.
/// - Writes views and the status line to `writer`.
///
/// Store operations run inline on the calling task; nothing is spawned.
pub async fn run_session<R, W, B>(
    mut reader: R,
    writer: &mut W,
    store: &mut CredentialStore<B>,
    config: &FormConfig,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    B: CredentialBackend,
{
    let mut form = FormState::default();
    let mut line = String::new();

    writer
        .write_all(render_banner(&config.title).as_bytes())
        .await?;

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => {
                info!("Input closed, leaving form");
                break;
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                debug!("Rejected non UTF-8 input: {}", e);
                form.status_mut().set_error(INPUT_NOT_TEXT);
                writer.write_all(render_status(form.status()).as_bytes()).await?;
                continue;
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e);
            }
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.len() > config.max_input_length {
            form.status_mut().set_error(INPUT_TOO_LONG);
            writer.write_all(render_status(form.status()).as_bytes()).await?;
            continue;
        }

        let action = parse_action(trimmed);
        debug!("Action: {:?}", action);

        let result = handle_action(&mut form, store, &action);

        if let Some(msg) = result.message {
            writer.write_all(msg.as_bytes()).await?;
        }
        if result.refresh_status {
            writer.write_all(render_status(form.status()).as_bytes()).await?;
        }
        if result.status == CommandStatus::Exit {
            info!("Form closed by user");
            break;
        }
    }

    writer.flush().await
}
