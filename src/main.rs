use anyhow::Result;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

mod config;
mod decision;
mod input;
mod response;
mod sentinel;

use config::HookConfig;
use decision::Decision;
use response::BlockResponse;

/// Logging is off unless this is set (e.g. `CONTINUE_HOOK_LOG=debug`).
/// Claude Code shows hook stderr to the user, so the default stays silent.
const LOG_ENV: &str = "CONTINUE_HOOK_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    // Exit status is always 0; the caller only reads stdout.
    if let Err(e) = run() {
        tracing::warn!("continue hook failed: {:#}", e);
    }
}

fn run() -> Result<()> {
    let input = read_stdin();
    let config = HookConfig::with_base_dir(".");
    let sentinel_path = config.sentinel_path();

    let decision = decision::decide(&input, || sentinel::probe(&sentinel_path));

    match decision {
        Decision::Allow(why) => {
            tracing::debug!(?why, sentinel = %sentinel_path.display(), "allowing stop");
        }
        Decision::Block { reason } => {
            tracing::info!(
                sentinel = %sentinel_path.display(),
                bytes = reason.len(),
                "blocking stop"
            );
            let response = BlockResponse::new(reason, config.system_message);
            response::write_response(io::stdout().lock(), &response)?;
        }
    }

    Ok(())
}

/// Read all of stdin. A failed read yields no bytes, which then fails to parse.
fn read_stdin() -> Vec<u8> {
    let mut buffer = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut buffer) {
        tracing::debug!("failed to read stdin: {}", e);
        buffer.clear();
    }
    buffer
}
