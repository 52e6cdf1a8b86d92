use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Hook output that denies the stop and hands `reason` back to Claude
#[derive(Debug, Serialize)]
pub struct BlockResponse {
    decision: &'static str,
    reason: String,
    #[serde(rename = "systemMessage")]
    system_message: String,
}

impl BlockResponse {
    pub fn new(reason: impl Into<String>, system_message: impl Into<String>) -> Self {
        Self {
            decision: "block",
            reason: reason.into(),
            system_message: system_message.into(),
        }
    }
}

/// Write the response as one compact JSON line
pub fn write_response<W: Write>(mut out: W, response: &BlockResponse) -> Result<()> {
    serde_json::to_writer(&mut out, response).context("Failed to serialize block response")?;
    writeln!(out).context("Failed to write block response")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
