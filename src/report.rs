use crate::model::response::ProbeOutcome;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

const SEPARATOR_WIDTH: usize = 40;

pub fn print_request<W, T>(out: &mut W, url: &str, request: &T) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    let payload =
        serde_json::to_string_pretty(request).context("failed to serialize request payload")?;

    writeln!(out, "Sending request to {}:", url)?;
    writeln!(out, "{}", payload)?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    Ok(())
}

/// Print the outcome of the probe. `port` is only used for the connection hint.
pub fn print_outcome<W: Write>(out: &mut W, outcome: &ProbeOutcome, port: u16) -> Result<()> {
    match outcome {
        ProbeOutcome::Success { status, body } => {
            writeln!(out, "Response Status: {}", status)?;
            match pretty_json(body) {
                Some(pretty) => {
                    writeln!(out, "Response Body:")?;
                    writeln!(out, "{}", pretty)?;
                }
                None => {
                    writeln!(out, "Response Body (Raw):")?;
                    writeln!(out, "{}", body)?;
                }
            }
        }
        ProbeOutcome::HttpError {
            status,
            reason,
            body,
        } => {
            writeln!(out, "HTTP Error {}: {}", status, reason)?;
            writeln!(out, "{}", body)?;
        }
        ProbeOutcome::ConnectionError { reason } => {
            writeln!(out, "Connection Error: {}", reason)?;
            writeln!(
                out,
                "Make sure the Docker container is running and port {} is mapped.",
                port
            )?;
        }
    }

    out.flush()?;

    Ok(())
}

/// `None` when the body is not JSON; the caller falls back to the raw text.
fn pretty_json(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
