//! Line-delimited JSON transport between the flow and an external host.
//!
//! One command per output line; one response per input line, read only
//! after a command that expects an answer. End of input skips every
//! remaining prompt.

use crate::services::flow::FlowController;
use crate::types::Response;
use anyhow::Context;
use std::io::{BufRead, Write};

/// Drive `controller` to completion. Returns the number of commands written.
pub fn run_session<R: BufRead, W: Write>(
    controller: &mut FlowController,
    input: R,
    output: &mut W,
) -> anyhow::Result<usize> {
    let mut lines = input.lines();
    let mut response = Response::NoPayload;
    let mut written = 0;

    while let Some(command) = controller.resume(response) {
        serde_json::to_writer(&mut *output, &command).context("Failed to encode command")?;
        writeln!(output).context("Failed to write command")?;
        output.flush().context("Failed to flush output")?;
        written += 1;

        response = if command.expects_response() {
            next_response(&mut lines)?
        } else {
            Response::NoPayload
        };
    }

    Ok(written)
}

fn next_response<I>(lines: &mut I) -> anyhow::Result<Response>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    for line in lines {
        let line = line.context("Failed to read response")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        return Ok(match serde_json::from_str(line) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Malformed response treated as skipped: {e}");
                Response::NoPayload
            }
        });
    }

    log::info!("Input closed; skipping remaining prompts");
    Ok(Response::NoPayload)
}

#[cfg(test)]
#[path = "tests/stdio_host_tests.rs"]
mod tests;
