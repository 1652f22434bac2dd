//! # REPL Controller
//!
//! Reads curl commands from a [`LineStream`], breaks each one down and writes
//! the result. A malformed command prints its error and the loop carries on;
//! only `quit`, `exit` or the end of input stop it.

use crate::curl::{format_request, parse_curl_command, FormatOptions, ParseError, ParseOptions};
use crate::repl::io::LineStream;
use anyhow::{Context, Result};
use std::io::Write;

pub const PROMPT: &str = "curl> ";
pub const CONTINUATION_PROMPT: &str = "> ";
pub const QUIT_COMMANDS: &[&str] = &["quit", "exit"];

const BANNER: &str = "Welcome to curlview. Enter a curl command, or 'quit' to exit.\n\
                      End a line with '\\' to continue the command on the next line.\n";

/// Counters for one REPL session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub parsed: usize,
    pub failed: usize,
}

pub struct ReplController<LS: LineStream, W: Write> {
    parse_options: ParseOptions,
    format_options: FormatOptions,
    line_stream: LS,
    writer: W,
    stats: SessionStats,
}

impl<LS: LineStream, W: Write> ReplController<LS, W> {
    /// Create a controller with injected input and output streams
    pub fn with_io_streams(
        parse_options: ParseOptions,
        format_options: FormatOptions,
        line_stream: LS,
        writer: W,
    ) -> Self {
        Self {
            parse_options,
            format_options,
            line_stream,
            writer,
            stats: SessionStats::default(),
        }
    }

    /// Run the read loop until a quit command or end of input
    pub fn run(&mut self) -> Result<SessionStats> {
        self.write(BANNER)?;

        while let Some(command) = self.read_command()? {
            let output = match self.evaluate(&command) {
                Ok(text) => {
                    self.stats.parsed += 1;
                    format!("\nParsed Output:\n\n{text}\n")
                }
                Err(e) => {
                    self.stats.failed += 1;
                    tracing::debug!("Failed to parse command: {}", e);
                    format!("Error: {e}\n\n")
                }
            };
            self.write(&output)?;
        }

        tracing::info!(
            "REPL finished: {} parsed, {} failed",
            self.stats.parsed,
            self.stats.failed
        );
        Ok(self.stats)
    }

    /// Parse and format one command
    pub fn evaluate(&self, command: &str) -> Result<String, ParseError> {
        let request = parse_curl_command(command, &self.parse_options)?;
        Ok(format_request(&request, &self.format_options))
    }

    /// Read the next command, following backslash continuations.
    ///
    /// Returns `None` when the session should end.
    fn read_command(&mut self) -> Result<Option<String>> {
        let first = loop {
            let Some(line) = self.line_stream.read_line(PROMPT)? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if is_quit_command(trimmed) {
                tracing::debug!("Quit command received");
                return Ok(None);
            }
            if !trimmed.is_empty() {
                break line;
            }
        };

        let mut command = first;
        while command.trim_end().ends_with('\\') {
            match self.line_stream.read_line(CONTINUATION_PROMPT)? {
                Some(next) => {
                    command.push('\n');
                    command.push_str(&next);
                }
                None => break,
            }
        }

        tracing::debug!("Read command: {:?}", command);
        Ok(Some(command))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .context("failed to write REPL output")
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn line_stream(&self) -> &LS {
        &self.line_stream
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

fn is_quit_command(line: &str) -> bool {
    QUIT_COMMANDS
        .iter()
        .any(|quit| line.eq_ignore_ascii_case(quit))
}
