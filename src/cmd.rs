//! # One-shot Mode
//!
//! Breaks down a single command taken from `--command` or from piped stdin.

use crate::cmd_args::OutputFormat;
use crate::curl::{format_request, parse_curl_command, FormatOptions, ParseOptions};
use anyhow::{Context, Result};
use std::io::{Read, Write};

/// Shown instead of an error when there is nothing to parse
pub const PLACEHOLDER: &str = "Waiting for curl command...";

/// Read all of `reader` as one, possibly multi-line, command
pub fn read_command<R: Read>(mut reader: R) -> Result<String> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("failed to read command from stdin")?;
    Ok(input)
}

/// Parse `input` and write the rendered result.
///
/// Empty input writes the placeholder. Parse errors are returned unchanged
/// so the caller can report them verbatim.
pub fn run_once<W: Write>(
    input: &str,
    output: OutputFormat,
    parse_options: &ParseOptions,
    format_options: &FormatOptions,
    mut writer: W,
) -> Result<()> {
    if input.trim().is_empty() {
        tracing::debug!("Empty input, showing placeholder");
        writeln!(writer, "{PLACEHOLDER}").context("failed to write output")?;
        return Ok(());
    }

    let request = parse_curl_command(input, parse_options)?;
    let rendered = match output {
        OutputFormat::Text => format_request(&request, format_options),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&request)
                .context("failed to serialize parsed request")?;
            json.push('\n');
            json
        }
    };
    writer
        .write_all(rendered.as_bytes())
        .context("failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::ParseError;

    fn run(input: &str, output: OutputFormat) -> Result<String> {
        let mut out = Vec::new();
        run_once(
            input,
            output,
            &ParseOptions::default(),
            &FormatOptions::default(),
            &mut out,
        )?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_once_text() {
        let out = run("curl https://x.com -u a:b", OutputFormat::Text).unwrap();
        assert!(out.ends_with("Basic Auth:\n  a:b\n"), "{out}");
    }

    #[test]
    fn test_run_once_json() {
        let out = run("curl https://x.com -H 'A: 1' -H B", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["url"], "https://x.com");
        assert_eq!(value["method"], "GET");
        assert_eq!(value["headers"]["A"], "1");
        assert!(value["headers"]["B"].is_null());
    }

    #[test]
    fn test_run_once_empty_input_shows_placeholder() {
        let out = run(" \n ", OutputFormat::Text).unwrap();
        assert_eq!(out, format!("{PLACEHOLDER}\n"));
    }

    #[test]
    fn test_run_once_returns_parse_error() {
        let err = run("curl", OutputFormat::Text).unwrap_err();
        assert_eq!(err.downcast_ref::<ParseError>(), Some(&ParseError::NoUrlFound));
        assert_eq!(err.to_string(), "No URL found in curl command");
    }

    #[test]
    fn test_read_command_multiline() {
        let input = read_command("curl https://x.com \\\n  -X PUT\n".as_bytes()).unwrap();
        assert_eq!(input, "curl https://x.com \\\n  -X PUT\n");
        let out = run(&input, OutputFormat::Text).unwrap();
        assert!(out.contains("Method:\n  PUT\n"));
    }
}
