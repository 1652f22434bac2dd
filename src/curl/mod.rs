//! # Curl Command Parsing
//!
//! Turns a raw curl invocation into a [`ParsedRequest`] and renders it back
//! into readable text.
//!
//! ```text
//! raw string ──▶ tokenizer ──▶ interpreter ──▶ ParsedRequest ──▶ formatter ──▶ text
//! ```
//!
//! Nothing in here performs I/O or keeps state between calls.

pub mod formatter;
pub mod interpreter;
pub mod options;
pub mod request;
pub mod tokenizer;

pub use formatter::format_request;
pub use options::{
    BodyRender, DataFlagSet, FormatOptions, HeaderOrder, InvalidOptionValue,
    MissingArgumentPolicy, ParseOptions,
};
pub use request::{Header, Headers, ParsedRequest};
pub use tokenizer::{TokenizeError, COMMAND_NAME};

use thiserror::Error;

/// Why a curl invocation could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Command should start with 'curl'")]
    InvalidCommand,

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error("Multiple URLs detected ('{first}' and '{second}'); only one supported")]
    MultipleUrls { first: String, second: String },

    #[error("No URL found in curl command")]
    NoUrlFound,

    #[error("Flag '{flag}' requires an argument")]
    MissingArgument { flag: String },
}

/// Parse a curl invocation.
///
/// The input may span several lines joined with trailing backslashes.
pub fn parse_curl_command(input: &str, options: &ParseOptions) -> Result<ParsedRequest, ParseError> {
    let trimmed = input.trim();
    if !trimmed.starts_with(COMMAND_NAME) {
        return Err(ParseError::InvalidCommand);
    }

    let tokens = tokenizer::tokenize(trimmed)?;
    match tokens.split_first() {
        Some((command, rest)) if command == COMMAND_NAME => interpreter::interpret(rest, options),
        _ => Err(ParseError::InvalidCommand),
    }
}

/// Parse with default options
pub fn parse(input: &str) -> Result<ParsedRequest, ParseError> {
    parse_curl_command(input, &ParseOptions::default())
}

/// Format with default options
pub fn format(request: &ParsedRequest) -> String {
    format_request(request, &FormatOptions::default())
}
