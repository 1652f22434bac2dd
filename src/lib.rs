//! # curlview - Readable Breakdown of curl Commands
//!
//! Parses a pasted curl invocation into a structured request and renders it
//! as plain sections (URL, method, headers, body, auth, other flags).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   tokens   ┌──────────────┐  ParsedRequest  ┌─────────────┐
//! │  Tokenizer   │───────────▶│ Interpreter  │────────────────▶│  Formatter  │
//! └──────────────┘            └──────────────┘                 └─────────────┘
//!         ▲                                                           │
//!         │ raw command                                          text │
//!         │                                                           ▼
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │           REPL / one-shot command (cmd_args, config, repl)               │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```
//! let request = curlview::parse("curl -u admin:pass https://x.com").unwrap();
//! assert_eq!(request.user(), Some("admin:pass"));
//! assert!(curlview::format(&request).starts_with("URL:\n  https://x.com\n"));
//! ```

pub mod cmd;
pub mod cmd_args;
pub mod config;
pub mod curl;
pub mod repl;

// Re-export main types for easy access
pub use curl::{
    format, format_request, parse, parse_curl_command, FormatOptions, ParseError, ParseOptions,
    ParsedRequest,
};
