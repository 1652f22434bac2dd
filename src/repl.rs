//! # REPL Module
//!
//! Interactive shell around the curl parser:
//!
//! ```text
//! ┌────────────────┐  lines   ┌────────────────┐  text   ┌─────────┐
//! │   LineStream   │─────────▶│ ReplController │────────▶│  Write  │
//! │ terminal/mock  │          │ parse + format │         │ stdout  │
//! └────────────────┘          └────────────────┘         └─────────┘
//! ```
//!
//! All terminal access lives in `io::terminal`; the controller only sees
//! the traits, which keeps the loop testable without a TTY.

pub mod controller;
pub mod io;

pub use controller::{ReplController, SessionStats, CONTINUATION_PROMPT, PROMPT};
pub use io::{LineStream, MockLineStream, TerminalLineStream};
