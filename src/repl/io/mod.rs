//! # I/O Abstraction Layer
//!
//! Line input for the REPL sits behind a trait so the loop can be driven by
//! a terminal in production and by a scripted queue in tests.
//!
//! ```text
//! Production:  ReplController ──▶ TerminalLineStream ──▶ rustyline::Editor
//!
//! Testing:     ReplController ──▶ MockLineStream     ──▶ VecDeque<String>
//! ```
//!
//! Rendered output goes to any [`std::io::Write`].

use anyhow::Result;

pub mod mock;
pub mod terminal;

pub use mock::MockLineStream;
pub use terminal::TerminalLineStream;

/// Source of input lines
pub trait LineStream {
    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}
