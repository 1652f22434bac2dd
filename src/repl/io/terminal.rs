//! # Terminal I/O Implementation
//!
//! Production line stream backed by rustyline, which provides line editing
//! and in-session history. All rustyline usage is isolated to this module.

use super::LineStream;
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

/// What a readline outcome means for the REPL
#[derive(Debug, PartialEq, Eq)]
enum ReadOutcome {
    Line(String),
    Finished,
}

/// Ctrl-C and Ctrl-D end the session instead of killing the process
fn classify(result: Result<String, ReadlineError>) -> Result<ReadOutcome> {
    match result {
        Ok(line) => Ok(ReadOutcome::Line(line)),
        Err(ReadlineError::Interrupted) => {
            tracing::debug!("Input interrupted (Ctrl-C)");
            Ok(ReadOutcome::Finished)
        }
        Err(ReadlineError::Eof) => {
            tracing::debug!("End of input (Ctrl-D)");
            Ok(ReadOutcome::Finished)
        }
        Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
    }
}

/// Terminal-based line stream using rustyline
pub struct TerminalLineStream {
    editor: Editor<(), DefaultHistory>,
}

impl TerminalLineStream {
    /// Create a new terminal line stream
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .history_ignore_dups(true)
            .context("failed to configure line editor history")?
            .build();
        let editor = Editor::with_config(config).context("failed to create line editor")?;
        Ok(Self { editor })
    }
}

impl LineStream for TerminalLineStream {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match classify(self.editor.readline(prompt))? {
            ReadOutcome::Line(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            ReadOutcome::Finished => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_passed_through() {
        let outcome = classify(Ok("curl https://x.com".to_string())).unwrap();
        assert_eq!(outcome, ReadOutcome::Line("curl https://x.com".to_string()));
    }

    #[test]
    fn test_interrupt_and_eof_finish_session() {
        assert_eq!(
            classify(Err(ReadlineError::Interrupted)).unwrap(),
            ReadOutcome::Finished
        );
        assert_eq!(classify(Err(ReadlineError::Eof)).unwrap(), ReadOutcome::Finished);
    }

    #[test]
    fn test_other_readline_errors_propagate() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let result = classify(Err(ReadlineError::Io(err)));
        assert!(result.unwrap_err().to_string().contains("tty gone"));
    }
}
