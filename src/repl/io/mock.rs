//! # Mock I/O Implementation for Testing
//!
//! Provides a scripted [`LineStream`] that records the prompts it was asked
//! to show.

use super::LineStream;
use anyhow::Result;
use std::collections::VecDeque;

/// Mock line stream for testing
///
/// Hands out pre-programmed lines, then reports end of input.
#[derive(Debug, Default)]
pub struct MockLineStream {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl MockLineStream {
    /// Create a new mock line stream with pre-programmed lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Add a line to the end of the script
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineStream for MockLineStream {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}
