//! # Mock I/O Implementations for Testing
//!
//! Scripted line input and recorded output, used to drive the engine
//! without a terminal.

use super::{LineReader, Output};
use anyhow::{anyhow, Result};
use std::collections::VecDeque;

/// Mock line reader for testing
///
/// Each scripted entry is either a line (`Some`) or a read failure (`None`).
/// Once the script is exhausted every read fails and the reader reports
/// itself closed.
#[derive(Debug, Default)]
pub struct MockLineReader {
    answers: VecDeque<Option<String>>,
    prompts: Vec<String>,
}

impl MockLineReader {
    /// Create a reader that answers every prompt successfully, in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::scripted(lines.into_iter().map(|line| Some(line.into())))
    }

    /// Create a reader from answers where `None` stands for a failed read
    pub fn scripted<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt the reader was asked, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of read calls made so far
    pub fn read_count(&self) -> usize {
        self.prompts.len()
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineReader for MockLineReader {
    fn read(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Some(line)) => Ok(line),
            Some(None) => Err(anyhow!("Scripted read failure")),
            None => Err(anyhow!("No scripted input left")),
        }
    }

    fn is_closed(&self) -> bool {
        self.answers.is_empty()
    }
}

/// One recorded output call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Success(String),
    Error(String),
    General(String),
}

/// Output sink that records every call for verification
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Vec<OutputLine>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn successes(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                OutputLine::Success(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                OutputLine::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn generals(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                OutputLine::General(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Output for RecordingOutput {
    fn success(&mut self, text: &str) {
        self.lines.push(OutputLine::Success(text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.lines.push(OutputLine::Error(text.to_string()));
    }

    fn general(&mut self, text: &str) {
        self.lines.push(OutputLine::General(text.to_string()));
    }
}
