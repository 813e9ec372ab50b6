//! # I/O Abstraction Layer
//!
//! Trait seams for the two console streams the engine talks to, so the
//! command loop can run against scripted input in tests.
//!
//! ## Architecture
//!
//! ```text
//! Production:  Engine ──▶ ConsoleLineReader ──▶ rustyline / PlainLineReader(stdin)
//!                     ──▶ ConsoleOutput     ──▶ stdout (crossterm colors)
//!
//! Testing:     Engine ──▶ MockLineReader    ──▶ VecDeque<Option<String>>
//!                     ──▶ RecordingOutput   ──▶ Vec<OutputLine>
//! ```

use anyhow::Result;

pub mod mock;
pub mod terminal;

// Re-export terminal implementations for convenience
pub use terminal::{ConsoleLineReader, ConsoleOutput, PlainLineReader};

// Re-export mock implementations for testing
pub use mock::{MockLineReader, OutputLine, RecordingOutput};

/// Format of the text shown before the operator types
pub fn format_prompt(prompt: &str, pointer: &str) -> String {
    format!("{prompt} {pointer}")
}

/// Source of operator input, one line per prompt
pub trait LineReader {
    /// Show `prompt` and block until one line is available.
    ///
    /// Any failure to obtain text (end of input, interrupt, I/O error) comes
    /// back as `Err`; callers treat it as "no usable input".
    fn read(&mut self, prompt: &str) -> Result<String>;

    /// True once the underlying input can no longer produce lines
    fn is_closed(&self) -> bool {
        false
    }
}

/// Sink for the three semantic kinds of console message
pub trait Output {
    fn success(&mut self, text: &str);

    fn error(&mut self, text: &str);

    fn general(&mut self, text: &str);
}
