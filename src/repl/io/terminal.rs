//! # Console I/O Implementations
//!
//! Production implementations of the I/O abstractions. Line editing goes
//! through rustyline when stdin is a terminal; piped input is read plainly.

use super::{format_prompt, LineReader, Output};
use crate::repl::display::{Display, MessageKind};
use anyhow::{anyhow, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Write};

enum InputSource {
    Editor(Box<DefaultEditor>),
    Plain(PlainLineReader<io::StdinLock<'static>, io::Stdout>),
}

/// Line reader bound to the process stdin
///
/// History lives only as long as the reader; it is never written to disk.
pub struct ConsoleLineReader {
    source: InputSource,
    pointer: String,
    closed: bool,
}

impl ConsoleLineReader {
    /// Create a reader that renders `pointer` after every prompt
    pub fn with_pointer(pointer: &str) -> Result<Self> {
        let source = if atty::is(atty::Stream::Stdin) {
            tracing::debug!("stdin is a terminal, enabling line editing");
            InputSource::Editor(Box::new(DefaultEditor::new()?))
        } else {
            tracing::debug!("stdin is not a terminal, reading plain lines");
            InputSource::Plain(PlainLineReader::with_io(
                io::stdin().lock(),
                io::stdout(),
                pointer,
            ))
        };

        Ok(Self {
            source,
            pointer: pointer.to_string(),
            closed: false,
        })
    }
}

impl LineReader for ConsoleLineReader {
    fn read(&mut self, prompt: &str) -> Result<String> {
        match &mut self.source {
            InputSource::Plain(plain) => plain.read(prompt),
            InputSource::Editor(editor) => {
                let prompt = format_prompt(prompt, &self.pointer);
                match editor.readline(&prompt) {
                    Ok(line) => {
                        if !line.trim().is_empty() {
                            let _ = editor.add_history_entry(line.as_str());
                        }
                        Ok(line)
                    }
                    Err(ReadlineError::Eof) => {
                        self.closed = true;
                        Err(anyhow!("End of input"))
                    }
                    Err(ReadlineError::Interrupted) => Err(anyhow!("Input interrupted")),
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    fn is_closed(&self) -> bool {
        match &self.source {
            InputSource::Editor(_) => self.closed,
            InputSource::Plain(plain) => plain.is_closed(),
        }
    }
}

/// Line reader over any buffered input, echoing prompts to a writer
///
/// Used for piped stdin. Line endings (`\n` or `\r\n`) are stripped.
pub struct PlainLineReader<R: BufRead, W: Write> {
    input: R,
    prompt_writer: W,
    pointer: String,
    closed: bool,
}

impl<R: BufRead, W: Write> PlainLineReader<R, W> {
    /// Create a reader with custom input and prompt writer
    pub fn with_io(input: R, prompt_writer: W, pointer: &str) -> Self {
        Self {
            input,
            prompt_writer,
            pointer: pointer.to_string(),
            closed: false,
        }
    }

    pub fn into_writer(self) -> W {
        self.prompt_writer
    }
}

impl<R: BufRead, W: Write> LineReader for PlainLineReader<R, W> {
    fn read(&mut self, prompt: &str) -> Result<String> {
        write!(self.prompt_writer, "{}", format_prompt(prompt, &self.pointer))?;
        self.prompt_writer.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Err(anyhow!("End of input"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Output sink that paints messages with a `Display` and writes them out
pub struct ConsoleOutput<W: Write> {
    writer: W,
    display: Display,
    color_enabled: bool,
}

impl ConsoleOutput<io::Stdout> {
    /// Colored output on stdout; color is dropped when stdout is not a terminal
    pub fn new(display: Display, color_enabled: bool) -> Self {
        let color_enabled = color_enabled && atty::is(atty::Stream::Stdout);
        Self::with_writer(io::stdout(), display, color_enabled)
    }
}

impl<W: Write> ConsoleOutput<W> {
    /// Create a console output with custom writer
    pub fn with_writer(writer: W, display: Display, color_enabled: bool) -> Self {
        Self {
            writer,
            display,
            color_enabled,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, kind: MessageKind, text: &str) {
        let line = if self.color_enabled {
            self.display.paint(kind, text)
        } else {
            text.to_string()
        };

        if let Err(e) = writeln!(self.writer, "{line}").and_then(|_| self.writer.flush()) {
            tracing::warn!("Failed to write console output: {}", e);
        }
    }
}

impl<W: Write> Output for ConsoleOutput<W> {
    fn success(&mut self, text: &str) {
        self.emit(MessageKind::Success, text);
    }

    fn error(&mut self, text: &str) {
        self.emit(MessageKind::Error, text);
    }

    fn general(&mut self, text: &str) {
        self.emit(MessageKind::General, text);
    }
}
