//! # Command Implementations
//!
//! The top-level command keywords and their handlers.
//!
//! - `data` holds GET, POST, UPDATE and DELETE, which talk to MatchaDB
//! - `help` prints the fixed description of a command

pub mod data;
pub mod help;

use std::fmt;

// Re-export commonly used commands
pub use data::{
    classify, run_data_command, DataCommand, DeleteCommand, GetCommand, PostCommand,
    UpdateCommand,
};
pub use help::{help_command, help_text};

/// Keyword names, in menu order
pub const COMMAND_NAMES: &str = "GET, POST, UPDATE, DELETE, HELP, EXIT";

/// A command keyword typed at the top-level prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Get,
    Post,
    Update,
    Delete,
    Help,
    Exit,
    /// Anything unrecognized; the loop simply prompts again
    Skip,
}

impl Command {
    /// Case-insensitive keyword lookup. Never fails.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_uppercase().as_str() {
            "GET" => Command::Get,
            "POST" => Command::Post,
            "UPDATE" => Command::Update,
            "DELETE" => Command::Delete,
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => Command::Skip,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Get => "GET",
            Command::Post => "POST",
            Command::Update => "UPDATE",
            Command::Delete => "DELETE",
            Command::Help => "HELP",
            Command::Exit => "EXIT",
            Command::Skip => "SKIP",
        }
    }

    /// Handler for the commands that send a request
    pub fn data_command(self) -> Option<&'static dyn DataCommand> {
        let handler: &'static dyn DataCommand = match self {
            Command::Get => &GetCommand,
            Command::Post => &PostCommand,
            Command::Update => &UpdateCommand,
            Command::Delete => &DeleteCommand,
            Command::Help | Command::Exit | Command::Skip => return None,
        };
        Some(handler)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
