//! # REPL Module
//!
//! The interactive side of whisk, split the way data flows through one
//! command:
//!
//! ```text
//! ┌──────────────┐   keyword   ┌──────────────┐  envelope  ┌──────────────┐
//! │    Engine    │────────────▶│   Commands   │───────────▶│   Services   │
//! │              │             │              │            │              │
//! │ - Menu       │             │ - Field      │  Outcome   │ - Envelope   │
//! │ - Dispatch   │             │   prompts    │◀───────────│ - HTTP       │
//! │ - Loop state │             │ - Classify   │            │              │
//! └──────┬───────┘             └──────┬───────┘            └──────────────┘
//!        │                            │
//!        ▼                            ▼
//! ┌─────────────────────────────────────────┐
//! │  I/O: LineReader + Output (+ Display)   │
//! └─────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod display;
pub mod engine;
pub mod io;
pub mod services;

// Re-export core types
pub use commands::Command;
pub use display::{Display, DisplayColor, MessageKind};
pub use engine::{Engine, EngineState};
pub use io::{ConsoleLineReader, ConsoleOutput, LineReader, Output};
pub use services::{
    Endpoint, Envelope, HttpService, Outcome, QueryTriple, Transport, Verb, WireFormat,
};
