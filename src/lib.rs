//! # Whisk - Interactive MatchaDB Tester
//!
//! Prompts an operator for the pieces of a MatchaDB query, sends the
//! resulting envelope over HTTP and reports how it went.
//!
//! ## Architecture
//!
//! ```text
//! main ──▶ cmd_args + config ──▶ Engine (blocking worker)
//!                                   │
//!                  ┌────────────────┼────────────────┐
//!                  ▼                ▼                ▼
//!             LineReader       HttpService        Output
//!          (rustyline/stdin)    (reqwest)     (crossterm colors)
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
