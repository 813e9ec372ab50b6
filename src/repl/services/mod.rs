//! # Services Layer
//!
//! Request building and transport used by the command handlers.
//!
//! - `envelope` turns gathered fields into the MatchaDB query payload
//! - `http` sends that payload and reports an `Outcome`
//! - `mock` stands in for `http` in tests

pub mod envelope;
pub mod http;
pub mod mock;

// Re-export service types
pub use envelope::{
    build_insert_envelope, build_select_envelope, build_update_envelope, Envelope, InsertPayload,
    QueryTriple, WireFormat,
};
pub use http::{Endpoint, HttpService, Outcome, Transport, Verb};
