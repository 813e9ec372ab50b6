//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::net::SocketAddr;
use whisk::repl::engine::Engine;
use whisk::repl::io::{MockLineReader, RecordingOutput};
use whisk::repl::services::mock::MockTransport;
use whisk::repl::services::{Endpoint, Outcome};
use wiremock::MockServer;

pub type ScriptedEngine = Engine<MockLineReader, RecordingOutput, MockTransport>;

/// Engine whose operator types `lines` in order and whose transport answers `outcome`
pub fn scripted_engine(lines: &[&str], outcome: Outcome) -> ScriptedEngine {
    Engine::new(
        MockLineReader::new(lines.iter().copied()),
        RecordingOutput::new(),
        MockTransport::always(outcome),
    )
}

pub fn response(status: u16, body: &str) -> Outcome {
    Outcome::Response {
        status,
        body: body.to_string(),
    }
}

/// Endpoint pointing at a running mock server
pub fn endpoint_for(server: &MockServer) -> Endpoint {
    endpoint_for_addr(*server.address())
}

pub fn endpoint_for_addr(addr: SocketAddr) -> Endpoint {
    Endpoint::new("http://", addr.ip().to_string(), addr.port().to_string())
}
