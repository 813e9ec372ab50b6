//! # HTTP Service
//!
//! Sends query envelopes to MatchaDB and folds whatever happens into an
//! `Outcome`. Every call is a single attempt.

use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::Method;
use std::fmt;
use std::time::Duration;

use super::envelope::{Envelope, WireFormat};
use crate::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROTOCOL};

/// Message for failures where no response was obtained
pub const CONNECTION_ERROR: &str = "A connection error has occurred.";

/// Prefix for every other failure
pub const UNIDENTIFIED_ERROR_PREFIX: &str = "An unidentified error has occurred: ";

/// Where MatchaDB lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    protocol: String,
    host: String,
    port: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

impl Endpoint {
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port: port.into(),
        }
    }

    /// Defaults with any provided parts replaced
    pub fn with_overrides(protocol: Option<&str>, host: Option<&str>, port: Option<&str>) -> Self {
        Self::new(
            protocol.unwrap_or(DEFAULT_PROTOCOL),
            host.unwrap_or(DEFAULT_HOST),
            port.unwrap_or(DEFAULT_PORT),
        )
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// `protocol + host + ":" + port + "/"`
    pub fn url(&self) -> String {
        format!("{}{}:{}/", self.protocol, self.host, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// HTTP methods a command can be sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method().as_str())
    }
}

/// Result of one transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A response came back, whatever its status
    Response { status: u16, body: String },
    /// No usable response; the message is shown to the operator as is
    Failure(String),
}

/// Sends envelopes somewhere and reports what happened
pub trait Transport {
    fn endpoint(&self) -> &Endpoint;

    fn request(&self, verb: Verb, envelope: &Envelope) -> Outcome;
}

/// Transport backed by a blocking reqwest client
pub struct HttpService {
    client: Client,
    endpoint: Endpoint,
    wire_format: WireFormat,
}

impl HttpService {
    /// Create a new HttpService for an endpoint
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        Self::with_options(endpoint, WireFormat::default(), None)
    }

    /// Create a service with an explicit wire format and optional timeout
    pub fn with_options(
        endpoint: Endpoint,
        wire_format: WireFormat,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        tracing::debug!("Creating HttpService for {}", endpoint);
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            wire_format,
        })
    }

    fn send(&self, verb: Verb, body: String) -> reqwest::Result<Outcome> {
        let response = self
            .client
            .request(verb.method(), self.endpoint.url())
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(Outcome::Response { status, body })
    }
}

impl Transport for HttpService {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn request(&self, verb: Verb, envelope: &Envelope) -> Outcome {
        let body = match envelope.encode(self.wire_format) {
            Ok(body) => body,
            Err(e) => return Outcome::Failure(unidentified(&e)),
        };
        tracing::debug!("{} {} body={}", verb, self.endpoint, body);

        match self.send(verb, body) {
            Ok(outcome) => {
                tracing::debug!("Received {:?}", outcome);
                outcome
            }
            Err(e) if e.is_connect() || e.is_timeout() => {
                tracing::warn!("Connection to {} failed: {}", self.endpoint, e);
                Outcome::Failure(CONNECTION_ERROR.to_string())
            }
            Err(e) => {
                tracing::warn!("HTTP request failed: {}", e);
                Outcome::Failure(unidentified(&e))
            }
        }
    }
}

fn unidentified(cause: &dyn fmt::Display) -> String {
    format!("{UNIDENTIFIED_ERROR_PREFIX}{cause}.")
}
