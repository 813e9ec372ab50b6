//! # Data Commands
//!
//! GET, POST, UPDATE and DELETE share one shape: gather fields, build an
//! envelope, send it, classify the outcome. Each command only decides which
//! fields it asks for, which verb it uses and which status means success.

use anyhow::{Context, Result};

use crate::repl::io::{LineReader, Output};
use crate::repl::services::{
    build_insert_envelope, build_select_envelope, build_update_envelope, Envelope, Outcome,
    QueryTriple, Transport, Verb,
};

/// Trait for commands that send a request to MatchaDB
pub trait DataCommand {
    /// Keyword, for logs
    fn name(&self) -> &'static str;

    /// HTTP verb the envelope is sent with
    fn verb(&self) -> Verb;

    /// Status that counts as success
    fn expected_status(&self) -> u16;

    /// Prompt for every field in order and build the envelope.
    ///
    /// Stops at the first field that cannot be read.
    fn gather(&self, reader: &mut dyn LineReader) -> Result<Envelope>;
}

/// Retrieve rows (GET, expects 200)
pub struct GetCommand;

impl DataCommand for GetCommand {
    fn name(&self) -> &'static str {
        "GET"
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }

    fn expected_status(&self) -> u16 {
        200
    }

    fn gather(&self, reader: &mut dyn LineReader) -> Result<Envelope> {
        let table = gather_field(reader, "From")?;
        let select = gather_triple(reader, "Select")?;
        Ok(build_select_envelope(&table, select))
    }
}

/// Insert rows (POST, expects 201)
pub struct PostCommand;

impl DataCommand for PostCommand {
    fn name(&self) -> &'static str {
        "POST"
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }

    fn expected_status(&self) -> u16 {
        201
    }

    fn gather(&self, reader: &mut dyn LineReader) -> Result<Envelope> {
        let table = gather_field(reader, "From")?;
        let select = gather_triple(reader, "Select")?;
        let insert = gather_field(reader, "Insert")?;
        Ok(build_insert_envelope(&table, select, &insert))
    }
}

/// Update rows (PUT, expects 200)
pub struct UpdateCommand;

impl DataCommand for UpdateCommand {
    fn name(&self) -> &'static str {
        "UPDATE"
    }

    fn verb(&self) -> Verb {
        Verb::Put
    }

    fn expected_status(&self) -> u16 {
        200
    }

    fn gather(&self, reader: &mut dyn LineReader) -> Result<Envelope> {
        let table = gather_field(reader, "From")?;
        let select = gather_triple(reader, "Select")?;
        let update = gather_triple(reader, "Update")?;
        Ok(build_update_envelope(&table, select, update))
    }
}

/// Remove rows (DELETE, expects 204)
pub struct DeleteCommand;

impl DataCommand for DeleteCommand {
    fn name(&self) -> &'static str {
        "DELETE"
    }

    fn verb(&self) -> Verb {
        Verb::Delete
    }

    fn expected_status(&self) -> u16 {
        204
    }

    fn gather(&self, reader: &mut dyn LineReader) -> Result<Envelope> {
        let table = gather_field(reader, "From")?;
        let select = gather_triple(reader, "Select")?;
        Ok(build_select_envelope(&table, select))
    }
}

fn gather_field(reader: &mut dyn LineReader, label: &str) -> Result<String> {
    reader
        .read(label)
        .with_context(|| format!("An error was seen when gathering the {label} input"))
}

fn gather_triple(reader: &mut dyn LineReader, fragment: &str) -> Result<QueryTriple> {
    let key = gather_field(reader, &format!("{fragment} (key)"))?;
    let operator = gather_field(reader, &format!("{fragment} (operation)"))?;
    let value = gather_field(reader, &format!("{fragment} (value)"))?;
    Ok(QueryTriple::new(key, operator, value))
}

/// Run one data command from field prompts to displayed result
pub fn run_data_command(
    command: &dyn DataCommand,
    reader: &mut dyn LineReader,
    transport: &dyn Transport,
    output: &mut dyn Output,
) {
    let envelope = match command.gather(reader) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!("{} aborted: {:#}", command.name(), e);
            output.error(&e.to_string());
            return;
        }
    };

    tracing::debug!("{} envelope: {:?}", command.name(), envelope);
    let outcome = transport.request(command.verb(), &envelope);
    classify(&outcome, command.expected_status(), output);
}

/// Show an outcome as success or error
pub fn classify(outcome: &Outcome, expected_status: u16, output: &mut dyn Output) {
    match outcome {
        Outcome::Failure(message) => output.error(message),
        Outcome::Response { status, body } if *status == expected_status => {
            output.success(&format!("{status} : {body}"))
        }
        Outcome::Response { status, body } => output.error(&format!("{status} : {body}")),
    }
}
