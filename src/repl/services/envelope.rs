//! # Query Envelope
//!
//! Builds the `From`/`Select`/`Insert`/`Update` payload MatchaDB expects and
//! encodes it for the request body.
//!
//! Field values are carried verbatim; nothing here validates a query.

use anyhow::{anyhow, Result};
use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;
use serde_json::value::RawValue;
use std::io;
use std::str::FromStr;

/// A `(key, operator, value)` filter or update action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTriple {
    pub key: String,
    pub operator: String,
    pub value: String,
}

impl QueryTriple {
    pub fn new(
        key: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

// On the wire a triple is a three element list
impl Serialize for QueryTriple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.key)?;
        tuple.serialize_element(&self.operator)?;
        tuple.serialize_element(&self.value)?;
        tuple.end()
    }
}

/// Request payload for one command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope {
    from: Vec<String>,
    select: Vec<QueryTriple>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insert: Option<InsertPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update: Option<Vec<QueryTriple>>,
}

/// Envelope for GET and DELETE
pub fn build_select_envelope(table: &str, select: QueryTriple) -> Envelope {
    Envelope {
        from: vec![table.to_string()],
        select: vec![select],
        insert: None,
        update: None,
    }
}

/// Envelope for POST. `insert` is the operator's raw text.
pub fn build_insert_envelope(table: &str, select: QueryTriple, insert: &str) -> Envelope {
    Envelope {
        insert: Some(InsertPayload::parse(insert)),
        ..build_select_envelope(table, select)
    }
}

/// Envelope for UPDATE (sent as PUT)
pub fn build_update_envelope(table: &str, select: QueryTriple, update: QueryTriple) -> Envelope {
    Envelope {
        update: Some(vec![update]),
        ..build_select_envelope(table, select)
    }
}

/// Insert text as the operator typed it
///
/// Text that parses as JSON is embedded untouched (key order, number
/// spelling and inner spacing survive); anything else travels as a JSON string.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum InsertPayload {
    Json(Box<RawValue>),
    Text(String),
}

impl InsertPayload {
    pub fn parse(raw: &str) -> Self {
        match RawValue::from_string(raw.to_string()) {
            Ok(json) => InsertPayload::Json(json),
            Err(_) => InsertPayload::Text(raw.to_string()),
        }
    }

    /// The payload text, without the quoting a `Text` payload gets on the wire
    pub fn as_str(&self) -> &str {
        match self {
            InsertPayload::Json(json) => json.get(),
            InsertPayload::Text(text) => text,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, InsertPayload::Json(_))
    }
}

impl PartialEq for InsertPayload {
    fn eq(&self, other: &Self) -> bool {
        self.is_json() == other.is_json() && self.as_str() == other.as_str()
    }
}

impl Envelope {
    pub fn from(&self) -> &[String] {
        &self.from
    }

    pub fn select(&self) -> &[QueryTriple] {
        &self.select
    }

    pub fn insert(&self) -> Option<&InsertPayload> {
        self.insert.as_ref()
    }

    pub fn update(&self) -> Option<&[QueryTriple]> {
        self.update.as_deref()
    }

    /// JSON text with `", "` and `": "` separators
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Request body in the requested wire format
    pub fn encode(&self, format: WireFormat) -> Result<String> {
        let json = self.to_json()?;
        Ok(match format {
            WireFormat::Json => json,
            WireFormat::Quoted => quote_literal(&json),
        })
    }
}

/// Wrap text as a single-quoted string literal, escaping `\` and `'`
fn quote_literal(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}

struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// How the envelope is laid out in the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// JSON wrapped in a single-quoted literal, the form MatchaDB has always received
    #[default]
    Quoted,
    /// Bare JSON
    Json,
}

impl FromStr for WireFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "quoted" => Ok(WireFormat::Quoted),
            "json" => Ok(WireFormat::Json),
            other => Err(anyhow!("Unknown wire format '{other}' (expected quoted or json)")),
        }
    }
}
