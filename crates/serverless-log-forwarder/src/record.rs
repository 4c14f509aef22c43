// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Raw records pushed by the Lambda Logs API and invocation lookup.
//!
//! A batch is a JSON array of `{ "time", "type", "record" }` objects. The
//! `record` field is a map for platform events and a plain string for lines
//! written by the function, so both are kept as a tagged [`RecordBody`] and
//! the caller matches on it instead of asserting a shape.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::RecordError;

const PLATFORM_START: &str = "platform.start";
const FUNCTION: &str = "function";
const REQUEST_ID_KEY: &str = "requestId";

/// Category of a record, taken from its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LogType {
    /// Marks the beginning of an invocation and carries its request id.
    PlatformStart,
    /// A line written by the function's own code.
    Function,
    /// Any other platform or extension event.
    Other(String),
}

impl From<String> for LogType {
    fn from(value: String) -> Self {
        match value.as_str() {
            PLATFORM_START => LogType::PlatformStart,
            FUNCTION => LogType::Function,
            _ => LogType::Other(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordBody {
    Line(String),
    Structured(Map<String, Value>),
    Other(Value),
}

impl Default for RecordBody {
    fn default() -> Self {
        RecordBody::Other(Value::Null)
    }
}

impl RecordBody {
    /// Text forwarded for this record. Structured bodies, emitted when the
    /// function uses the JSON log format, are forwarded as their JSON text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            RecordBody::Line(line) => line.clone(),
            RecordBody::Structured(map) => Value::Object(map.clone()).to_string(),
            RecordBody::Other(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLogRecord {
    #[serde(default)]
    pub time: String,
    #[serde(rename = "type")]
    pub log_type: LogType,
    #[serde(default)]
    pub record: RecordBody,
}

impl RawLogRecord {
    #[must_use]
    pub fn new(time: impl Into<String>, log_type: LogType, record: RecordBody) -> Self {
        RawLogRecord {
            time: time.into(),
            log_type,
            record,
        }
    }

    #[must_use]
    pub fn function(time: impl Into<String>, line: impl Into<String>) -> Self {
        Self::new(time, LogType::Function, RecordBody::Line(line.into()))
    }

    #[must_use]
    pub fn is_function(&self) -> bool {
        self.log_type == LogType::Function
    }

    #[must_use]
    pub fn is_invocation_start(&self) -> bool {
        self.log_type == LogType::PlatformStart
    }
}

/// Decodes a Logs API batch.
pub fn parse_batch(data: &[u8]) -> Result<Vec<RawLogRecord>, RecordError> {
    Ok(serde_json::from_slice(data)?)
}

/// Returns the request id of the first `platform.start` record.
///
/// `Ok(None)` means the batch carries no start record. Only the first start
/// record is inspected; a malformed one is an error even when a later one is
/// well formed.
pub fn find_request_id(records: &[RawLogRecord]) -> Result<Option<String>, RecordError> {
    let Some(start) = records.iter().find(|r| r.is_invocation_start()) else {
        return Ok(None);
    };

    let RecordBody::Structured(map) = &start.record else {
        return Err(RecordError::StartRecordNotAnObject {
            time: start.time.clone(),
        });
    };

    match map.get(REQUEST_ID_KEY) {
        Some(Value::String(request_id)) => Ok(Some(request_id.clone())),
        _ => Err(RecordError::MissingRequestId {
            time: start.time.clone(),
        }),
    }
}

/// Invocation a batch belongs to. The request id is empty when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
}

impl InvocationContext {
    /// Looks up the request id, treating a malformed start record as unknown.
    #[must_use]
    pub fn from_records(records: &[RawLogRecord]) -> Self {
        let request_id = match find_request_id(records) {
            Ok(request_id) => request_id.unwrap_or_default(),
            Err(e) => {
                warn!("LOGS | Forwarding batch without request id: {e}");
                String::new()
            }
        };
        InvocationContext { request_id }
    }
}
