// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Delivery of a [`LogPayload`] to its [`Destination`].
//!
//! The payload is protobuf-encoded, base64-encoded into the `payload` field of
//! a JSON object and sent with a single POST. There is no retry: the status
//! (or the error) goes back to the caller, which decides whether to log and
//! drop the batch.

use std::sync::Arc;

use base64::Engine;
use prost::Message;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, error};

use crate::destination::Destination;
use crate::error::FlushError;
use crate::http::get_client;
use crate::proto::LogPayload;
use crate::sink::LogSink;

/// Status reported when the payload was written to the local sink.
pub const SINK_STATUS: u16 = 200;

#[derive(Serialize)]
struct Envelope<'a> {
    payload: &'a str,
}

/// Serializes `payload` into the JSON body sent to the ingestion API.
pub fn encode_envelope(payload: &LogPayload) -> Result<String, FlushError> {
    let mut bytes = Vec::with_capacity(payload.encoded_len());
    payload.encode(&mut bytes)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(serde_json::to_string(&Envelope { payload: &encoded })?)
}

#[derive(Clone)]
pub struct LogsFlusher {
    client: reqwest::Client,
    sink: Arc<dyn LogSink>,
}

impl LogsFlusher {
    pub fn new(sink: Arc<dyn LogSink>) -> Result<Self, FlushError> {
        Ok(LogsFlusher {
            client: get_client()?,
            sink,
        })
    }

    /// Sends `payload` and returns the HTTP status.
    ///
    /// An empty payload is not sent and yields `0`. The local sink yields
    /// [`SINK_STATUS`]. A non-2xx answer is returned as
    /// [`FlushError::Status`].
    pub async fn deliver(
        &self,
        payload: &LogPayload,
        destination: &Destination,
    ) -> Result<u16, FlushError> {
        if payload.log_events.is_empty() {
            debug!("LOGS | No log events to send, skipping delivery");
            return Ok(0);
        }

        let body = encode_envelope(payload).map_err(|e| {
            error!("LOGS | Dropping batch, failed to build request body: {e}");
            e
        })?;

        let Some(url) = destination.url() else {
            self.sink.emit(&body);
            return Ok(SINK_STATUS);
        };

        debug!(
            "LOGS | Sending {} events to {url}",
            payload.log_events.len()
        );
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(FlushError::Status(status))
        }
    }
}
