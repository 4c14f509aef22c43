// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Conversion of function log lines into a [`LogPayload`].

use chrono::DateTime;
use tracing::{debug, warn};

use crate::config::EnvMetadata;
use crate::proto::{LogEvent, LogPayload, SlsTags, PLATFORM_AWS};
use crate::record::RawLogRecord;

/// Prefix of the extension's own diagnostic lines. They must never be
/// forwarded again.
pub const TELEMETRY_MARKER: &str = "SERVERLESS_TELEMETRY.";

/// Builds the payload for one batch.
///
/// Keeps function records in batch order, skipping the extension's own
/// telemetry lines. Tags are set even when no event survives.
#[must_use]
pub fn build_payload(
    records: &[RawLogRecord],
    request_id: &str,
    account_id: &str,
    metadata: &EnvMetadata<'_>,
) -> LogPayload {
    let log_events: Vec<LogEvent> = records
        .iter()
        .filter(|record| record.is_function())
        .filter_map(|record| {
            let message = record.record.message();
            if message.contains(TELEMETRY_MARKER) {
                return None;
            }
            Some(LogEvent {
                message,
                timestamp: timestamp_millis(&record.time),
                sequence_id: String::new(),
                log_group: Some(metadata.log_group.to_string()),
                log_stream: Some(metadata.log_stream.to_string()),
                account_id: Some(account_id.to_string()),
                request_id: Some(request_id.to_string()),
                trace_id: Some(String::new()),
            })
        })
        .collect();

    debug!(
        "LOGS | Built payload with {} events out of {} records",
        log_events.len(),
        records.len()
    );

    LogPayload {
        sls_tags: Some(SlsTags {
            org_id: metadata.org_id.to_string(),
            platform: Some(PLATFORM_AWS.to_string()),
            region: Some(metadata.region.to_string()),
            service: metadata.service.to_string(),
        }),
        log_events,
    }
}

/// Milliseconds since the Unix epoch for an RFC 3339 timestamp.
///
/// The event is still forwarded when the timestamp is unusable; it then
/// carries `0`, the same value used for instants before the epoch.
fn timestamp_millis(time: &str) -> u64 {
    match DateTime::parse_from_rfc3339(time) {
        Ok(parsed) => u64::try_from(parsed.timestamp_millis()).unwrap_or(0),
        Err(e) => {
            warn!("LOGS | Invalid timestamp {time:?}, sending 0: {e}");
            0
        }
    }
}
