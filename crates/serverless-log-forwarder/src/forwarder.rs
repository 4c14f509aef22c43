// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use tracing::{debug, error};

use crate::config::Config;
use crate::destination::Destination;
use crate::error::FlushError;
use crate::flusher::LogsFlusher;
use crate::payload::build_payload;
use crate::record::{parse_batch, InvocationContext, RawLogRecord};
use crate::sink::LogSink;

/// Runs one batch through classification, payload building and delivery.
///
/// Batches are handled one at a time by the caller; nothing is kept between
/// calls.
#[derive(Clone)]
pub struct LogsForwarder {
    config: Arc<Config>,
    flusher: LogsFlusher,
}

impl LogsForwarder {
    pub fn new(config: Arc<Config>, sink: Arc<dyn LogSink>) -> Result<Self, FlushError> {
        Ok(LogsForwarder {
            config,
            flusher: LogsFlusher::new(sink)?,
        })
    }

    /// Forwards the function lines of `records` and returns the delivery
    /// status, `0` when there was nothing to send.
    pub async fn forward(
        &self,
        records: &[RawLogRecord],
        account_id: &str,
    ) -> Result<u16, FlushError> {
        let invocation = InvocationContext::from_records(records);
        debug!(
            "LOGS | Received {} records for request {:?}",
            records.len(),
            invocation.request_id
        );

        let payload = build_payload(
            records,
            &invocation.request_id,
            account_id,
            &self.config.metadata(),
        );
        if payload.log_events.is_empty() {
            return Ok(0);
        }

        let destination = Destination::resolve(&self.config).map_err(|e| {
            error!("LOGS | Dropping batch: {e}");
            FlushError::from(e)
        })?;

        match self.flusher.deliver(&payload, &destination).await {
            Ok(status) => {
                debug!(
                    "LOGS | Forwarded {} events to {destination:?}, status {status}",
                    payload.log_events.len()
                );
                Ok(status)
            }
            Err(e) => {
                error!("LOGS | Failed to forward logs to {destination:?}: {e}");
                Err(e)
            }
        }
    }

    /// Same as [`LogsForwarder::forward`] for a batch still in its JSON form.
    pub async fn forward_raw(&self, data: &[u8], account_id: &str) -> Result<u16, FlushError> {
        let records = parse_batch(data).map_err(|e| {
            error!("LOGS | Dropping batch: {e}");
            FlushError::from(e)
        })?;
        self.forward(&records, account_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    #[derive(Default)]
    struct CapturingSink {
        lines: Mutex<Vec<String>>,
    }

    impl LogSink for CapturingSink {
        fn emit(&self, line: &str) {
            self.lines.lock().unwrap().push(line.to_string());
        }
    }

    fn sink_config() -> Config {
        Config {
            region: "us-east-1".to_string(),
            function_name: "my-function".to_string(),
            org_id: "org-123".to_string(),
            log_to_sink: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_forward_to_sink() {
        let sink = Arc::new(CapturingSink::default());
        let forwarder = LogsForwarder::new(Arc::new(sink_config()), sink.clone()).unwrap();
        let batch = br#"[
            {"time": "2022-10-12T00:00:00.000Z", "type": "platform.start", "record": {"requestId": "abc"}},
            {"time": "2022-10-12T00:00:00.010Z", "type": "function", "record": "hello"}
        ]"#;

        let status = forwarder.forward_raw(batch, "acct1").await.unwrap();

        assert_eq!(status, 200);
        assert_eq!(sink.lines.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_marker_only_batch_is_not_sent() {
        let sink = Arc::new(CapturingSink::default());
        let forwarder = LogsForwarder::new(Arc::new(sink_config()), sink.clone()).unwrap();
        let records = vec![RawLogRecord::function(
            "2022-10-12T00:00:00.000Z",
            "SERVERLESS_TELEMETRY.debug",
        )];

        let status = forwarder.forward(&records, "acct1").await.unwrap();

        assert_eq!(status, 0);
        assert!(sink.lines.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_runtime_api_is_reported() {
        let config = Config {
            internal_log_only: true,
            runtime_api: None,
            ..Default::default()
        };
        let forwarder =
            LogsForwarder::new(Arc::new(config), Arc::new(CapturingSink::default())).unwrap();
        let records = vec![RawLogRecord::function("2022-10-12T00:00:00.000Z", "hello")];

        let err = forwarder.forward(&records, "acct1").await.unwrap_err();

        assert!(matches!(
            err,
            FlushError::Config(ConfigError::MissingRuntimeApi)
        ));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_invalid_batch_is_dropped() {
        let sink = Arc::new(CapturingSink::default());
        let forwarder = LogsForwarder::new(Arc::new(sink_config()), sink.clone()).unwrap();

        let err = forwarder.forward_raw(b"not json", "acct1").await.unwrap_err();

        assert!(matches!(err, FlushError::Batch(_)));
        assert!(sink.lines.lock().unwrap().is_empty());
        assert!(logs_contain("Dropping batch"));
    }
}
