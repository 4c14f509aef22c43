// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Errors raised while reading a Logs API batch.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Invalid log batch: {0}")]
    InvalidBatch(#[from] serde_json::Error),

    #[error("platform.start record at {time} is not a JSON object")]
    StartRecordNotAnObject { time: String },

    #[error("platform.start record at {time} has no string requestId")]
    MissingRequestId { time: String },
}

/// Configuration gaps detected while resolving where to deliver a batch.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("AWS_LAMBDA_RUNTIME_API is not set but SLS_TEST_EXTENSION_INTERNAL_LOG requires it")]
    MissingRuntimeApi,
}

/// Errors raised while delivering a payload.
#[derive(Debug, thiserror::Error)]
pub enum FlushError {
    #[error("Failed to read log batch: {0}")]
    Batch(#[from] RecordError),

    #[error("Failed to encode log payload: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("Failed to serialize request body: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Failed to resolve destination: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ingestion endpoint answered with {0}")]
    Status(StatusCode),
}

impl FlushError {
    /// HTTP status observed before the failure, if the request got that far.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FlushError::Status(status) => Some(status.as_u16()),
            FlushError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
