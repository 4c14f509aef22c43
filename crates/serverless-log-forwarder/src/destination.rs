// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::config::Config;
use crate::error::ConfigError;

pub const PROD_INGEST_URL: &str = "https://core.serverless.com/api/ingest/forwarder";
pub const DEV_INGEST_URL: &str = "https://core.serverless-dev.com/api/ingest/forwarder";
const RUNTIME_TEST_PATH: &str = "/logs/save";

/// Where a payload is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The local log sink, used by integration tests.
    LocalSink,
    /// The test server listening on the Lambda runtime API address.
    LocalRuntimeTest { runtime_api: String },
    RemoteDev,
    RemoteProd,
}

impl Destination {
    /// Picks the destination for the next delivery.
    ///
    /// Precedence: sink, runtime test server, dev stage, production.
    pub fn resolve(config: &Config) -> Result<Destination, ConfigError> {
        if config.log_to_sink {
            return Ok(Destination::LocalSink);
        }
        if config.internal_log_only {
            return match &config.runtime_api {
                Some(runtime_api) if !runtime_api.is_empty() => {
                    Ok(Destination::LocalRuntimeTest {
                        runtime_api: runtime_api.clone(),
                    })
                }
                _ => Err(ConfigError::MissingRuntimeApi),
            };
        }
        if config.dev_stage {
            return Ok(Destination::RemoteDev);
        }
        Ok(Destination::RemoteProd)
    }

    /// URL to POST to, `None` for the local sink.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        match self {
            Destination::LocalSink => None,
            Destination::LocalRuntimeTest { runtime_api } => {
                Some(format!("http://{runtime_api}{RUNTIME_TEST_PATH}"))
            }
            Destination::RemoteDev => Some(DEV_INGEST_URL.to_string()),
            Destination::RemoteProd => Some(PROD_INGEST_URL.to_string()),
        }
    }
}
