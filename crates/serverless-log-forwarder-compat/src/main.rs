// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::{env, process::ExitCode, sync::Arc};
use tokio::io::AsyncReadExt;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use serverless_log_forwarder::{
    config::{Config, SLS_EXTENSION_LOG_LEVEL},
    forwarder::LogsForwarder,
    sink::StdoutSink,
};

/// Forwards the Logs API batch read from stdin. The AWS account id is the
/// only argument.
#[tokio::main]
pub async fn main() -> ExitCode {
    let log_level = env::var(SLS_EXTENSION_LOG_LEVEL)
        .map(|val| val.to_lowercase())
        .unwrap_or("info".to_string());

    let env_filter = format!("h2=off,hyper=off,rustls=off,{}", log_level);

    let filter = match EnvFilter::try_new(env_filter) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("could not parse log level in configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Diagnostics go to stderr, stdout is the payload sink.
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .without_time()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    debug!("Logging subsystem enabled");

    let Some(account_id) = env::args().nth(1) else {
        error!("Usage: serverless-log-forwarder-compat <account-id> < batch.json");
        return ExitCode::FAILURE;
    };

    let config = Arc::new(Config::new());

    let forwarder = match LogsForwarder::new(config, Arc::new(StdoutSink)) {
        Ok(forwarder) => forwarder,
        Err(e) => {
            error!("Error creating log forwarder: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut batch = Vec::new();
    if let Err(e) = tokio::io::stdin().read_to_end(&mut batch).await {
        error!("Failed to read log batch from stdin: {e}");
        return ExitCode::FAILURE;
    }

    match forwarder.forward_raw(&batch, &account_id).await {
        Ok(0) => {
            info!("No function logs to forward");
            ExitCode::SUCCESS
        }
        Ok(status) => {
            info!("Forwarded logs, status {status}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to forward logs (status {:?}): {e}", e.status_code());
            ExitCode::FAILURE
        }
    }
}
