// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use tracing::error;

/// Synchronous sink for payloads that are written locally instead of sent.
pub trait LogSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Writes each payload as one line on standard output, where the Lambda
/// runtime picks it up as an extension log.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}").and_then(|()| stdout.flush()) {
            error!("LOGS | Failed to write to stdout: {e}");
        }
    }
}
