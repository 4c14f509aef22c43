// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use reqwest::Client;

use crate::error::FlushError;

/// Builds the HTTP client used for delivery, with rustls and the client's
/// default timeouts.
pub fn get_client() -> Result<Client, FlushError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .build()
        .map_err(|e| FlushError::Client(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_client() {
        assert!(get_client().is_ok());
    }
}
