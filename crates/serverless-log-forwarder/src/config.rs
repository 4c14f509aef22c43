// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::env;

pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_LAMBDA_FUNCTION_NAME: &str = "AWS_LAMBDA_FUNCTION_NAME";
pub const AWS_LAMBDA_LOG_GROUP_NAME: &str = "AWS_LAMBDA_LOG_GROUP_NAME";
pub const AWS_LAMBDA_LOG_STREAM_NAME: &str = "AWS_LAMBDA_LOG_STREAM_NAME";
pub const AWS_LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";
pub const SLS_DEV_MODE_ORG_ID: &str = "SLS_DEV_MODE_ORG_ID";
/// Integration tests: write payloads to the local sink instead of sending them.
pub const SLS_TEST_EXTENSION_LOG: &str = "SLS_TEST_EXTENSION_LOG";
/// Unit tests: send payloads to the local runtime API test server.
pub const SLS_TEST_EXTENSION_INTERNAL_LOG: &str = "SLS_TEST_EXTENSION_INTERNAL_LOG";
pub const SERVERLESS_PLATFORM_STAGE: &str = "SERVERLESS_PLATFORM_STAGE";
pub const SLS_EXTENSION_LOG_LEVEL: &str = "SLS_EXTENSION_LOG_LEVEL";

/// Process-wide settings, read once from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub region: String,
    /// Lambda function name, reported as the `service` tag.
    pub function_name: String,
    pub org_id: String,
    pub log_group: String,
    pub log_stream: String,
    pub log_to_sink: bool,
    pub internal_log_only: bool,
    pub dev_stage: bool,
    /// `host:port` of the Lambda runtime API.
    pub runtime_api: Option<String>,
}

/// Environment metadata attached to every outgoing payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvMetadata<'a> {
    pub region: &'a str,
    pub service: &'a str,
    pub org_id: &'a str,
    pub log_group: &'a str,
    pub log_stream: &'a str,
}

impl Config {
    #[must_use]
    pub fn new() -> Config {
        Config {
            region: env_string(AWS_REGION),
            function_name: env_string(AWS_LAMBDA_FUNCTION_NAME),
            org_id: env_string(SLS_DEV_MODE_ORG_ID),
            log_group: env_string(AWS_LAMBDA_LOG_GROUP_NAME),
            log_stream: env_string(AWS_LAMBDA_LOG_STREAM_NAME),
            log_to_sink: env_flag(SLS_TEST_EXTENSION_LOG),
            internal_log_only: env_flag(SLS_TEST_EXTENSION_INTERNAL_LOG),
            dev_stage: env_flag(SERVERLESS_PLATFORM_STAGE),
            runtime_api: env::var(AWS_LAMBDA_RUNTIME_API).ok(),
        }
    }

    #[must_use]
    pub fn metadata(&self) -> EnvMetadata<'_> {
        EnvMetadata {
            region: &self.region,
            service: &self.function_name,
            org_id: &self.org_id,
            log_group: &self.log_group,
            log_stream: &self.log_stream,
        }
    }
}

fn env_string(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

// Presence is what matters, an empty value still sets the flag.
fn env_flag(key: &str) -> bool {
    env::var_os(key).is_some()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    use super::*;

    const ALL_VARS: [&str; 10] = [
        AWS_REGION,
        AWS_LAMBDA_FUNCTION_NAME,
        AWS_LAMBDA_LOG_GROUP_NAME,
        AWS_LAMBDA_LOG_STREAM_NAME,
        AWS_LAMBDA_RUNTIME_API,
        SLS_DEV_MODE_ORG_ID,
        SLS_TEST_EXTENSION_LOG,
        SLS_TEST_EXTENSION_INTERNAL_LOG,
        SERVERLESS_PLATFORM_STAGE,
        SLS_EXTENSION_LOG_LEVEL,
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_with_empty_environment() {
        clear_env();
        let config = Config::new();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_reads_metadata_from_environment() {
        clear_env();
        env::set_var(AWS_REGION, "us-east-1");
        env::set_var(AWS_LAMBDA_FUNCTION_NAME, "my-function");
        env::set_var(SLS_DEV_MODE_ORG_ID, "org-123");
        env::set_var(AWS_LAMBDA_LOG_GROUP_NAME, "/aws/lambda/my-function");
        env::set_var(AWS_LAMBDA_LOG_STREAM_NAME, "2022/10/12/[$LATEST]abcdef");

        let config = Config::new();
        let metadata = config.metadata();
        assert_eq!(metadata.region, "us-east-1");
        assert_eq!(metadata.service, "my-function");
        assert_eq!(metadata.org_id, "org-123");
        assert_eq!(metadata.log_group, "/aws/lambda/my-function");
        assert_eq!(metadata.log_stream, "2022/10/12/[$LATEST]abcdef");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_flags_are_presence_based() {
        clear_env();
        env::set_var(SLS_TEST_EXTENSION_LOG, "");
        env::set_var(SERVERLESS_PLATFORM_STAGE, "dev");
        env::set_var(AWS_LAMBDA_RUNTIME_API, "127.0.0.1:9001");

        let config = Config::new();
        assert!(config.log_to_sink);
        assert!(!config.internal_log_only);
        assert!(config.dev_stage);
        assert_eq!(config.runtime_api.as_deref(), Some("127.0.0.1:9001"));
        clear_env();
    }
}
