// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Protobuf messages of the `serverless.instrumentation.v1` log schema.
//!
//! Only the fields this forwarder populates are declared; decoders skip
//! unknown tags, so payloads stay readable by the full schema.

/// Value of the `platform` tag for every payload sent from Lambda.
pub const PLATFORM_AWS: &str = "aws";

/// `serverless.instrumentation.tags.v1.SlsTags`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SlsTags {
    #[prost(string, tag = "1")]
    pub org_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "2")]
    pub platform: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "3")]
    pub region: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, tag = "4")]
    pub service: ::prost::alloc::string::String,
}

/// `serverless.instrumentation.v1.LogEvent`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogEvent {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
    /// Milliseconds since the Unix epoch.
    #[prost(uint64, tag = "2")]
    pub timestamp: u64,
    #[prost(string, tag = "3")]
    pub sequence_id: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "4")]
    pub log_group: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "5")]
    pub log_stream: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "6")]
    pub account_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "7")]
    pub request_id: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "8")]
    pub trace_id: ::core::option::Option<::prost::alloc::string::String>,
}

/// `serverless.instrumentation.v1.LogPayload`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogPayload {
    #[prost(message, optional, tag = "1")]
    pub sls_tags: ::core::option::Option<SlsTags>,
    #[prost(message, repeated, tag = "2")]
    pub log_events: ::prost::alloc::vec::Vec<LogEvent>,
}
