// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Log forwarding for the Serverless dev-mode Lambda extension.
//!
//! A batch of records pushed by the Lambda Logs API flows through four stages:
//!
//! ```text
//!   Logs API batch
//!        │
//!        v
//!   ┌─────────────┐
//!   │  Classify   │  (find the invocation request id)
//!   └──────┬──────┘
//!          v
//!   ┌─────────────┐
//!   │  Payload    │  (function lines -> protobuf LogEvents)
//!   └──────┬──────┘
//!          v
//!   ┌─────────────┐
//!   │ Destination │  (sink / runtime test server / dev / prod)
//!   └──────┬──────┘
//!          v
//!   ┌─────────────┐
//!   │  Flusher    │  (base64 protobuf in a JSON envelope, one POST)
//!   └─────────────┘
//! ```
//!
//! Delivery is best effort: one attempt per batch, no retry and no buffering.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod config;
pub mod destination;
pub mod error;
pub mod flusher;
pub mod forwarder;
pub mod http;
pub mod payload;
pub mod proto;
pub mod record;
pub mod sink;
