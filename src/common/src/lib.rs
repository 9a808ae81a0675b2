// Copyright 2025 The TencentCloud Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tencent Cloud client library helpers.
//!
//! This crate contains the types shared by all the Tencent Cloud client
//! libraries for Rust:
//!
//! - the request and response envelopes carried by every API operation,
//! - the JSON codec used to produce request bodies and to parse responses,
//! - the error type returned by all the client libraries,
//! - the configuration used to initialize clients.
//!
//! The service crates (one per API version) contain the records for each
//! operation and a client with one method per operation. Those methods
//! populate the request envelope and call [transport::execute].
//!
//! Signing, retries and the HTTP client itself are *not* implemented here,
//! they are provided by an implementation of [transport::Transport].

/// The core error returned by all client libraries, and the structured
/// error details returned by the service.
pub mod error;

/// Credentials used to sign requests.
pub mod credentials;

/// The JSON codec for requests and responses.
pub mod message;

/// Client configuration.
pub mod options;

/// The request envelope, and the trait implemented by every request record.
pub mod request;

/// The response envelope and the generic response wrapper.
pub mod response;

/// The seam between the client libraries and the HTTP transport.
pub mod transport;

/// The result type returned by all client library functions.
pub type Result<T> = std::result::Result<T, error::Error>;
