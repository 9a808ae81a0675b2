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

//! Tencent Cloud Client Libraries for Rust - Cloud Virtual Machine API
//!
//! This crate contains the records and client for version `2017-03-12` of
//! the Cloud Virtual Machine (CVM) API.
//!
//! The client does not sign or send requests itself. Applications provide a
//! [Transport][common::transport::Transport] implementation, and a
//! [ClientConfig][common::options::ClientConfig] with the default region
//! and credential.
//!
//! # Example
//! ```
//! # use common::options::ClientConfig;
//! # use common::request::BaseRequest;
//! # use common::response::BaseResponse;
//! # use common::transport::Transport;
//! use tencentcloud_cvm_v20170312::client::Cvm;
//! use tencentcloud_cvm_v20170312::model::{DescribeZonesRequest, Filter};
//!
//! # #[derive(Debug)]
//! # struct MyTransport;
//! # impl Transport for MyTransport {
//! #     async fn send(&self, _: &BaseRequest, _: bytes::Bytes) -> common::Result<BaseResponse> {
//! #         unimplemented!()
//! #     }
//! # }
//! async fn sample(transport: MyTransport) -> tencentcloud_cvm_v20170312::Result<()> {
//!     let client = Cvm::new(transport, ClientConfig::new().set_region("ap-guangzhou"));
//!     let response = client.describe_zones(DescribeZonesRequest::default()).await?;
//!     for zone in response.response.zone_set.unwrap_or_default() {
//!         println!("{zone:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Available Operations
//!
//! Operations are grouped by resource. Each group is enabled by a feature,
//! all the features are enabled by default.
//!
//! * `disaster-recover-groups`: spread placement groups.
//! * `hosts`: dedicated hosts.
//! * `images`: images, image sharing and image import.
//! * `instances`: instances, instance types and pricing.
//! * `key-pairs`: SSH key pairs.
//! * `launch-templates`: launch templates and their versions.
//! * `maintenance`: maintenance tasks.
//! * `regions`: regions and availability zones.
//! * `reserved-instances`: reserved instances.

pub use common::Result;
pub use common::error::Error;

/// The client for the Cloud Virtual Machine API.
pub mod client;

/// The error codes returned by the service.
pub mod errors;

/// The request and response records.
pub mod model;

/// The service name.
pub(crate) const SERVICE: &str = "cvm";

/// The API version implemented by this crate.
pub(crate) const VERSION: &str = "2017-03-12";
