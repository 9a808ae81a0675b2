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

mod core_error;
pub use core_error::*;
mod sdk_error;
pub use sdk_error::*;

/// The error code used when a request cannot be constructed locally.
///
/// The client libraries report this code when a request record is
/// rehydrated from JSON text containing keys the record does not declare.
/// The request is never sent in this case, and thus the error has no
/// request id.
pub const BUILD_REQUEST_ERROR: &str = "ClientError.BuildRequestError";
