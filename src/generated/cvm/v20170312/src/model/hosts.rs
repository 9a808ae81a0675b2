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

//! Dedicated hosts.

use super::{ChargePrepaid, Filter, Placement, TagSpecification};
use common::request::BaseRequest;

/// A dedicated host.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HostItem {
    /// The location of the resources.
    pub placement: Option<Placement>,

    /// The dedicated host id.
    pub host_id: Option<String>,

    /// The dedicated host type.
    pub host_type: Option<String>,

    /// The host name of the instance operating system.
    pub host_name: Option<String>,

    /// The billing mode of the hosts.
    pub host_charge_type: Option<String>,

    /// The auto-renewal setting.
    pub renew_flag: Option<String>,

    /// The creation time, in ISO 8601 format.
    pub created_time: Option<String>,

    /// The expiration time, in ISO 8601 format.
    pub expired_time: Option<String>,

    /// The instances running on this host.
    pub instance_ids: Option<Vec<String>>,

    /// The state of the dedicated host.
    pub host_state: Option<String>,

    /// The IP address of the dedicated host.
    pub host_ip: Option<String>,

    /// The resources of the dedicated host.
    pub host_resource: Option<HostResource>,

    /// The cage id, for financial zones.
    pub cage_id: Option<String>,
}

/// The capacity of a dedicated host.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HostResource {
    /// The total number of CPU cores.
    pub cpu_total: Option<u64>,

    /// The number of CPU cores still available.
    pub cpu_available: Option<u64>,

    /// The total memory, in GiB.
    pub mem_total: Option<f64>,

    /// The memory still available, in GiB.
    pub mem_available: Option<f64>,

    /// The total disk capacity, in GiB.
    pub disk_total: Option<u64>,

    /// The disk capacity still available, in GiB.
    pub disk_available: Option<u64>,

    /// The disk type.
    pub disk_type: Option<String>,
}

/// Creates dedicated hosts.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AllocateHostsRequest {
    /// The location of the resources.
    pub placement: Option<Placement>,

    /// An idempotency token, unique for each request.
    pub client_token: Option<String>,

    /// The prepaid billing settings of the hosts.
    pub host_charge_prepaid: Option<ChargePrepaid>,

    /// `PREPAID` is the only supported value.
    pub host_charge_type: Option<String>,

    /// The dedicated host type.
    pub host_type: Option<String>,

    /// The number of hosts to allocate.
    pub host_count: Option<u64>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [AllocateHostsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AllocateHostsResponseParams {
    /// The ids of the allocated hosts.
    pub host_id_set: Option<Vec<String>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists dedicated hosts.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeHostsRequest {
    /// Restricts the results to the resources matching all filters.
    pub filters: Option<Vec<Filter>>,

    /// The number of results to skip.
    pub offset: Option<u64>,

    /// The maximum number of results to return.
    pub limit: Option<u64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeHostsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeHostsResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<u64>,

    /// The dedicated hosts.
    pub host_set: Option<Vec<HostItem>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Changes the name, renewal flag or project of dedicated hosts.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyHostsAttributeRequest {
    /// The dedicated host ids.
    pub host_ids: Option<Vec<String>>,

    /// The new host name.
    pub host_name: Option<String>,

    /// The auto-renewal setting.
    pub renew_flag: Option<String>,

    /// The project id. The default project is `0`.
    pub project_id: Option<u64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ModifyHostsAttributeRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyHostsAttributeResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    AllocateHosts: AllocateHostsRequest -> AllocateHostsResponseParams as AllocateHostsResponse;
    DescribeHosts: DescribeHostsRequest -> DescribeHostsResponseParams as DescribeHostsResponse;
    ModifyHostsAttribute: ModifyHostsAttributeRequest -> ModifyHostsAttributeResponseParams as ModifyHostsAttributeResponse;
}
