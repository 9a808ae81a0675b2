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

//! Instances: launch, lifecycle, configuration and pricing.

use super::{
    ActionTimer, DataDisk, EnhancedService, Externals, Filter, InstanceChargePrepaid,
    InstanceMarketOptionsRequest, InternetAccessible, ItemPrice, LaunchTemplate, LoginSettings,
    Placement, Price, SystemDisk, Tag, TagSpecification, VirtualPrivateCloud,
};
use common::request::BaseRequest;

/// An instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Instance {
    /// The location of the resources.
    pub placement: Option<Placement>,

    /// The instance id, for example `ins-9bxebleo`.
    pub instance_id: Option<String>,

    /// The instance type, for example `S5.SMALL1`.
    pub instance_type: Option<String>,

    /// The number of vCPUs.
    #[serde(rename = "CPU")]
    pub cpu: Option<i64>,

    /// The memory size, in GiB.
    pub memory: Option<i64>,

    /// One of `NORMAL`, `EXPIRED` or `PROTECTIVELY_ISOLATED`.
    pub restrict_state: Option<String>,

    /// The display name of the instance.
    pub instance_name: Option<String>,

    /// The billing mode of the instances.
    pub instance_charge_type: Option<String>,

    /// The system disk.
    pub system_disk: Option<SystemDisk>,

    /// The data disks.
    pub data_disks: Option<Vec<DataDisk>>,

    /// The private IP addresses.
    pub private_ip_addresses: Option<Vec<String>>,

    /// The public IP addresses.
    pub public_ip_addresses: Option<Vec<String>>,

    /// The public network settings of the instances.
    pub internet_accessible: Option<InternetAccessible>,

    /// The VPC settings of the instances.
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,

    /// The image id.
    pub image_id: Option<String>,

    /// The auto-renewal setting.
    pub renew_flag: Option<String>,

    /// The creation time, in ISO 8601 format.
    pub created_time: Option<String>,

    /// The expiration time, in ISO 8601 format.
    pub expired_time: Option<String>,

    /// The operating system name.
    pub os_name: Option<String>,

    /// The security group ids.
    pub security_group_ids: Option<Vec<String>>,

    /// The login settings of the instances.
    pub login_settings: Option<LoginSettings>,

    /// For example `PENDING`, `RUNNING`, `STOPPED` or `TERMINATING`.
    pub instance_state: Option<String>,

    /// The tags.
    pub tags: Option<Vec<Tag>>,

    /// Whether billing stops while the instances are stopped.
    pub stop_charging_mode: Option<String>,

    /// The UUID of the instance.
    pub uuid: Option<String>,

    /// The latest operation on the instance.
    pub latest_operation: Option<String>,

    /// The state of the latest operation.
    pub latest_operation_state: Option<String>,

    /// The request id of the latest operation.
    pub latest_operation_request_id: Option<String>,

    /// The spread placement group id.
    pub disaster_recover_group_id: Option<String>,

    /// The IPv6 addresses.
    #[serde(rename = "IPv6Addresses")]
    pub ipv6_addresses: Option<Vec<String>>,

    /// The CAM role bound to the instances.
    pub cam_role_name: Option<String>,

    /// The high performance computing cluster id.
    pub hpc_cluster_id: Option<String>,

    /// The RDMA IP addresses.
    pub rdma_ip_addresses: Option<Vec<String>>,

    /// The reason the instance was isolated.
    pub isolated_source: Option<String>,

    /// Information about the GPUs.
    #[serde(rename = "GPUInfo")]
    pub gpu_info: Option<GpuInfo>,

    /// The license type of the operating system.
    pub license_type: Option<String>,

    /// If true, the instances cannot be terminated through the API.
    pub disable_api_termination: Option<bool>,

    /// The default login user of the instance.
    pub default_login_user: Option<String>,

    /// The default login port of the instance.
    pub default_login_port: Option<i64>,

    /// The error message of the latest operation, if it failed.
    pub latest_operation_error_msg: Option<String>,
}

/// The GPU resources of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GpuInfo {
    /// The number of GPUs, may be fractional for vGPU instances.
    #[serde(rename = "GPUCount")]
    pub gpu_count: Option<f64>,

    /// The id of the GPU card.
    #[serde(rename = "GPUId")]
    pub gpu_id: Option<Vec<String>>,

    /// The GPU model.
    #[serde(rename = "GPUType")]
    pub gpu_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstanceStatus {
    /// The instance id.
    pub instance_id: Option<String>,

    /// The state of the instance.
    pub instance_state: Option<String>,
}

/// The configuration of an instance type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstanceTypeConfig {
    /// The availability zone, for example `ap-guangzhou-3`.
    pub zone: Option<String>,

    /// The instance type, for example `S5.MEDIUM4`.
    pub instance_type: Option<String>,

    /// The instance family, for example `S5`.
    pub instance_family: Option<String>,

    /// The number of GPU cards.
    #[serde(rename = "GPU")]
    pub gpu: Option<i64>,

    /// The number of CPU cores.
    #[serde(rename = "CPU")]
    pub cpu: Option<i64>,

    /// The memory size, in GiB.
    pub memory: Option<i64>,

    /// The number of FPGA cards.
    #[serde(rename = "FPGA")]
    pub fpga: Option<i64>,

    /// The number of GPUs, fractional for vGPU types.
    pub gpu_count: Option<f64>,
}

/// The availability and price of an instance type in a zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstanceTypeQuotaItem {
    /// The availability zone, for example `ap-guangzhou-3`.
    pub zone: Option<String>,

    /// The instance type, for example `S5.MEDIUM4`.
    pub instance_type: Option<String>,

    /// The billing mode of the instances.
    pub instance_charge_type: Option<String>,

    /// The network card type.
    pub network_card: Option<i64>,

    /// Extra attributes of the instance type.
    pub externals: Option<Externals>,

    /// The number of vCPUs.
    pub cpu: Option<i64>,

    /// The memory size, in GiB.
    pub memory: Option<i64>,

    /// The instance family, for example `S5`.
    pub instance_family: Option<String>,

    /// The display name of the type.
    pub type_name: Option<String>,

    /// The local disk types.
    pub local_disk_type_list: Option<Vec<LocalDiskType>>,

    /// Either `SELL` or `SOLD_OUT`.
    pub status: Option<String>,

    /// The price of the instance type.
    pub price: Option<ItemPrice>,

    /// Why the instance type is sold out.
    pub sold_out_reason: Option<String>,

    /// The instance bandwidth, in Gbps.
    pub instance_bandwidth: Option<f64>,

    /// The packets per second of the instance, in tens of thousands.
    pub instance_pps: Option<i64>,

    /// The size of the local storage, in GiB.
    pub storage_block_amount: Option<i64>,

    /// The processor model.
    pub cpu_type: Option<String>,

    /// The number of GPU cards.
    pub gpu: Option<i64>,

    /// The number of FPGA cards.
    pub fpga: Option<i64>,

    /// A remark about the instance type.
    pub remark: Option<String>,

    /// The number of GPUs, fractional for vGPU types.
    pub gpu_count: Option<f64>,

    /// The processor frequency.
    pub frequency: Option<String>,
}

/// A local disk type supported by an instance type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LocalDiskType {
    /// The local disk type.
    #[serde(rename = "Type")]
    pub r#type: Option<String>,

    /// The partition type.
    pub partition_type: Option<String>,

    /// The minimum size, in GiB.
    pub min_size: Option<i64>,

    /// The maximum size, in GiB.
    pub max_size: Option<i64>,

    /// Whether the local disk is required.
    pub required: Option<String>,
}

/// The number of times an operation can be applied to an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OperationCountLimit {
    /// The operation, for example `INSTANCE_DEGRADE`.
    pub operation: Option<String>,

    /// The instance id.
    pub instance_id: Option<String>,

    /// The number of instances currently in the group.
    pub current_count: Option<i64>,

    /// The maximum number of operations allowed.
    pub limit_count: Option<i64>,
}

/// Creates one or more instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RunInstancesRequest {
    /// One of `PREPAID`, `POSTPAID_BY_HOUR`, `CDHPAID` or `SPOTPAID`.
    pub instance_charge_type: Option<String>,

    /// The prepaid billing settings of the instances.
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,

    /// The location of the resources.
    pub placement: Option<Placement>,

    /// The instance type, for example `S5.MEDIUM4`.
    pub instance_type: Option<String>,

    /// The image id.
    pub image_id: Option<String>,

    /// The system disk.
    pub system_disk: Option<SystemDisk>,

    /// The data disks.
    pub data_disks: Option<Vec<DataDisk>>,

    /// The VPC settings of the instances.
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,

    /// The public network settings of the instances.
    pub internet_accessible: Option<InternetAccessible>,

    /// The number of instances.
    pub instance_count: Option<i64>,

    /// The display name of the instance.
    pub instance_name: Option<String>,

    /// The login settings of the instances.
    pub login_settings: Option<LoginSettings>,

    /// The security group ids.
    pub security_group_ids: Option<Vec<String>>,

    /// Agents to install on the instances.
    pub enhanced_service: Option<EnhancedService>,

    /// An idempotency token, unique for each request.
    pub client_token: Option<String>,

    /// The host name of the instance operating system.
    pub host_name: Option<String>,

    /// A scheduled action to run on the instances.
    pub action_timer: Option<ActionTimer>,

    /// The spread placement group ids.
    pub disaster_recover_group_ids: Option<Vec<String>>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// The spot market settings of the instances.
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,

    /// Base64-encoded user data, at most 16 KiB.
    pub user_data: Option<String>,

    /// Validate the request without creating any instances.
    pub dry_run: Option<bool>,

    /// The CAM role bound to the instances.
    pub cam_role_name: Option<String>,

    /// The high performance computing cluster id.
    pub hpc_cluster_id: Option<String>,

    /// The launch template to create the instances from.
    pub launch_template: Option<LaunchTemplate>,

    /// If true, the instances cannot be terminated through the API.
    pub disable_api_termination: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [RunInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RunInstancesResponseParams {
    /// The ids of the new instances.
    /// The instances may still be launching, use [DescribeInstancesRequest] to poll their state.
    pub instance_id_set: Option<Vec<String>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists instances.
///
/// Set at most one of `instance_ids` and `filters`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstancesRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// Supported filters include `zone`, `instance-name`, `instance-state` and `tag-key`.
    pub filters: Option<Vec<Filter>>,

    /// The number of results to skip.
    pub offset: Option<i64>,

    /// The maximum number of results, at most `100`.
    pub limit: Option<i64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstancesResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<i64>,

    /// The instances.
    pub instance_set: Option<Vec<Instance>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Returns the state of instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstancesStatusRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The number of results to skip.
    pub offset: Option<i64>,

    /// The maximum number of results to return.
    pub limit: Option<i64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeInstancesStatusRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstancesStatusResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<i64>,

    /// The status of each instance.
    pub instance_status_set: Option<Vec<InstanceStatus>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Starts stopped instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartInstancesRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [StartInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartInstancesResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Stops running instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StopInstancesRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// If true, stops the instances after a soft shutdown fails.
    pub force_stop: Option<bool>,

    /// One of `SOFT`, `HARD` or `SOFT_FIRST`.
    pub stop_type: Option<String>,

    /// Either `KEEP_CHARGING` or `STOP_CHARGING`.
    pub stopped_mode: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [StopInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StopInstancesResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Restarts running instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RebootInstancesRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// If true, reboots the instances after a soft shutdown fails.
    pub force_reboot: Option<bool>,

    /// The shutdown type, one of `SOFT`, `HARD` or `SOFT_FIRST`.
    pub stop_type: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [RebootInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RebootInstancesResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Returns instances. Postpaid instances are released, prepaid instances are moved to the recycle bin.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TerminateInstancesRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// If true, releases the elastic IP addresses too.
    pub release_address: Option<bool>,

    /// If true, releases the prepaid data disks too.
    pub release_prepaid_data_disk: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [TerminateInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TerminateInstancesResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Reinstalls the operating system of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResetInstanceRequest {
    /// The instance id.
    pub instance_id: Option<String>,

    /// The image id.
    pub image_id: Option<String>,

    /// The system disk.
    pub system_disk: Option<SystemDisk>,

    /// The login settings of the instances.
    pub login_settings: Option<LoginSettings>,

    /// Agents to install on the instances.
    pub enhanced_service: Option<EnhancedService>,

    /// The host name of the instance operating system.
    pub host_name: Option<String>,

    /// Base64 encoded user data, at most 16 KB.
    pub user_data: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ResetInstanceRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResetInstanceResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Expands the disks of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResizeInstanceDisksRequest {
    /// The instance id.
    pub instance_id: Option<String>,

    /// The data disks.
    pub data_disks: Option<Vec<DataDisk>>,

    /// If true, stops the instances after a soft shutdown fails.
    pub force_stop: Option<bool>,

    /// The system disk.
    pub system_disk: Option<SystemDisk>,

    /// If true, resizes the disks without stopping the instance.
    pub resize_online: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ResizeInstanceDisksRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResizeInstanceDisksResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Changes the attributes of instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyInstancesAttributeRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The display name of the instance.
    pub instance_name: Option<String>,

    /// Base64 encoded user data, at most 16 KB.
    pub user_data: Option<String>,

    /// The security groups.
    pub security_groups: Option<Vec<String>>,

    /// The CAM role bound to the instances.
    pub cam_role_name: Option<String>,

    /// The new host name of the instance operating system.
    pub host_name: Option<String>,

    /// If true, the instances cannot be terminated through the API.
    pub disable_api_termination: Option<bool>,

    /// The type of the CAM role.
    pub cam_role_type: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ModifyInstancesAttributeRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyInstancesAttributeResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Moves instances to a different project.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyInstancesProjectRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The project id. The default project is `0`.
    pub project_id: Option<i64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ModifyInstancesProjectRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyInstancesProjectResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Changes the instance type of instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResetInstancesTypeRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The new instance type.
    pub instance_type: Option<String>,

    /// If true, stops the instances after a soft shutdown fails.
    pub force_stop: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ResetInstancesTypeRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResetInstancesTypeResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Resets the login password of instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResetInstancesPasswordRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The new login password.
    pub password: Option<String>,

    /// The login user name.
    pub user_name: Option<String>,

    /// If true, stops the instances after a soft shutdown fails.
    pub force_stop: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ResetInstancesPasswordRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResetInstancesPasswordResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Renews prepaid instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RenewInstancesRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The prepaid billing settings of the instances.
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,

    /// If true, also renews the attached data disks.
    pub renew_portable_data_disk: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [RenewInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RenewInstancesResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Returns the price of a [RunInstancesRequest] with the same parameters.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InquiryPriceRunInstancesRequest {
    /// The location of the resources.
    pub placement: Option<Placement>,

    /// The image id.
    pub image_id: Option<String>,

    /// The billing mode of the instances.
    pub instance_charge_type: Option<String>,

    /// The prepaid billing settings of the instances.
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,

    /// The instance type, for example `S5.MEDIUM4`.
    pub instance_type: Option<String>,

    /// The system disk.
    pub system_disk: Option<SystemDisk>,

    /// The data disks.
    pub data_disks: Option<Vec<DataDisk>>,

    /// The VPC settings of the instances.
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,

    /// The public network settings of the instances.
    pub internet_accessible: Option<InternetAccessible>,

    /// The number of instances.
    pub instance_count: Option<i64>,

    /// The display name of the instance.
    pub instance_name: Option<String>,

    /// The login settings of the instances.
    pub login_settings: Option<LoginSettings>,

    /// The security group ids.
    pub security_group_ids: Option<Vec<String>>,

    /// Agents to install on the instances.
    pub enhanced_service: Option<EnhancedService>,

    /// An idempotency token, unique for each request.
    pub client_token: Option<String>,

    /// The host name of the instance operating system.
    pub host_name: Option<String>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// The spot market settings of the instances.
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,

    /// The high performance computing cluster id.
    pub hpc_cluster_id: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [InquiryPriceRunInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InquiryPriceRunInstancesResponseParams {
    /// The price of the instances.
    pub price: Option<Price>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists the instance types.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstanceTypeConfigsRequest {
    /// Supported filters are `zone` and `instance-family`.
    pub filters: Option<Vec<Filter>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeInstanceTypeConfigsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstanceTypeConfigsResponseParams {
    /// The instance type configurations.
    pub instance_type_config_set: Option<Vec<InstanceTypeConfig>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists the instance types available in each zone, with their prices.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeZoneInstanceConfigInfosRequest {
    /// Restricts the results to the resources matching all filters.
    pub filters: Option<Vec<Filter>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeZoneInstanceConfigInfosRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeZoneInstanceConfigInfosResponseParams {
    /// The instance type quotas.
    pub instance_type_quota_set: Option<Vec<InstanceTypeQuotaItem>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Returns how many more times an operation can be applied to instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstancesOperationLimitRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// `INSTANCE_DEGRADE` is the only supported value.
    pub operation: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeInstancesOperationLimitRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstancesOperationLimitResponseParams {
    /// The operation limits of each instance.
    pub instance_operation_limit_set: Option<Vec<OperationCountLimit>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Returns the URL of the VNC terminal for an instance.
///
/// The URL is valid for 15 seconds, and can only be used once.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstanceVncUrlRequest {
    /// The instance id.
    pub instance_id: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeInstanceVncUrlRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeInstanceVncUrlResponseParams {
    /// The VNC URL of the instance.
    pub instance_vnc_url: Option<String>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    RunInstances: RunInstancesRequest -> RunInstancesResponseParams as RunInstancesResponse;
    DescribeInstances: DescribeInstancesRequest -> DescribeInstancesResponseParams as DescribeInstancesResponse;
    DescribeInstancesStatus: DescribeInstancesStatusRequest -> DescribeInstancesStatusResponseParams as DescribeInstancesStatusResponse;
    StartInstances: StartInstancesRequest -> StartInstancesResponseParams as StartInstancesResponse;
    StopInstances: StopInstancesRequest -> StopInstancesResponseParams as StopInstancesResponse;
    RebootInstances: RebootInstancesRequest -> RebootInstancesResponseParams as RebootInstancesResponse;
    TerminateInstances: TerminateInstancesRequest -> TerminateInstancesResponseParams as TerminateInstancesResponse;
    ResetInstance: ResetInstanceRequest -> ResetInstanceResponseParams as ResetInstanceResponse;
    ResizeInstanceDisks: ResizeInstanceDisksRequest -> ResizeInstanceDisksResponseParams as ResizeInstanceDisksResponse;
    ModifyInstancesAttribute: ModifyInstancesAttributeRequest -> ModifyInstancesAttributeResponseParams as ModifyInstancesAttributeResponse;
    ModifyInstancesProject: ModifyInstancesProjectRequest -> ModifyInstancesProjectResponseParams as ModifyInstancesProjectResponse;
    ResetInstancesType: ResetInstancesTypeRequest -> ResetInstancesTypeResponseParams as ResetInstancesTypeResponse;
    ResetInstancesPassword: ResetInstancesPasswordRequest -> ResetInstancesPasswordResponseParams as ResetInstancesPasswordResponse;
    RenewInstances: RenewInstancesRequest -> RenewInstancesResponseParams as RenewInstancesResponse;
    InquiryPriceRunInstances: InquiryPriceRunInstancesRequest -> InquiryPriceRunInstancesResponseParams as InquiryPriceRunInstancesResponse;
    DescribeInstanceTypeConfigs: DescribeInstanceTypeConfigsRequest -> DescribeInstanceTypeConfigsResponseParams as DescribeInstanceTypeConfigsResponse;
    DescribeZoneInstanceConfigInfos: DescribeZoneInstanceConfigInfosRequest -> DescribeZoneInstanceConfigInfosResponseParams as DescribeZoneInstanceConfigInfosResponse;
    DescribeInstancesOperationLimit: DescribeInstancesOperationLimitRequest -> DescribeInstancesOperationLimitResponseParams as DescribeInstancesOperationLimitResponse;
    DescribeInstanceVncUrl: DescribeInstanceVncUrlRequest -> DescribeInstanceVncUrlResponseParams as DescribeInstanceVncUrlResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::message::Message;
    use common::response::Response;
    use serde_json::{Value, json};

    #[test]
    fn irregular_wire_names() -> anyhow::Result<()> {
        let input = json!({"Response": {
            "TotalCount": 1,
            "InstanceSet": [{
                "InstanceId": "ins-9bxebleo",
                "CPU": 2,
                "Memory": 4,
                "IPv6Addresses": ["2402:4e00::1"],
                "GPUInfo": {"GPUCount": 0.25, "GPUId": ["gpu-1"], "GPUType": "T4"},
                "Uuid": "68b510db-b4c1-4630-a62b-73d0c7c970f9",
                "NotYetDocumented": {"Nested": true}
            }],
            "RequestId": "r-1"
        }});
        let got = Response::<DescribeInstancesResponseParams>::from_json_string(&input.to_string())?;
        let instances = got.response.instance_set.unwrap_or_default();
        assert_eq!(instances.len(), 1);
        let instance = &instances[0];
        assert_eq!(instance.cpu, Some(2));
        assert_eq!(instance.ipv6_addresses, Some(vec!["2402:4e00::1".to_string()]));
        let gpu = instance.gpu_info.clone().unwrap_or_default();
        assert_eq!(gpu.gpu_count, Some(0.25));
        assert_eq!(gpu.gpu_type.as_deref(), Some("T4"));
        assert!(instance.uuid.is_some(), "{instance:?}");
        Ok(())
    }

    #[test]
    fn instance_type_configs_fractional_gpu() -> anyhow::Result<()> {
        let input = json!({"Response": {
            "InstanceTypeConfigSet": [
                {"InstanceType": "GN7.LARGE20", "GPU": 1, "GpuCount": 0.25},
                {"InstanceType": "GN7.2XLARGE32", "GPU": 1, "GpuCount": 1}
            ],
            "RequestId": "r-1"
        }});
        let got = Response::<DescribeInstanceTypeConfigsResponseParams>::from_json_string(
            &input.to_string(),
        )?;
        assert_eq!(got.request_id(), Some("r-1"));
        let configs = got.response.instance_type_config_set.unwrap_or_default();
        let counts = configs.iter().map(|c| c.gpu_count).collect::<Vec<_>>();
        assert_eq!(counts, vec![Some(0.25), Some(1.0)]);
        assert_eq!(configs[0].instance_type.as_deref(), Some("GN7.LARGE20"));
        Ok(())
    }

    #[test]
    fn quota_item_uses_pascal_case() -> anyhow::Result<()> {
        let input = json!({"Cpu": 8, "Gpu": 1, "Fpga": 0, "GpuCount": 1.0, "Status": "SELL"});
        let got = serde_json::from_value::<InstanceTypeQuotaItem>(input)?;
        assert_eq!(got.cpu, Some(8));
        assert_eq!(got.gpu, Some(1));
        assert_eq!(got.fpga, Some(0));
        assert_eq!(got.status.as_deref(), Some("SELL"));
        Ok(())
    }

    #[test]
    fn run_instances_nested() -> anyhow::Result<()> {
        let request = RunInstancesRequest {
            placement: Some(Placement {
                zone: Some("ap-guangzhou-3".into()),
                ..Default::default()
            }),
            instance_type: Some("S5.SMALL1".into()),
            instance_count: Some(1),
            enhanced_service: Some(EnhancedService {
                security_service: Some(Default::default()),
                ..Default::default()
            }),
            data_disks: Some(Vec::new()),
            ..Default::default()
        };
        let got = serde_json::from_str::<Value>(&request.to_json_string())?;
        assert_eq!(
            got,
            json!({
                "Placement": {"Zone": "ap-guangzhou-3"},
                "InstanceType": "S5.SMALL1",
                "InstanceCount": 1,
                "EnhancedService": {"SecurityService": {}},
                "DataDisks": []
            })
        );
        Ok(())
    }

    #[test]
    fn strict_checks_top_level_only() -> anyhow::Result<()> {
        let input = json!({"Placement": {"Zone": "ap-guangzhou-3", "Unknown": 1}});
        let got = RunInstancesRequest::from_json_string(&input.to_string())?;
        assert_eq!(
            got.placement.and_then(|p| p.zone).as_deref(),
            Some("ap-guangzhou-3")
        );
        Ok(())
    }

    #[test]
    fn login_settings_redacted() {
        let request = ResetInstanceRequest {
            login_settings: Some(LoginSettings {
                password: Some("hunter2".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let got = format!("{request:?}");
        assert!(!got.contains("hunter2"), "{got}");
    }
}
