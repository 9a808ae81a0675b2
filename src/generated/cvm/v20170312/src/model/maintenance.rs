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

//! Maintenance tasks.

use common::request::BaseRequest;

/// A maintenance task affecting an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RepairTaskInfo {
    /// The task id.
    pub task_id: Option<String>,

    /// The instance id.
    pub instance_id: Option<String>,

    /// The alias of the instance.
    pub alias: Option<String>,

    /// The task type id.
    pub task_type_id: Option<u64>,

    /// The task type name.
    pub task_type_name: Option<String>,

    /// `1` pending authorization, `2` processing, `3` finished, `4` scheduled, `5` canceled, `6` avoided.
    pub task_status: Option<u64>,

    /// The status of the affected device.
    pub device_status: Option<u64>,

    /// The operation status.
    pub operate_status: Option<u64>,

    /// The creation time, in ISO 8601 format.
    pub create_time: Option<String>,

    /// The time the maintenance task was authorized.
    pub auth_time: Option<String>,

    /// The end time, in ISO 8601 format.
    pub end_time: Option<String>,

    /// The details of the maintenance task.
    pub task_detail: Option<String>,

    /// The availability zone, for example `ap-guangzhou-3`.
    pub zone: Option<String>,

    /// The region, for example `ap-guangzhou`.
    pub region: Option<String>,

    /// The VPC id.
    pub vpc_id: Option<String>,

    /// The VPC name.
    pub vpc_name: Option<String>,

    /// The subnet id.
    pub subnet_id: Option<String>,

    /// The subnet name.
    pub subnet_name: Option<String>,

    /// The public IP address of the instance.
    pub wan_ip: Option<String>,

    /// The private IP address of the instance.
    pub lan_ip: Option<String>,

    /// The product type of the affected instance.
    pub product: Option<String>,

    /// The sub type of the task.
    pub task_sub_type: Option<String>,

    /// The authorization type of the maintenance task.
    pub auth_type: Option<u64>,

    /// The source of the authorization, one of `Default` or `Constant`.
    pub auth_source: Option<String>,
}

/// Lists maintenance tasks.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeTaskInfoRequest {
    /// The maximum number of results to return.
    pub limit: Option<i64>,

    /// The number of results to skip.
    pub offset: Option<i64>,

    /// One of `CVM`, `CDH` or `CPM2.0`.
    pub product: Option<String>,

    /// The status of the task.
    pub task_status: Option<Vec<i64>>,

    /// The task type ids.
    pub task_type_ids: Option<Vec<i64>>,

    /// The task ids.
    pub task_ids: Option<Vec<String>>,

    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The aliases of the related instances.
    pub aliases: Option<Vec<String>>,

    /// The start of the maintenance window.
    pub start_date: Option<String>,

    /// The end of the maintenance window.
    pub end_date: Option<String>,

    /// The field to sort the results by.
    pub order_field: Option<String>,

    /// `0` ascending, `1` descending.
    pub order: Option<i64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeTaskInfoRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeTaskInfoResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<i64>,

    /// The maintenance tasks.
    pub repair_task_info_set: Option<Vec<RepairTaskInfo>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    DescribeTaskInfo: DescribeTaskInfoRequest -> DescribeTaskInfoResponseParams as DescribeTaskInfoResponse;
}
