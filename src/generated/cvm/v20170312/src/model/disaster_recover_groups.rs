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

//! Spread placement groups.
//!
//! The service calls these "disaster recover groups". Instances in the same
//! group run on different hosts, switches or racks.

use common::request::BaseRequest;

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DisasterRecoverGroup {
    /// The spread placement group id.
    pub disaster_recover_group_id: Option<String>,

    /// The group name.
    pub name: Option<String>,

    /// One of `HOST`, `SW` or `RACK`.
    #[serde(rename = "Type")]
    pub r#type: Option<String>,

    /// The maximum number of instances in the group.
    pub cvm_quota_total: Option<i64>,

    /// The number of instances currently in the group.
    pub current_num: Option<i64>,

    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The creation time, in ISO 8601 format.
    pub create_time: Option<String>,
}

/// Creates a spread placement group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateDisasterRecoverGroupRequest {
    /// The group name.
    pub name: Option<String>,

    /// One of `HOST`, `SW` or `RACK`.
    #[serde(rename = "Type")]
    pub r#type: Option<String>,

    /// An idempotency token, unique for each request.
    pub client_token: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [CreateDisasterRecoverGroupRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateDisasterRecoverGroupResponseParams {
    /// The spread placement group id.
    pub disaster_recover_group_id: Option<String>,

    /// One of `HOST`, `SW` or `RACK`.
    #[serde(rename = "Type")]
    pub r#type: Option<String>,

    /// The group name.
    pub name: Option<String>,

    /// The total instance quota across all groups.
    pub cvm_quota_total: Option<i64>,

    /// The number of instances currently in the group.
    pub current_num: Option<i64>,

    /// The creation time, in ISO 8601 format.
    pub create_time: Option<String>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Deletes spread placement groups. The groups must be empty.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteDisasterRecoverGroupsRequest {
    /// The spread placement group ids.
    pub disaster_recover_group_ids: Option<Vec<String>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DeleteDisasterRecoverGroupsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteDisasterRecoverGroupsResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists spread placement groups.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupsRequest {
    /// The spread placement group ids.
    pub disaster_recover_group_ids: Option<Vec<String>>,

    /// Matches groups whose name contains this value.
    pub name: Option<String>,

    /// The number of results to skip.
    pub offset: Option<i64>,

    /// The maximum number of results to return.
    pub limit: Option<i64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeDisasterRecoverGroupsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupsResponseParams {
    /// The spread placement groups.
    pub disaster_recover_group_set: Option<Vec<DisasterRecoverGroup>>,

    /// The total number of matching resources.
    pub total_count: Option<i64>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Renames a spread placement group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyDisasterRecoverGroupAttributeRequest {
    /// The spread placement group id.
    pub disaster_recover_group_id: Option<String>,

    /// The new group name.
    pub name: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ModifyDisasterRecoverGroupAttributeRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyDisasterRecoverGroupAttributeResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Returns the spread placement group quotas.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupQuotaRequest {
    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeDisasterRecoverGroupQuotaRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupQuotaResponseParams {
    /// The number of groups that can be created.
    pub group_quota: Option<i64>,

    /// The number of instances currently in the group.
    pub current_num: Option<i64>,

    /// The instance quota of a `HOST` group.
    pub cvm_in_host_group_quota: Option<i64>,

    /// The instance quota of a `SW` group.
    pub cvm_in_sw_group_quota: Option<i64>,

    /// The instance quota of a `RACK` group.
    pub cvm_in_rack_group_quota: Option<i64>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    CreateDisasterRecoverGroup: CreateDisasterRecoverGroupRequest -> CreateDisasterRecoverGroupResponseParams as CreateDisasterRecoverGroupResponse;
    DeleteDisasterRecoverGroups: DeleteDisasterRecoverGroupsRequest -> DeleteDisasterRecoverGroupsResponseParams as DeleteDisasterRecoverGroupsResponse;
    DescribeDisasterRecoverGroups: DescribeDisasterRecoverGroupsRequest -> DescribeDisasterRecoverGroupsResponseParams as DescribeDisasterRecoverGroupsResponse;
    ModifyDisasterRecoverGroupAttribute: ModifyDisasterRecoverGroupAttributeRequest -> ModifyDisasterRecoverGroupAttributeResponseParams as ModifyDisasterRecoverGroupAttributeResponse;
    DescribeDisasterRecoverGroupQuota: DescribeDisasterRecoverGroupQuotaRequest -> DescribeDisasterRecoverGroupQuotaResponseParams as DescribeDisasterRecoverGroupQuotaResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::message::Message;
    use serde_json::{Value, json};

    #[test]
    fn type_field() -> anyhow::Result<()> {
        let request = CreateDisasterRecoverGroupRequest::from_json_string(
            r#"{"Name": "spread", "Type": "HOST"}"#,
        )?;
        assert_eq!(request.r#type.as_deref(), Some("HOST"));
        let got = serde_json::from_str::<Value>(&request.to_json_string())?;
        assert_eq!(got, json!({"Name": "spread", "Type": "HOST"}));
        Ok(())
    }

    #[test]
    fn field_names() {
        assert_eq!(
            CreateDisasterRecoverGroupRequest::field_names(),
            &["Name", "Type", "ClientToken"]
        );
        assert!(DescribeDisasterRecoverGroupQuotaRequest::field_names().is_empty());
    }
}
