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

//! Launch templates.
//!
//! A launch template stores the parameters of a [RunInstancesRequest][super::RunInstancesRequest]
//! so instances can be created from a versioned, reusable configuration.

use super::{
    ActionTimer, DataDisk, EnhancedService, Filter, InstanceChargePrepaid,
    InstanceMarketOptionsRequest, InternetAccessible, LoginSettings, Placement, SystemDisk,
    TagSpecification, VirtualPrivateCloud,
};
use common::request::BaseRequest;

/// A launch template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchTemplateInfo {
    /// The latest version number.
    pub latest_version_number: Option<u64>,

    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// The launch template name.
    pub launch_template_name: Option<String>,

    /// The version number used when none is specified.
    pub default_version_number: Option<u64>,

    /// The number of versions of the template.
    pub launch_template_version_count: Option<u64>,

    /// The account that created the resource.
    pub created_by: Option<String>,

    /// The creation time, in ISO 8601 format.
    pub creation_time: Option<String>,
}

/// A version of a launch template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchTemplateVersionInfo {
    /// The launch template version.
    pub launch_template_version: Option<u64>,

    /// The instance settings recorded by the version.
    pub launch_template_version_data: Option<LaunchTemplateVersionData>,

    /// The creation time, in ISO 8601 format.
    pub creation_time: Option<String>,

    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// If true, this is the default version of the template.
    pub is_default_version: Option<bool>,

    /// A description of the version.
    pub launch_template_version_description: Option<String>,

    /// The account that created the resource.
    pub created_by: Option<String>,
}

/// The instance parameters stored in a launch template version.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchTemplateVersionData {
    /// The location of the resources.
    pub placement: Option<Placement>,

    /// The instance type, for example `S5.MEDIUM4`.
    pub instance_type: Option<String>,

    /// The display name of the instance.
    pub instance_name: Option<String>,

    /// The billing mode of the instances.
    pub instance_charge_type: Option<String>,

    /// The system disk.
    pub system_disk: Option<SystemDisk>,

    /// The data disks.
    pub data_disks: Option<Vec<DataDisk>>,

    /// The public network settings of the instances.
    pub internet_accessible: Option<InternetAccessible>,

    /// The VPC settings of the instances.
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,

    /// The image id.
    pub image_id: Option<String>,

    /// The security group ids.
    pub security_group_ids: Option<Vec<String>>,

    /// The login settings of the instances.
    pub login_settings: Option<LoginSettings>,

    /// The CAM role bound to the instances.
    pub cam_role_name: Option<String>,

    /// The high performance computing cluster id.
    pub hpc_cluster_id: Option<String>,

    /// The number of instances.
    pub instance_count: Option<u64>,

    /// Agents to install on the instances.
    pub enhanced_service: Option<EnhancedService>,

    /// Base64 encoded user data, at most 16 KB.
    pub user_data: Option<String>,

    /// The spread placement group ids.
    pub disaster_recover_group_ids: Option<Vec<String>>,

    /// A scheduled action to run on the instances.
    pub action_timer: Option<ActionTimer>,

    /// The spot market settings of the instances.
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,

    /// The host name of the instance operating system.
    pub host_name: Option<String>,

    /// An idempotency token, unique for each request.
    pub client_token: Option<String>,

    /// The prepaid billing settings of the instances.
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// If true, the instances cannot be terminated through the API.
    pub disable_api_termination: Option<bool>,
}

/// Creates a launch template, and its first version.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateLaunchTemplateRequest {
    /// The launch template name.
    pub launch_template_name: Option<String>,

    /// The location of the resources.
    pub placement: Option<Placement>,

    /// The image id.
    pub image_id: Option<String>,

    /// A description of the version.
    pub launch_template_version_description: Option<String>,

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

    /// A scheduled action to run on the instances.
    pub action_timer: Option<ActionTimer>,

    /// The spread placement group ids.
    pub disaster_recover_group_ids: Option<Vec<String>>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// The spot market settings of the instances.
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,

    /// Base64 encoded user data, at most 16 KB.
    pub user_data: Option<String>,

    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// The CAM role bound to the instances.
    pub cam_role_name: Option<String>,

    /// The high performance computing cluster id.
    pub hpc_cluster_id: Option<String>,

    /// The billing mode of the instances.
    pub instance_charge_type: Option<String>,

    /// The prepaid billing settings of the instances.
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,

    /// If true, the instances cannot be terminated through the API.
    pub disable_api_termination: Option<bool>,

    /// The tags for the launch template itself.
    pub launch_template_tag_specification: Option<Vec<TagSpecification>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [CreateLaunchTemplateRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateLaunchTemplateResponseParams {
    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists launch templates.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeLaunchTemplatesRequest {
    /// The launch template ids.
    pub launch_template_ids: Option<Vec<String>>,

    /// Supported filters are `LaunchTemplateName` and `tag-key`.
    pub filters: Option<Vec<Filter>>,

    /// The number of results to skip.
    pub offset: Option<i64>,

    /// The maximum number of results to return.
    pub limit: Option<i64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeLaunchTemplatesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeLaunchTemplatesResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<u64>,

    /// The launch templates.
    pub launch_template_set: Option<Vec<LaunchTemplateInfo>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Deletes a launch template and all its versions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateRequest {
    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DeleteLaunchTemplateRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Creates a new version of a launch template.
///
/// Parameters not set in the request are copied from `launch_template_version`,
/// or from the default version.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateLaunchTemplateVersionRequest {
    /// The location of the resources.
    pub placement: Option<Placement>,

    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// The version to copy unset parameters from.
    pub launch_template_version: Option<i64>,

    /// A description of the version.
    pub launch_template_version_description: Option<String>,

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

    /// Base64 encoded user data, at most 16 KB.
    pub user_data: Option<String>,

    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// The CAM role bound to the instances.
    pub cam_role_name: Option<String>,

    /// The high performance computing cluster id.
    pub hpc_cluster_id: Option<String>,

    /// The billing mode of the instances.
    pub instance_charge_type: Option<String>,

    /// The prepaid billing settings of the instances.
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,

    /// If true, the instances cannot be terminated through the API.
    pub disable_api_termination: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [CreateLaunchTemplateVersionRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateLaunchTemplateVersionResponseParams {
    /// The new version number.
    pub launch_template_version_number: Option<i64>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists the versions of a launch template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeLaunchTemplateVersionsRequest {
    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// The versions to return.
    pub launch_template_versions: Option<Vec<u64>>,

    /// The lowest version to return.
    pub min_version: Option<u64>,

    /// The highest version to return.
    pub max_version: Option<u64>,

    /// The number of results to skip.
    pub offset: Option<u64>,

    /// The maximum number of results to return.
    pub limit: Option<u64>,

    /// Only return the default version.
    pub default_version: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeLaunchTemplateVersionsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeLaunchTemplateVersionsResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<u64>,

    /// The launch template versions.
    pub launch_template_version_set: Option<Vec<LaunchTemplateVersionInfo>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Deletes versions of a launch template. The default version cannot be deleted.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateVersionsRequest {
    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// The versions to delete.
    pub launch_template_versions: Option<Vec<i64>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DeleteLaunchTemplateVersionsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateVersionsResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Changes the default version of a launch template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyLaunchTemplateDefaultVersionRequest {
    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// The version used when none is specified.
    pub default_version: Option<i64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ModifyLaunchTemplateDefaultVersionRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyLaunchTemplateDefaultVersionResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    CreateLaunchTemplate: CreateLaunchTemplateRequest -> CreateLaunchTemplateResponseParams as CreateLaunchTemplateResponse;
    DescribeLaunchTemplates: DescribeLaunchTemplatesRequest -> DescribeLaunchTemplatesResponseParams as DescribeLaunchTemplatesResponse;
    DeleteLaunchTemplate: DeleteLaunchTemplateRequest -> DeleteLaunchTemplateResponseParams as DeleteLaunchTemplateResponse;
    CreateLaunchTemplateVersion: CreateLaunchTemplateVersionRequest -> CreateLaunchTemplateVersionResponseParams as CreateLaunchTemplateVersionResponse;
    DescribeLaunchTemplateVersions: DescribeLaunchTemplateVersionsRequest -> DescribeLaunchTemplateVersionsResponseParams as DescribeLaunchTemplateVersionsResponse;
    DeleteLaunchTemplateVersions: DeleteLaunchTemplateVersionsRequest -> DeleteLaunchTemplateVersionsResponseParams as DeleteLaunchTemplateVersionsResponse;
    ModifyLaunchTemplateDefaultVersion: ModifyLaunchTemplateDefaultVersionRequest -> ModifyLaunchTemplateDefaultVersionResponseParams as ModifyLaunchTemplateDefaultVersionResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::response::Response;
    use serde_json::json;

    #[test]
    fn version_data() -> anyhow::Result<()> {
        let input = json!({"Response": {
            "TotalCount": 1,
            "LaunchTemplateVersionSet": [{
                "LaunchTemplateVersion": 2,
                "IsDefaultVersion": true,
                "LaunchTemplateVersionData": {
                    "InstanceType": "S5.SMALL1",
                    "InstanceCount": 1,
                    "Placement": {"Zone": "ap-guangzhou-3", "ProjectId": 0}
                }
            }],
            "RequestId": "r-1"
        }});
        let got = Response::<DescribeLaunchTemplateVersionsResponseParams>::from_json_string(
            &input.to_string(),
        )?;
        assert_eq!(got.request_id(), Some("r-1"));
        let versions = got.response.launch_template_version_set.unwrap_or_default();
        let data = versions[0].launch_template_version_data.clone().unwrap_or_default();
        assert_eq!(versions[0].is_default_version, Some(true));
        assert_eq!(data.instance_type.as_deref(), Some("S5.SMALL1"));
        assert_eq!(data.placement.and_then(|p| p.project_id), Some(0));
        Ok(())
    }
}
