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

//! Contains the Cvm client.

use crate::Result;
use crate::model;
use common::options::ClientConfig;
use common::request::Operation;
use common::response::Response;
use common::transport::{Transport, execute};
use std::sync::Arc;

/// Implements a client for the Cloud Virtual Machine API.
///
/// # Configuration
///
/// The [ClientConfig] provides the default region, credential, language and
/// endpoint for all requests. Any of these can be overridden for a single
/// request using its `base` field:
///
/// ```
/// # use common::options::Language;
/// # use tencentcloud_cvm_v20170312::model::DescribeInstancesRequest;
/// let mut request = DescribeInstancesRequest::default();
/// request.base.set_region("ap-singapore").set_language(Language::EnUs);
/// ```
///
/// # Pooling and Cloning
///
/// `Cvm` holds the transport in an [Arc], cloning the client is cheap and
/// all the clones share the same transport.
#[derive(Debug)]
pub struct Cvm<T> {
    inner: Arc<T>,
    config: ClientConfig,
}

impl<T> Clone for Cvm<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T> Cvm<T>
where
    T: Transport,
{
    /// Creates a new client.
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::from_arc(Arc::new(transport), config)
    }

    /// Creates a new client sharing an existing transport.
    pub fn from_arc(transport: Arc<T>, config: ClientConfig) -> Self {
        Self {
            inner: transport,
            config,
        }
    }

    /// The configuration used by this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send<R>(&self, mut request: R) -> Result<Response<R::Response>>
    where
        R: Operation,
    {
        request
            .base_mut()
            .with_api_info(R::SERVICE, R::VERSION, R::ACTION)
            .merge_config(&self.config);
        execute(self.inner.as_ref(), &request).await
    }
}

// Defines one method per operation, each gated by the feature of its
// resource group.
macro_rules! methods {
    ($($(#[$meta:meta])* $method:ident($request:ident) -> $response:ident;)*) => {
        impl<T> Cvm<T>
        where
            T: Transport,
        {
            $(
                $(#[$meta])*
                pub async fn $method(&self, request: model::$request) -> Result<model::$response> {
                    self.send(request).await
                }
            )*
        }
    };
}

methods! {
    /// Lists the regions.
    #[cfg(feature = "regions")]
    describe_regions(DescribeRegionsRequest) -> DescribeRegionsResponse;

    /// Lists the availability zones in the region of the request.
    #[cfg(feature = "regions")]
    describe_zones(DescribeZonesRequest) -> DescribeZonesResponse;

    /// Creates one or more instances.
    #[cfg(feature = "instances")]
    run_instances(RunInstancesRequest) -> RunInstancesResponse;

    /// Lists instances.
    #[cfg(feature = "instances")]
    describe_instances(DescribeInstancesRequest) -> DescribeInstancesResponse;

    /// Returns the state of instances.
    #[cfg(feature = "instances")]
    describe_instances_status(DescribeInstancesStatusRequest) -> DescribeInstancesStatusResponse;

    /// Starts stopped instances.
    #[cfg(feature = "instances")]
    start_instances(StartInstancesRequest) -> StartInstancesResponse;

    /// Stops running instances.
    #[cfg(feature = "instances")]
    stop_instances(StopInstancesRequest) -> StopInstancesResponse;

    /// Restarts running instances.
    #[cfg(feature = "instances")]
    reboot_instances(RebootInstancesRequest) -> RebootInstancesResponse;

    /// Returns instances. Postpaid instances are released, prepaid instances are moved to the recycle bin.
    #[cfg(feature = "instances")]
    terminate_instances(TerminateInstancesRequest) -> TerminateInstancesResponse;

    /// Reinstalls the operating system of an instance.
    #[cfg(feature = "instances")]
    reset_instance(ResetInstanceRequest) -> ResetInstanceResponse;

    /// Expands the disks of an instance.
    #[cfg(feature = "instances")]
    resize_instance_disks(ResizeInstanceDisksRequest) -> ResizeInstanceDisksResponse;

    /// Changes the attributes of instances.
    #[cfg(feature = "instances")]
    modify_instances_attribute(ModifyInstancesAttributeRequest) -> ModifyInstancesAttributeResponse;

    /// Moves instances to a different project.
    #[cfg(feature = "instances")]
    modify_instances_project(ModifyInstancesProjectRequest) -> ModifyInstancesProjectResponse;

    /// Changes the instance type of instances.
    #[cfg(feature = "instances")]
    reset_instances_type(ResetInstancesTypeRequest) -> ResetInstancesTypeResponse;

    /// Resets the login password of instances.
    #[cfg(feature = "instances")]
    reset_instances_password(ResetInstancesPasswordRequest) -> ResetInstancesPasswordResponse;

    /// Renews prepaid instances.
    #[cfg(feature = "instances")]
    renew_instances(RenewInstancesRequest) -> RenewInstancesResponse;

    /// Returns the price of a [RunInstancesRequest][model::RunInstancesRequest] with the same parameters.
    #[cfg(feature = "instances")]
    inquiry_price_run_instances(InquiryPriceRunInstancesRequest) -> InquiryPriceRunInstancesResponse;

    /// Lists the instance types.
    #[cfg(feature = "instances")]
    describe_instance_type_configs(DescribeInstanceTypeConfigsRequest) -> DescribeInstanceTypeConfigsResponse;

    /// Lists the instance types available in each zone, with their prices.
    #[cfg(feature = "instances")]
    describe_zone_instance_config_infos(DescribeZoneInstanceConfigInfosRequest) -> DescribeZoneInstanceConfigInfosResponse;

    /// Returns how many more times an operation can be applied to instances.
    #[cfg(feature = "instances")]
    describe_instances_operation_limit(DescribeInstancesOperationLimitRequest) -> DescribeInstancesOperationLimitResponse;

    /// Returns the URL of the VNC terminal for an instance.
    #[cfg(feature = "instances")]
    describe_instance_vnc_url(DescribeInstanceVncUrlRequest) -> DescribeInstanceVncUrlResponse;

    /// Lists images.
    #[cfg(feature = "images")]
    describe_images(DescribeImagesRequest) -> DescribeImagesResponse;

    /// Creates an image from an instance or a set of snapshots.
    #[cfg(feature = "images")]
    create_image(CreateImageRequest) -> CreateImageResponse;

    /// Deletes images.
    #[cfg(feature = "images")]
    delete_images(DeleteImagesRequest) -> DeleteImagesResponse;

    /// Imports an image from object storage.
    #[cfg(feature = "images")]
    import_image(ImportImageRequest) -> ImportImageResponse;

    /// Changes the name or description of an image.
    #[cfg(feature = "images")]
    modify_image_attribute(ModifyImageAttributeRequest) -> ModifyImageAttributeResponse;

    /// Shares an image with other accounts, or stops sharing it.
    #[cfg(feature = "images")]
    modify_image_share_permission(ModifyImageSharePermissionRequest) -> ModifyImageSharePermissionResponse;

    /// Lists the accounts an image is shared with.
    #[cfg(feature = "images")]
    describe_image_share_permission(DescribeImageSharePermissionRequest) -> DescribeImageSharePermissionResponse;

    /// Copies images to other regions.
    #[cfg(feature = "images")]
    sync_images(SyncImagesRequest) -> SyncImagesResponse;

    /// Lists the operating systems supported by [ImportImageRequest][model::ImportImageRequest].
    #[cfg(feature = "images")]
    describe_import_image_os(DescribeImportImageOsRequest) -> DescribeImportImageOsResponse;

    /// Creates an SSH key pair.
    #[cfg(feature = "key-pairs")]
    create_key_pair(CreateKeyPairRequest) -> CreateKeyPairResponse;

    /// Deletes SSH key pairs.
    #[cfg(feature = "key-pairs")]
    delete_key_pairs(DeleteKeyPairsRequest) -> DeleteKeyPairsResponse;

    /// Lists SSH key pairs.
    #[cfg(feature = "key-pairs")]
    describe_key_pairs(DescribeKeyPairsRequest) -> DescribeKeyPairsResponse;

    /// Imports an existing public key.
    #[cfg(feature = "key-pairs")]
    import_key_pair(ImportKeyPairRequest) -> ImportKeyPairResponse;

    /// Changes the name or description of a key pair.
    #[cfg(feature = "key-pairs")]
    modify_key_pair_attribute(ModifyKeyPairAttributeRequest) -> ModifyKeyPairAttributeResponse;

    /// Associates key pairs with instances.
    #[cfg(feature = "key-pairs")]
    associate_instances_key_pairs(AssociateInstancesKeyPairsRequest) -> AssociateInstancesKeyPairsResponse;

    /// Removes key pairs from instances.
    #[cfg(feature = "key-pairs")]
    disassociate_instances_key_pairs(DisassociateInstancesKeyPairsRequest) -> DisassociateInstancesKeyPairsResponse;

    /// Creates dedicated hosts.
    #[cfg(feature = "hosts")]
    allocate_hosts(AllocateHostsRequest) -> AllocateHostsResponse;

    /// Lists dedicated hosts.
    #[cfg(feature = "hosts")]
    describe_hosts(DescribeHostsRequest) -> DescribeHostsResponse;

    /// Changes the name, renewal flag or project of dedicated hosts.
    #[cfg(feature = "hosts")]
    modify_hosts_attribute(ModifyHostsAttributeRequest) -> ModifyHostsAttributeResponse;

    /// Creates a spread placement group.
    #[cfg(feature = "disaster-recover-groups")]
    create_disaster_recover_group(CreateDisasterRecoverGroupRequest) -> CreateDisasterRecoverGroupResponse;

    /// Deletes spread placement groups. The groups must be empty.
    #[cfg(feature = "disaster-recover-groups")]
    delete_disaster_recover_groups(DeleteDisasterRecoverGroupsRequest) -> DeleteDisasterRecoverGroupsResponse;

    /// Lists spread placement groups.
    #[cfg(feature = "disaster-recover-groups")]
    describe_disaster_recover_groups(DescribeDisasterRecoverGroupsRequest) -> DescribeDisasterRecoverGroupsResponse;

    /// Renames a spread placement group.
    #[cfg(feature = "disaster-recover-groups")]
    modify_disaster_recover_group_attribute(ModifyDisasterRecoverGroupAttributeRequest) -> ModifyDisasterRecoverGroupAttributeResponse;

    /// Returns the spread placement group quotas.
    #[cfg(feature = "disaster-recover-groups")]
    describe_disaster_recover_group_quota(DescribeDisasterRecoverGroupQuotaRequest) -> DescribeDisasterRecoverGroupQuotaResponse;

    /// Lists the reserved instances owned by the account.
    #[cfg(feature = "reserved-instances")]
    describe_reserved_instances(DescribeReservedInstancesRequest) -> DescribeReservedInstancesResponse;

    /// Lists the reserved instance offerings.
    #[cfg(feature = "reserved-instances")]
    describe_reserved_instances_offerings(DescribeReservedInstancesOfferingsRequest) -> DescribeReservedInstancesOfferingsResponse;

    /// Purchases a reserved instance offering.
    #[cfg(feature = "reserved-instances")]
    purchase_reserved_instances_offering(PurchaseReservedInstancesOfferingRequest) -> PurchaseReservedInstancesOfferingResponse;

    /// Creates a launch template, and its first version.
    #[cfg(feature = "launch-templates")]
    create_launch_template(CreateLaunchTemplateRequest) -> CreateLaunchTemplateResponse;

    /// Lists launch templates.
    #[cfg(feature = "launch-templates")]
    describe_launch_templates(DescribeLaunchTemplatesRequest) -> DescribeLaunchTemplatesResponse;

    /// Deletes a launch template and all its versions.
    #[cfg(feature = "launch-templates")]
    delete_launch_template(DeleteLaunchTemplateRequest) -> DeleteLaunchTemplateResponse;

    /// Creates a new version of a launch template.
    #[cfg(feature = "launch-templates")]
    create_launch_template_version(CreateLaunchTemplateVersionRequest) -> CreateLaunchTemplateVersionResponse;

    /// Lists the versions of a launch template.
    #[cfg(feature = "launch-templates")]
    describe_launch_template_versions(DescribeLaunchTemplateVersionsRequest) -> DescribeLaunchTemplateVersionsResponse;

    /// Deletes versions of a launch template. The default version cannot be deleted.
    #[cfg(feature = "launch-templates")]
    delete_launch_template_versions(DeleteLaunchTemplateVersionsRequest) -> DeleteLaunchTemplateVersionsResponse;

    /// Changes the default version of a launch template.
    #[cfg(feature = "launch-templates")]
    modify_launch_template_default_version(ModifyLaunchTemplateDefaultVersionRequest) -> ModifyLaunchTemplateDefaultVersionResponse;

    /// Lists maintenance tasks.
    #[cfg(feature = "maintenance")]
    describe_task_info(DescribeTaskInfoRequest) -> DescribeTaskInfoResponse;
}
