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

//! Images, image sharing and image import.

use super::{Filter, Tag, TagSpecification};
use common::request::BaseRequest;

/// An image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Image {
    /// The image id.
    pub image_id: Option<String>,

    /// The operating system name.
    pub os_name: Option<String>,

    /// One of `PRIVATE_IMAGE`, `PUBLIC_IMAGE`, `SHARED_IMAGE`.
    pub image_type: Option<String>,

    /// The creation time, in ISO 8601 format.
    pub created_time: Option<String>,

    /// The image name.
    pub image_name: Option<String>,

    /// A description of the image.
    pub image_description: Option<String>,

    /// The image size, in GiB.
    pub image_size: Option<i64>,

    /// The processor architecture, for example `x86_64` or `arm`.
    pub architecture: Option<String>,

    /// One of `CREATING`, `NORMAL`, `CREATEFAILED`, `USING`, `SYNCING`, `IMPORTING`, `IMPORTFAILED`.
    pub image_state: Option<String>,

    /// The operating system platform.
    pub platform: Option<String>,

    /// The account that created the image.
    pub image_creator: Option<String>,

    /// The source of the image.
    pub image_source: Option<String>,

    /// The progress of the copy, in percent.
    pub sync_percent: Option<i64>,

    /// If true, the image supports cloud-init.
    pub is_support_cloudinit: Option<bool>,

    /// The snapshots.
    pub snapshot_set: Option<Vec<Snapshot>>,

    /// The tags.
    pub tags: Option<Vec<Tag>>,

    /// The license type of the operating system.
    pub license_type: Option<String>,
}

/// A snapshot associated with an image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Snapshot {
    /// The snapshot id.
    pub snapshot_id: Option<String>,

    /// Either `SYSTEM_DISK` or `DATA_DISK`.
    pub disk_usage: Option<String>,

    /// The disk size, in GiB.
    pub disk_size: Option<i64>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SharePermission {
    /// The creation time, in ISO 8601 format.
    pub created_time: Option<String>,

    /// The account id.
    pub account_id: Option<String>,
}

/// An image copy created by [SyncImagesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SyncImage {
    /// The image id.
    pub image_id: Option<String>,

    /// The destination region.
    pub region: Option<String>,
}

/// The operating systems supported by [ImportImageRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ImageOsList {
    /// The supported Windows versions.
    pub windows: Option<Vec<String>>,

    /// The supported Linux distributions.
    pub linux: Option<Vec<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OsVersion {
    /// The operating system name.
    pub os_name: Option<String>,

    /// The operating system versions.
    pub os_versions: Option<Vec<String>>,

    /// The processor architecture, for example `x86_64` or `arm`.
    pub architecture: Option<Vec<String>>,
}

/// Lists images.
///
/// Set at most one of `image_ids` and `filters`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeImagesRequest {
    /// The image ids.
    pub image_ids: Option<Vec<String>>,

    /// Supported filters include `image-id`, `image-type`, `image-name` and `platform`.
    pub filters: Option<Vec<Filter>>,

    /// The number of results to skip.
    pub offset: Option<u64>,

    /// The maximum number of results to return.
    pub limit: Option<u64>,

    /// Only return images that can run on this instance type.
    pub instance_type: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeImagesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeImagesResponseParams {
    /// The images.
    pub image_set: Option<Vec<Image>>,

    /// The total number of matching resources.
    pub total_count: Option<i64>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Creates an image from an instance or a set of snapshots.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateImageRequest {
    /// The image name.
    pub image_name: Option<String>,

    /// The instance id.
    pub instance_id: Option<String>,

    /// A description of the image.
    pub image_description: Option<String>,

    /// `TRUE` to shut down the instance if a soft shutdown fails.
    pub force_poweroff: Option<String>,

    /// If true, runs Sysprep on Windows images.
    pub sysprep: Option<String>,

    /// The data disks to include in the image.
    pub data_disk_ids: Option<Vec<String>>,

    /// The snapshots to create the image from.
    pub snapshot_ids: Option<Vec<String>>,

    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [CreateImageRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateImageResponseParams {
    /// The image id.
    pub image_id: Option<String>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Deletes images.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteImagesRequest {
    /// The image ids.
    pub image_ids: Option<Vec<String>>,

    /// If true, also deletes the snapshots bound to the image.
    pub delete_binded_snap: Option<bool>,

    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DeleteImagesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteImagesResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Imports an image from object storage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ImportImageRequest {
    /// The processor architecture, for example `x86_64` or `arm`.
    pub architecture: Option<String>,

    /// The operating system type.
    pub os_type: Option<String>,

    /// The operating system version.
    pub os_version: Option<String>,

    /// The COS URL of the image file.
    pub image_url: Option<String>,

    /// The image name.
    pub image_name: Option<String>,

    /// A description of the image.
    pub image_description: Option<String>,

    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// If true, skips the image validation.
    pub force: Option<bool>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// The license type of the operating system.
    pub license_type: Option<String>,

    /// The boot mode, one of `Legacy BIOS` or `UEFI`.
    pub boot_mode: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ImportImageRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ImportImageResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Changes the name or description of an image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyImageAttributeRequest {
    /// The image id.
    pub image_id: Option<String>,

    /// The image name.
    pub image_name: Option<String>,

    /// A description of the image.
    pub image_description: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ModifyImageAttributeRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyImageAttributeResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Shares an image with other accounts, or stops sharing it.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyImageSharePermissionRequest {
    /// The image id.
    pub image_id: Option<String>,

    /// The accounts to share the image with or to stop sharing with.
    pub account_ids: Option<Vec<String>>,

    /// Either `SHARE` or `CANCEL`.
    pub permission: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ModifyImageSharePermissionRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyImageSharePermissionResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists the accounts an image is shared with.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeImageSharePermissionRequest {
    /// The image id.
    pub image_id: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeImageSharePermissionRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeImageSharePermissionResponseParams {
    /// The accounts the image is shared with.
    pub share_permission_set: Option<Vec<SharePermission>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Copies images to other regions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SyncImagesRequest {
    /// The image ids.
    pub image_ids: Option<Vec<String>>,

    /// The regions to copy the images to.
    pub destination_regions: Option<Vec<String>>,

    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// The image name.
    pub image_name: Option<String>,

    /// If true, also returns the images each region supports.
    pub image_set_required: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [SyncImagesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SyncImagesResponseParams {
    /// The images created in the destination regions.
    pub image_set: Option<Vec<SyncImage>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists the operating systems supported by [ImportImageRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeImportImageOsRequest {
    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeImportImageOsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeImportImageOsResponseParams {
    /// The operating systems supported by image import.
    pub import_image_os_list_supported: Option<ImageOsList>,

    /// The operating system versions supported by image import.
    pub import_image_os_version_set: Option<Vec<OsVersion>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    DescribeImages: DescribeImagesRequest -> DescribeImagesResponseParams as DescribeImagesResponse;
    CreateImage: CreateImageRequest -> CreateImageResponseParams as CreateImageResponse;
    DeleteImages: DeleteImagesRequest -> DeleteImagesResponseParams as DeleteImagesResponse;
    ImportImage: ImportImageRequest -> ImportImageResponseParams as ImportImageResponse;
    ModifyImageAttribute: ModifyImageAttributeRequest -> ModifyImageAttributeResponseParams as ModifyImageAttributeResponse;
    ModifyImageSharePermission: ModifyImageSharePermissionRequest -> ModifyImageSharePermissionResponseParams as ModifyImageSharePermissionResponse;
    DescribeImageSharePermission: DescribeImageSharePermissionRequest -> DescribeImageSharePermissionResponseParams as DescribeImageSharePermissionResponse;
    SyncImages: SyncImagesRequest -> SyncImagesResponseParams as SyncImagesResponse;
    DescribeImportImageOs: DescribeImportImageOsRequest -> DescribeImportImageOsResponseParams as DescribeImportImageOsResponse;
}
