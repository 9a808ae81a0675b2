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

//! SSH key pairs.

use super::{Filter, Tag, TagSpecification};
use common::request::BaseRequest;

/// An SSH key pair.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct KeyPair {
    /// The key pair id, for example `skey-3glfot13`.
    pub key_id: Option<String>,

    /// The key pair name.
    pub key_name: Option<String>,

    /// The project id. The default project is `0`.
    pub project_id: Option<i64>,

    /// A description of the key pair.
    pub description: Option<String>,

    /// The public key, in OpenSSH format.
    pub public_key: Option<String>,

    /// The private key. Only returned when the key pair is created,
    /// the service does not store it.
    pub private_key: Option<String>,

    /// The instances that use this key pair.
    pub associated_instance_ids: Option<Vec<String>>,

    /// The creation time, in ISO 8601 format.
    pub created_time: Option<String>,

    /// The tags.
    pub tags: Option<Vec<Tag>>,
}

/// Creates an SSH key pair.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateKeyPairRequest {
    /// The name of the key pair, unique within a project.
    pub key_name: Option<String>,

    /// The project of the key pair, `0` is the default project.
    pub project_id: Option<i64>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [CreateKeyPairRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateKeyPairResponseParams {
    /// The new key pair, including its private key.
    pub key_pair: Option<KeyPair>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Deletes SSH key pairs.
///
/// Key pairs associated with instances cannot be deleted.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteKeyPairsRequest {
    /// The key pair ids.
    pub key_ids: Option<Vec<String>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DeleteKeyPairsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteKeyPairsResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists SSH key pairs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeKeyPairsRequest {
    /// The key pair ids.
    pub key_ids: Option<Vec<String>>,

    /// Supported filters are `project-id`, `key-name` and `tag-key`.
    pub filters: Option<Vec<Filter>>,

    /// The number of results to skip.
    pub offset: Option<i64>,

    /// The maximum number of results, at most `100`.
    pub limit: Option<i64>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeKeyPairsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeKeyPairsResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<i64>,

    /// The key pairs.
    pub key_pair_set: Option<Vec<KeyPair>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Imports an existing public key.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ImportKeyPairRequest {
    /// The key pair name.
    pub key_name: Option<String>,

    /// The project id. The default project is `0`.
    pub project_id: Option<i64>,

    /// The public key, in OpenSSH format.
    pub public_key: Option<String>,

    /// The tags to attach to the resources.
    pub tag_specification: Option<Vec<TagSpecification>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ImportKeyPairRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ImportKeyPairResponseParams {
    /// The key pair id.
    pub key_id: Option<String>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Changes the name or description of a key pair.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyKeyPairAttributeRequest {
    /// The key pair id.
    pub key_id: Option<String>,

    /// The key pair name.
    pub key_name: Option<String>,

    /// The new description of the key pair.
    pub description: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [ModifyKeyPairAttributeRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModifyKeyPairAttributeResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Associates key pairs with instances.
///
/// The instances must be stopped, or `force_stop` must be set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssociateInstancesKeyPairsRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The key pair ids.
    pub key_ids: Option<Vec<String>>,

    /// If true, stops the instances after a soft shutdown fails.
    pub force_stop: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [AssociateInstancesKeyPairsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssociateInstancesKeyPairsResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Removes key pairs from instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DisassociateInstancesKeyPairsRequest {
    /// The instance ids.
    pub instance_ids: Option<Vec<String>>,

    /// The key pair ids.
    pub key_ids: Option<Vec<String>>,

    /// If true, stops the instances after a soft shutdown fails.
    pub force_stop: Option<bool>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DisassociateInstancesKeyPairsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DisassociateInstancesKeyPairsResponseParams {
    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    CreateKeyPair: CreateKeyPairRequest -> CreateKeyPairResponseParams as CreateKeyPairResponse;
    DeleteKeyPairs: DeleteKeyPairsRequest -> DeleteKeyPairsResponseParams as DeleteKeyPairsResponse;
    DescribeKeyPairs: DescribeKeyPairsRequest -> DescribeKeyPairsResponseParams as DescribeKeyPairsResponse;
    ImportKeyPair: ImportKeyPairRequest -> ImportKeyPairResponseParams as ImportKeyPairResponse;
    ModifyKeyPairAttribute: ModifyKeyPairAttributeRequest -> ModifyKeyPairAttributeResponseParams as ModifyKeyPairAttributeResponse;
    AssociateInstancesKeyPairs: AssociateInstancesKeyPairsRequest -> AssociateInstancesKeyPairsResponseParams as AssociateInstancesKeyPairsResponse;
    DisassociateInstancesKeyPairs: DisassociateInstancesKeyPairsRequest -> DisassociateInstancesKeyPairsResponseParams as DisassociateInstancesKeyPairsResponse;
}
