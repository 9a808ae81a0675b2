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

//! Reserved instances.

use super::Filter;
use common::request::BaseRequest;

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReservedInstances {
    /// The reserved instance id.
    pub reserved_instances_id: Option<String>,

    /// The instance type, for example `S5.MEDIUM4`.
    pub instance_type: Option<String>,

    /// The availability zone, for example `ap-guangzhou-3`.
    pub zone: Option<String>,

    /// The start time, in ISO 8601 format.
    pub start_time: Option<String>,

    /// The end time, in ISO 8601 format.
    pub end_time: Option<String>,

    /// The term, in seconds.
    pub duration: Option<i64>,

    /// The number of instances.
    pub instance_count: Option<i64>,

    /// The platform of the reserved instances, for example `linux`.
    pub product_description: Option<String>,

    /// One of `active`, `pending` or `retired`.
    pub state: Option<String>,

    /// The currency of the prices.
    pub currency_code: Option<String>,

    /// The payment option, for example `All Upfront`.
    pub offering_type: Option<String>,
}

/// A reserved instance offering available for purchase.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReservedInstancesOffering {
    /// The availability zone, for example `ap-guangzhou-3`.
    pub zone: Option<String>,

    /// The currency of the prices.
    pub currency_code: Option<String>,

    /// The term, in seconds.
    pub duration: Option<i64>,

    /// The upfront price.
    pub fixed_price: Option<f64>,

    /// The instance type, for example `S5.MEDIUM4`.
    pub instance_type: Option<String>,

    /// The payment option, for example `All Upfront`.
    pub offering_type: Option<String>,

    /// The reserved instance offering id.
    pub reserved_instances_offering_id: Option<String>,

    /// The platform of the reserved instances, for example `linux`.
    pub product_description: Option<String>,

    /// The usage-based price.
    pub usage_price: Option<f64>,
}

/// Lists the reserved instances owned by the account.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeReservedInstancesRequest {
    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// The number of results to skip.
    pub offset: Option<i64>,

    /// The maximum number of results to return.
    pub limit: Option<i64>,

    /// Restricts the results to the resources matching all filters.
    pub filters: Option<Vec<Filter>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeReservedInstancesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeReservedInstancesResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<i64>,

    /// The reserved instances.
    pub reserved_instances_set: Option<Vec<ReservedInstances>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists the reserved instance offerings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsRequest {
    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// The number of results to skip.
    pub offset: Option<i64>,

    /// The maximum number of results to return.
    pub limit: Option<i64>,

    /// The maximum term, in seconds.
    pub max_duration: Option<i64>,

    /// The minimum term, in seconds.
    pub min_duration: Option<i64>,

    /// Restricts the results to the resources matching all filters.
    pub filters: Option<Vec<Filter>>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeReservedInstancesOfferingsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<i64>,

    /// The reserved instance offerings.
    pub reserved_instances_offerings_set: Option<Vec<ReservedInstancesOffering>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Purchases a reserved instance offering.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PurchaseReservedInstancesOfferingRequest {
    /// The number of instances.
    pub instance_count: Option<i64>,

    /// The reserved instance offering id.
    pub reserved_instances_offering_id: Option<String>,

    /// If true, only validates the request without creating resources.
    pub dry_run: Option<bool>,

    /// An idempotency token, unique for each request.
    pub client_token: Option<String>,

    /// The reserved instance name.
    pub reserved_instance_name: Option<String>,

    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [PurchaseReservedInstancesOfferingRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PurchaseReservedInstancesOfferingResponseParams {
    /// The reserved instance id.
    pub reserved_instance_id: Option<String>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    DescribeReservedInstances: DescribeReservedInstancesRequest -> DescribeReservedInstancesResponseParams as DescribeReservedInstancesResponse;
    DescribeReservedInstancesOfferings: DescribeReservedInstancesOfferingsRequest -> DescribeReservedInstancesOfferingsResponseParams as DescribeReservedInstancesOfferingsResponse;
    PurchaseReservedInstancesOffering: PurchaseReservedInstancesOfferingRequest -> PurchaseReservedInstancesOfferingResponseParams as PurchaseReservedInstancesOfferingResponse;
}
