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

//! Regions and availability zones.

use common::request::BaseRequest;

/// A region where the service is available.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegionInfo {
    /// The region id, for example `ap-guangzhou`.
    pub region: Option<String>,

    /// The display name of the region.
    pub region_name: Option<String>,

    /// `AVAILABLE` if the region can be used.
    pub region_state: Option<String>,
}

/// An availability zone.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ZoneInfo {
    /// The zone name, for example `ap-guangzhou-3`.
    pub zone: Option<String>,

    /// The display name of the zone.
    pub zone_name: Option<String>,

    /// The numeric zone id.
    pub zone_id: Option<String>,

    /// The availability of the zone.
    pub zone_state: Option<String>,
}

/// Lists the regions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeRegionsRequest {
    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeRegionsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeRegionsResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<u64>,

    /// The regions.
    pub region_set: Option<Vec<RegionInfo>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

/// Lists the availability zones in the region of the request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeZonesRequest {
    /// The request envelope. Never part of the JSON body.
    #[serde(skip)]
    pub base: BaseRequest,
}

/// The parameters returned by [DescribeZonesRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeZonesResponseParams {
    /// The total number of matching resources.
    pub total_count: Option<u64>,

    /// The availability zones.
    pub zone_set: Option<Vec<ZoneInfo>>,

    /// The unique id of the request, used for troubleshooting.
    pub request_id: Option<String>,
}

operations! {
    DescribeRegions: DescribeRegionsRequest -> DescribeRegionsResponseParams as DescribeRegionsResponse;
    DescribeZones: DescribeZonesRequest -> DescribeZonesResponseParams as DescribeZonesResponse;
}
