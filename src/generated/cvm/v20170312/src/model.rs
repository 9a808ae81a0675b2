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

//! The records sent to and received from the Cloud Virtual Machine service.
//!
//! Each operation has a request record (for example [CreateKeyPairRequest])
//! and a response parameters record (for example
//! [CreateKeyPairResponseParams]). The response returned by the client is a
//! [Response][common::response::Response] wrapping the parameters, aliased as
//! [CreateKeyPairResponse].
//!
//! All the fields are optional. Fields set to `None` are not sent to the
//! service. Fields the service does not return are left as `None`.

// Implements the codec and operation traits for each request, and defines the
// response alias.
macro_rules! operations {
    ($($action:ident: $request:ident -> $params:ident as $response:ident;)*) => {
        $(
            impl common::message::Message for $request {
                fn typename() -> &'static str {
                    stringify!($request)
                }
            }

            impl common::request::Operation for $request {
                type Response = $params;
                const SERVICE: &'static str = crate::SERVICE;
                const VERSION: &'static str = crate::VERSION;
                const ACTION: &'static str = stringify!($action);

                fn base(&self) -> &common::request::BaseRequest {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut common::request::BaseRequest {
                    &mut self.base
                }
            }

            impl common::response::ResponseParams for $params {
                fn request_id(&self) -> Option<&str> {
                    self.request_id.as_deref()
                }
            }

            #[doc = concat!("The response for [", stringify!($request), "].")]
            pub type $response = common::response::Response<$params>;
        )*
    };
}

#[cfg(feature = "disaster-recover-groups")]
mod disaster_recover_groups;
#[cfg(feature = "disaster-recover-groups")]
pub use disaster_recover_groups::*;
#[cfg(feature = "hosts")]
mod hosts;
#[cfg(feature = "hosts")]
pub use hosts::*;
#[cfg(feature = "images")]
mod images;
#[cfg(feature = "images")]
pub use images::*;
#[cfg(feature = "instances")]
mod instances;
#[cfg(feature = "instances")]
pub use instances::*;
#[cfg(feature = "key-pairs")]
mod key_pairs;
#[cfg(feature = "key-pairs")]
pub use key_pairs::*;
#[cfg(feature = "launch-templates")]
mod launch_templates;
#[cfg(feature = "launch-templates")]
pub use launch_templates::*;
#[cfg(feature = "maintenance")]
mod maintenance;
#[cfg(feature = "maintenance")]
pub use maintenance::*;
#[cfg(feature = "regions")]
mod regions;
#[cfg(feature = "regions")]
pub use regions::*;
#[cfg(feature = "reserved-instances")]
mod reserved_instances;
#[cfg(feature = "reserved-instances")]
pub use reserved_instances::*;

/// A filter for the `Describe*` operations.
///
/// Filters with different names are combined with `AND`. The values of a
/// single filter are combined with `OR`.
///
/// # Example
/// ```
/// # use tencentcloud_cvm_v20170312::model::Filter;
/// let filter = Filter {
///     name: Some("zone".into()),
///     values: Some(vec!["ap-guangzhou-3".into(), "ap-guangzhou-4".into()]),
/// };
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Filter {
    /// The filter name, for example `zone` or `instance-name`.
    pub name: Option<String>,

    /// The values to match.
    pub values: Option<Vec<String>>,
}

/// A resource tag.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Tag {
    /// The tag key.
    pub key: Option<String>,

    /// The tag value.
    pub value: Option<String>,
}

/// The tags to attach to the resources created by an operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TagSpecification {
    /// The type of resource to tag, for example `instance`, `host`,
    /// `image` or `keypair`.
    pub resource_type: Option<String>,

    /// The tags.
    pub tags: Option<Vec<Tag>>,
}

/// The location of an instance or dedicated host.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Placement {
    /// The availability zone, for example `ap-guangzhou-3`.
    pub zone: Option<String>,

    /// The project id. The default project is `0`.
    pub project_id: Option<i64>,

    /// The dedicated hosts to launch the instances on.
    pub host_ids: Option<Vec<String>>,

    /// The IP addresses of the dedicated hosts.
    pub host_ips: Option<Vec<String>>,

    /// The dedicated host of an existing instance. Output only.
    pub host_id: Option<String>,
}

/// The system disk of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SystemDisk {
    /// The disk type, for example `CLOUD_PREMIUM` or `CLOUD_SSD`.
    pub disk_type: Option<String>,

    /// The disk id.
    pub disk_id: Option<String>,

    /// The disk size, in GiB.
    pub disk_size: Option<i64>,

    /// The Cloud Dedicated Cluster id.
    pub cdc_id: Option<String>,

    /// The disk name.
    pub disk_name: Option<String>,
}

/// A data disk attached to an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DataDisk {
    /// The disk size, in GiB.
    pub disk_size: Option<i64>,

    /// The disk type, for example `LOCAL_BASIC` or `CLOUD_BSSD`.
    pub disk_type: Option<String>,

    /// The disk id.
    pub disk_id: Option<String>,

    /// If true, the disk is released when the instance is terminated.
    pub delete_with_instance: Option<bool>,

    /// The snapshot used to initialize the disk.
    pub snapshot_id: Option<String>,

    /// If true, the disk is encrypted.
    pub encrypt: Option<bool>,

    /// The KMS key used to encrypt the disk.
    pub kms_key_id: Option<String>,

    /// The additional throughput, in MiB/s.
    pub throughput_performance: Option<i64>,

    /// The Cloud Dedicated Cluster id.
    pub cdc_id: Option<String>,

    /// If true, the disk uses burst performance.
    pub burst_performance: Option<bool>,

    /// The disk name.
    pub disk_name: Option<String>,
}

/// The public network settings of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InternetAccessible {
    /// The network billing mode, for example `TRAFFIC_POSTPAID_BY_HOUR`.
    pub internet_charge_type: Option<String>,

    /// The maximum outbound bandwidth, in Mbps.
    pub internet_max_bandwidth_out: Option<i64>,

    /// If true, a public IP address is assigned.
    pub public_ip_assigned: Option<bool>,

    /// The bandwidth package id.
    pub bandwidth_package_id: Option<String>,
}

/// The private network settings of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VirtualPrivateCloud {
    /// The VPC id.
    pub vpc_id: Option<String>,

    /// The subnet id.
    pub subnet_id: Option<String>,

    /// If true, the instance is used as a public gateway.
    pub as_vpc_gateway: Option<bool>,

    /// The private IP addresses.
    pub private_ip_addresses: Option<Vec<String>>,

    /// The number of IPv6 addresses.
    pub ipv6_address_count: Option<u64>,
}

/// The login settings of an instance.
///
/// Set at most one of `password`, `key_ids` or `keep_image_login`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LoginSettings {
    /// The login password.
    pub password: Option<String>,

    /// The ids of the key pairs, for Linux instances.
    pub key_ids: Option<Vec<String>>,

    /// `TRUE` to keep the login settings of the image.
    pub keep_image_login: Option<String>,
}

impl std::fmt::Debug for LoginSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginSettings")
            .field("password", &self.password.as_ref().map(|_| "[censored]"))
            .field("key_ids", &self.key_ids)
            .field("keep_image_login", &self.keep_image_login)
            .finish()
    }
}

/// The agents enabled on an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EnhancedService {
    /// Enables the cloud security agent.
    pub security_service: Option<RunSecurityServiceEnabled>,

    /// Enables the cloud monitor agent.
    pub monitor_service: Option<RunMonitorServiceEnabled>,

    /// Enables the automation tools agent.
    pub automation_service: Option<RunAutomationServiceEnabled>,
}

/// Enables the cloud security agent.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RunSecurityServiceEnabled {
    /// If true, the cloud security agent is installed.
    pub enabled: Option<bool>,
}

/// Enables the cloud monitor agent.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RunMonitorServiceEnabled {
    /// If true, the cloud monitor agent is installed.
    pub enabled: Option<bool>,
}

/// Enables the automation tools agent.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RunAutomationServiceEnabled {
    /// If true, the automation tools agent is installed.
    pub enabled: Option<bool>,
}

/// The subscription settings for prepaid instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstanceChargePrepaid {
    /// The subscription period, in months.
    pub period: Option<i64>,

    /// The renewal flag, for example `NOTIFY_AND_AUTO_RENEW`.
    pub renew_flag: Option<String>,
}

/// The subscription settings for prepaid dedicated hosts.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ChargePrepaid {
    /// The term, in months.
    pub period: Option<u64>,

    /// The auto-renewal setting.
    pub renew_flag: Option<String>,
}

/// The market options for spot instances.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstanceMarketOptionsRequest {
    /// The spot instance settings.
    pub spot_options: Option<SpotMarketOptions>,

    /// The market type, `spot` is the only supported value.
    pub market_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SpotMarketOptions {
    /// The maximum bid price.
    pub max_price: Option<String>,

    /// The request type, `one-time` is the only supported value.
    pub spot_instance_type: Option<String>,
}

/// A scheduled action on an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ActionTimer {
    /// The action, `TerminateInstances` is the only supported value.
    pub timer_action: Option<String>,

    /// The time of the action, in ISO 8601 format.
    pub action_time: Option<String>,

    /// Extra settings of the action.
    pub externals: Option<Externals>,
}

/// Additional attributes.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Externals {
    /// If true, releases the elastic IP addresses too.
    pub release_address: Option<bool>,

    /// The network types the image does not support.
    pub unsupport_networks: Option<Vec<String>>,

    /// The local storage of the instance type.
    pub storage_block_attr: Option<StorageBlock>,
}

/// The attributes of the HDD local storage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StorageBlock {
    /// The local storage type.
    #[serde(rename = "Type")]
    pub r#type: Option<String>,

    /// The minimum size, in GiB.
    pub min_size: Option<i64>,

    /// The maximum size, in GiB.
    pub max_size: Option<i64>,
}

/// A reference to a launch template.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchTemplate {
    /// The launch template id.
    pub launch_template_id: Option<String>,

    /// The version to use, the default version if not set.
    pub launch_template_version: Option<u64>,
}

/// The price of an instance and its public network.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Price {
    /// The price of the instances.
    pub instance_price: Option<ItemPrice>,

    /// The price of the public bandwidth.
    pub bandwidth_price: Option<ItemPrice>,
}

/// The price of a single billable item.
///
/// Prepaid items report `original_price` and `discount_price`. Postpaid
/// items report the per-unit prices, which may depend on the usage tier.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemPrice {
    /// The unit price for the first usage tier.
    pub unit_price: Option<f64>,

    /// The billing unit, for example `HOUR` or `GB`.
    pub charge_unit: Option<String>,

    /// The price before discounts.
    pub original_price: Option<f64>,

    /// The price after discounts.
    pub discount_price: Option<f64>,

    /// The discount, for example `20.0` for 20% off.
    pub discount: Option<f64>,

    /// The discounted unit price for the first usage tier.
    pub unit_price_discount: Option<f64>,

    /// The unit price for the second usage tier.
    pub unit_price_second_step: Option<f64>,

    /// The discounted unit price for the second usage tier.
    pub unit_price_discount_second_step: Option<f64>,

    /// The unit price for the third usage tier.
    pub unit_price_third_step: Option<f64>,

    /// The discounted unit price for the third usage tier.
    pub unit_price_discount_third_step: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::message::{from_json_slice, to_json_bytes};
    use serde_json::{Value, json};
    use test_case::test_case;

    #[test_case(Filter::default(), json!({}))]
    #[test_case(Filter { name: Some("zone".into()), values: Some(vec![]) }, json!({"Name": "zone", "Values": []}))]
    fn filter_encode(input: Filter, want: Value) -> anyhow::Result<()> {
        let got = serde_json::from_slice::<Value>(&to_json_bytes(&input)?)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn tag_empty_value() -> anyhow::Result<()> {
        let input = Tag {
            key: Some("env".into()),
            value: Some(String::new()),
        };
        let got = serde_json::from_slice::<Value>(&to_json_bytes(&input)?)?;
        assert_eq!(got, json!({"Key": "env", "Value": ""}));
        Ok(())
    }

    #[test]
    fn nested_empty_record() -> anyhow::Result<()> {
        let input = EnhancedService {
            security_service: Some(RunSecurityServiceEnabled::default()),
            monitor_service: Some(RunMonitorServiceEnabled { enabled: Some(false) }),
            automation_service: None,
        };
        let got = serde_json::from_slice::<Value>(&to_json_bytes(&input)?)?;
        assert_eq!(
            got,
            json!({"SecurityService": {}, "MonitorService": {"Enabled": false}})
        );
        Ok(())
    }

    #[test]
    fn storage_block_type() -> anyhow::Result<()> {
        let input = json!({"Type": "LOCAL_PRO", "MinSize": 1, "MaxSize": 10});
        let got = from_json_slice::<StorageBlock>(input.to_string().as_bytes())?;
        assert_eq!(got.r#type.as_deref(), Some("LOCAL_PRO"));
        let trip = serde_json::from_slice::<Value>(&to_json_bytes(&got)?)?;
        assert_eq!(trip, input);
        Ok(())
    }

    #[test]
    fn item_price_floats() -> anyhow::Result<()> {
        let input = json!({"UnitPrice": 0.5, "ChargeUnit": "HOUR", "Discount": 100.0});
        let got = from_json_slice::<ItemPrice>(input.to_string().as_bytes())?;
        assert_eq!(got.unit_price, Some(0.5));
        assert_eq!(got.discount, Some(100.0));
        assert_eq!(got.original_price, None);
        Ok(())
    }

    #[test]
    fn login_settings_debug() {
        let input = LoginSettings {
            password: Some("hunter2".into()),
            ..Default::default()
        };
        let got = format!("{input:?}");
        assert!(!got.contains("hunter2"), "{got}");
        assert!(got.contains("[censored]"), "{got}");
    }
}
