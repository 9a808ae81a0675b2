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

#[cfg(all(test, feature = "key-pairs", feature = "instances"))]
mod test {
    use common::message::{Message, to_json_bytes};
    use common::response::Response;
    use serde_json::{Value, json};
    use std::error::Error as _;
    use tencentcloud_cvm_v20170312::model::*;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    fn encode<T: Message>(input: &T) -> anyhow::Result<Value> {
        Ok(serde_json::from_slice(&to_json_bytes(input)?)?)
    }

    #[test]
    fn create_key_pair_zero_is_sent() -> Result {
        let request = CreateKeyPairRequest {
            key_name: Some("demo".into()),
            project_id: Some(0),
            ..Default::default()
        };
        assert_eq!(request.to_json_string(), r#"{"KeyName":"demo","ProjectId":0}"#);
        Ok(())
    }

    #[test]
    fn create_key_pair_unset_is_omitted() -> Result {
        let request = CreateKeyPairRequest {
            key_name: Some("demo".into()),
            ..Default::default()
        };
        assert_eq!(encode(&request)?, json!({"KeyName": "demo"}));
        Ok(())
    }

    #[test]
    fn create_key_pair_unknown_key() {
        let got = CreateKeyPairRequest::from_json_string(r#"{"KeyName":"demo","Typo":true}"#);
        let err = got.unwrap_err();
        assert!(err.is_build_request(), "{err:?}");
        assert_eq!(err.code(), Some("ClientError.BuildRequestError"));
        assert_eq!(err.request_id(), Some(""));
        let message = err.message().unwrap_or_default();
        assert!(message.contains("CreateKeyPairRequest"), "{message}");
        assert!(message.contains("Typo"), "{message}");
        assert!(err.source().is_none(), "{err:?}");
    }

    #[test]
    fn create_key_pair_response() -> Result {
        let input = r#"{"Response":{"KeyPair":{"KeyId":"skey-1","KeyName":"demo"},"RequestId":"r-1"}}"#;
        let got = CreateKeyPairResponse::from_json_string(input)?;
        let key_pair = got.response.key_pair.clone().unwrap_or_default();
        assert_eq!(key_pair.key_id.as_deref(), Some("skey-1"));
        assert_eq!(key_pair.key_name.as_deref(), Some("demo"));
        assert_eq!(got.request_id(), Some("r-1"));
        Ok(())
    }

    #[test]
    fn response_ignores_unknown_keys() -> Result {
        let input = r#"{"Response":{"RequestId":"r-2","NewlyAddedField":{"x":1}}}"#;
        let got = CreateKeyPairResponse::from_json_string(input)?;
        assert_eq!(got.request_id(), Some("r-2"));
        assert_eq!(got.response.key_pair, None);
        assert_eq!(got.response, CreateKeyPairResponseParams {
            key_pair: None,
            request_id: Some("r-2".into()),
        });
        Ok(())
    }

    #[test]
    fn describe_instances_filters() -> Result {
        let request = DescribeInstancesRequest {
            filters: Some(vec![Filter {
                name: Some("zone".into()),
                values: Some(vec!["ap-guangzhou-1".into(), "ap-guangzhou-2".into()]),
            }]),
            ..Default::default()
        };
        assert_eq!(
            encode(&request)?,
            json!({"Filters": [{"Name": "zone", "Values": ["ap-guangzhou-1", "ap-guangzhou-2"]}]})
        );
        Ok(())
    }

    #[test]
    fn nested_roundtrip() -> Result {
        let request = RunInstancesRequest {
            placement: Some(Placement {
                zone: Some("ap-guangzhou-3".into()),
                project_id: Some(0),
                ..Default::default()
            }),
            system_disk: Some(SystemDisk {
                disk_type: Some("CLOUD_PREMIUM".into()),
                disk_size: Some(50),
                ..Default::default()
            }),
            data_disks: Some(vec![DataDisk {
                disk_size: Some(100),
                delete_with_instance: Some(false),
                ..Default::default()
            }]),
            action_timer: Some(ActionTimer {
                externals: Some(Externals {
                    storage_block_attr: Some(StorageBlock::default()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            tag_specification: Some(vec![TagSpecification {
                resource_type: Some("instance".into()),
                tags: Some(vec![]),
            }]),
            ..Default::default()
        };
        let got = RunInstancesRequest::from_json_string(&request.to_json_string())?;
        assert_eq!(got, request);
        Ok(())
    }

    #[test_case(DescribeInstancesRequest { instance_ids: Some(vec![]), ..Default::default() }, json!({"InstanceIds": []}); "empty sequence")]
    #[test_case(DescribeInstancesRequest { filters: Some(vec![Filter::default()]), ..Default::default() }, json!({"Filters": [{}]}); "empty nested record")]
    #[test_case(DescribeInstancesRequest { offset: Some(0), limit: Some(100), ..Default::default() }, json!({"Offset": 0, "Limit": 100}); "zero and non-zero integers")]
    #[test_case(DescribeInstancesRequest::default(), json!({}); "nothing set")]
    fn describe_instances_encode(input: DescribeInstancesRequest, want: Value) -> Result {
        assert_eq!(encode(&input)?, want);
        Ok(())
    }

    #[test_case(json!({"KeyName": null}); "null")]
    #[test_case(json!({}); "missing")]
    fn absent_decodes_to_none(input: Value) -> Result {
        let got = CreateKeyPairRequest::from_json_string(&input.to_string())?;
        assert_eq!(got, CreateKeyPairRequest::default());
        Ok(())
    }

    #[test]
    fn strict_reports_every_unknown_key() {
        let input = json!({"KeyIds": ["skey-1"], "Zzz": 1, "KeyID": "x", "Limit": 10});
        let err = DescribeKeyPairsRequest::from_json_string(&input.to_string()).unwrap_err();
        assert_eq!(
            err.message(),
            Some("DescribeKeyPairsRequest has unknown keys: KeyID, Zzz")
        );
    }

    #[test]
    fn strict_type_mismatch() {
        let err = CreateKeyPairRequest::from_json_string(r#"{"ProjectId":"zero"}"#).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>());
        assert!(matches!(source, Some(e) if e.is_data()), "{err:?}");
    }

    #[test]
    fn envelope_is_not_encoded() -> Result {
        let mut request = CreateKeyPairRequest {
            key_name: Some("demo".into()),
            ..Default::default()
        };
        request
            .base
            .with_api_info("cvm", "2017-03-12", "CreateKeyPair")
            .set_region("ap-guangzhou");
        assert_eq!(encode(&request)?, json!({"KeyName": "demo"}));
        Ok(())
    }

    #[test]
    fn string_roundtrip() -> Result {
        let name = "dëmo \"quoted\" \\ back\\slash\n新しい 🔑";
        let request = CreateKeyPairRequest {
            key_name: Some(name.into()),
            ..Default::default()
        };
        let got = CreateKeyPairRequest::from_json_string(&request.to_json_string())?;
        assert_eq!(got.key_name.as_deref(), Some(name));
        Ok(())
    }

    #[test]
    fn large_integers() -> Result {
        let input = json!({"Response": {"TotalCount": i64::MAX, "RequestId": "r-3"}});
        let got = Response::<DescribeInstancesResponseParams>::from_json_string(&input.to_string())?;
        assert_eq!(got.response.total_count, Some(i64::MAX));
        Ok(())
    }

    #[test]
    fn response_reencode_skips_metadata() -> Result {
        let input = json!({"Response": {"KeyId": "skey-1", "RequestId": "r-4"}});
        let got = ImportKeyPairResponse::from_json_string(&input.to_string())?;
        let trip = serde_json::from_str::<Value>(&got.to_json_string())?;
        assert_eq!(trip, input);
        Ok(())
    }
}
