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

#[cfg(all(test, feature = "key-pairs", feature = "regions"))]
mod test {
    use common::credentials::Credential;
    use common::error::Error;
    use common::options::{ClientConfig, Language};
    use common::request::BaseRequest;
    use common::response::BaseResponse;
    use common::transport::Transport;
    use http::{HeaderMap, HeaderValue};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use tencentcloud_cvm_v20170312::client::Cvm;
    use tencentcloud_cvm_v20170312::errors;
    use tencentcloud_cvm_v20170312::model::*;
    type Result = anyhow::Result<()>;

    #[derive(Debug)]
    struct Captured {
        base: BaseRequest,
        body: Value,
    }

    // Returns canned responses, and captures the requests.
    #[derive(Debug, Default)]
    struct FakeTransport {
        responses: Mutex<Vec<(u16, Value)>>,
        captured: Mutex<Vec<Captured>>,
    }

    impl FakeTransport {
        fn with_response(status_code: u16, body: Value) -> Self {
            Self {
                responses: Mutex::new(vec![(status_code, body)]),
                ..Default::default()
            }
        }

        fn captured(&self) -> Vec<(BaseRequest, Value)> {
            self.captured
                .lock()
                .expect("lock is never poisoned in tests")
                .iter()
                .map(|c| (c.base.clone(), c.body.clone()))
                .collect()
        }
    }

    impl Transport for FakeTransport {
        async fn send(
            &self,
            request: &BaseRequest,
            body: bytes::Bytes,
        ) -> common::Result<BaseResponse> {
            let body = serde_json::from_slice::<Value>(&body).map_err(Error::io)?;
            self.captured
                .lock()
                .expect("lock is never poisoned in tests")
                .push(Captured {
                    base: request.clone(),
                    body,
                });
            let (status_code, response) = self
                .responses
                .lock()
                .expect("lock is never poisoned in tests")
                .pop()
                .ok_or_else(|| Error::io("no more canned responses"))?;
            let mut headers = HeaderMap::new();
            headers.insert("content-type", HeaderValue::from_static("application/json"));
            Ok(BaseResponse::new(
                status_code,
                headers,
                bytes::Bytes::from(response.to_string()),
            ))
        }
    }

    fn config() -> ClientConfig {
        ClientConfig::new()
            .set_region("ap-guangzhou")
            .set_credential(Credential::new("AKIDexample", "secret"))
    }

    #[tokio::test]
    async fn create_key_pair() -> Result {
        let transport = Arc::new(FakeTransport::with_response(
            200,
            json!({"Response": {
                "KeyPair": {"KeyId": "skey-1", "KeyName": "demo", "PrivateKey": "-----BEGIN"},
                "RequestId": "r-1"
            }}),
        ));
        let client = Cvm::from_arc(transport.clone(), config());
        let response = client
            .create_key_pair(CreateKeyPairRequest {
                key_name: Some("demo".into()),
                project_id: Some(0),
                ..Default::default()
            })
            .await?;
        assert_eq!(response.request_id(), Some("r-1"));
        assert_eq!(response.base().status_code(), 200);
        let key_pair = response.response.key_pair.clone().unwrap_or_default();
        assert_eq!(key_pair.key_id.as_deref(), Some("skey-1"));

        let captured = transport.captured();
        assert_eq!(captured.len(), 1);
        let (base, body) = &captured[0];
        assert_eq!(body, &json!({"KeyName": "demo", "ProjectId": 0}));
        assert_eq!(base.service(), "cvm");
        assert_eq!(base.version(), "2017-03-12");
        assert_eq!(base.action(), "CreateKeyPair");
        assert_eq!(base.region(), Some("ap-guangzhou"));
        assert_eq!(base.endpoint(), Some("cvm.tencentcloudapi.com"));
        assert_eq!(base.credential().map(Credential::secret_id), Some("AKIDexample"));
        Ok(())
    }

    #[tokio::test]
    async fn request_overrides_config() -> Result {
        let transport = Arc::new(FakeTransport::with_response(
            200,
            json!({"Response": {"TotalCount": 0, "ZoneSet": [], "RequestId": "r-2"}}),
        ));
        let client = Cvm::from_arc(transport.clone(), config().set_language(Language::ZhCn));
        let mut request = DescribeZonesRequest::default();
        request
            .base
            .set_region("ap-singapore")
            .set_language(Language::EnUs);
        let response = client.describe_zones(request).await?;
        assert_eq!(response.response.zone_set, Some(Vec::new()));

        let captured = transport.captured();
        let (base, body) = &captured[0];
        assert_eq!(body, &json!({}));
        assert_eq!(base.action(), "DescribeZones");
        assert_eq!(base.region(), Some("ap-singapore"));
        assert_eq!(base.language(), Some(Language::EnUs));
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result {
        let transport = FakeTransport::with_response(
            200,
            json!({"Response": {
                "Error": {"Code": "InvalidKeyPairId.NotFound", "Message": "skey-404 not found"},
                "RequestId": "r-3"
            }}),
        );
        let client = Cvm::new(transport, config());
        let err = client
            .delete_key_pairs(DeleteKeyPairsRequest {
                key_ids: Some(vec!["skey-404".into()]),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.code(), Some(errors::INVALIDKEYPAIRID_NOTFOUND));
        assert_eq!(err.request_id(), Some("r-3"));
        assert!(errors::ALL.contains(&err.code().unwrap_or_default()));
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> Result {
        let transport = FakeTransport::with_response(503, json!("unavailable"));
        let client = Cvm::new(transport, config());
        let err = client
            .describe_regions(DescribeRegionsRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_transport() -> Result {
        let transport = Arc::new(FakeTransport::default());
        {
            let mut responses = transport
                .responses
                .lock()
                .expect("lock is never poisoned in tests");
            responses.push((200, json!({"Response": {"RequestId": "r-5"}})));
            responses.push((200, json!({"Response": {"RequestId": "r-4"}})));
        }
        let client = Cvm::from_arc(transport.clone(), config());
        let clone = client.clone();
        let first = client
            .delete_key_pairs(DeleteKeyPairsRequest::default())
            .await?;
        let second = clone
            .delete_key_pairs(DeleteKeyPairsRequest::default())
            .await?;
        assert_eq!(first.request_id(), Some("r-4"));
        assert_eq!(second.request_id(), Some("r-5"));
        assert_eq!(transport.captured().len(), 2);
        assert_eq!(clone.config(), client.config());
        Ok(())
    }
}
