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

//! The JSON codec for requests and responses.
//!
//! Requests are encoded into compact JSON objects, omitting any field that is
//! not set. Responses are decoded leniently: unknown keys are ignored, so the
//! service can add new fields without breaking existing clients. Request
//! records can also be rehydrated from JSON text, this path is strict and
//! rejects keys the record does not declare.

use crate::Result;
use crate::error::Error;
use serde::de::{DeserializeOwned, Visitor};

/// A trait implemented by all the request records.
///
/// The wire names for each record are declared once, by the `serde`
/// attributes of the record. This trait recovers them from the
/// `Deserialize` implementation, and uses them to validate JSON text
/// provided by the application.
pub trait Message: serde::ser::Serialize + DeserializeOwned {
    /// The type name of this record, used in error messages.
    fn typename() -> &'static str;

    /// The wire names of all the fields declared on this record.
    fn field_names() -> &'static [&'static str] {
        field_names::<Self>()
    }

    /// Re-serializes the record into a JSON string.
    ///
    /// This is intended for logging and debugging. Serialization errors are
    /// discarded, and the returned string may be empty.
    fn to_json_string(&self) -> String {
        to_json_string(self)
    }

    /// Rehydrates the record from a JSON string, rejecting unknown keys.
    ///
    /// # Example
    /// ```
    /// # use tencentcloud_common::message::Message;
    /// #[derive(Default, serde::Deserialize, serde::Serialize)]
    /// #[serde(rename_all = "PascalCase")]
    /// struct DeleteThingsRequest {
    ///     #[serde(skip_serializing_if = "Option::is_none")]
    ///     thing_ids: Option<Vec<String>>,
    /// }
    /// impl Message for DeleteThingsRequest {
    ///     fn typename() -> &'static str { "DeleteThingsRequest" }
    /// }
    ///
    /// let request = DeleteThingsRequest::from_json_string(r#"{"ThingIds": ["a"]}"#)?;
    /// assert_eq!(request.thing_ids, Some(vec!["a".to_string()]));
    ///
    /// let err = DeleteThingsRequest::from_json_string(r#"{"ThingId": "a"}"#).err().unwrap();
    /// assert!(err.is_build_request());
    /// assert!(err.to_string().contains("ThingId"));
    /// # Ok::<(), tencentcloud_common::error::Error>(())
    /// ```
    fn from_json_string(text: &str) -> Result<Self> {
        from_json_str_strict(text)
    }
}

/// Encodes a record into the bytes of a request body.
///
/// Fields that are not set do not appear in the output.
pub fn to_json_bytes<T>(message: &T) -> Result<bytes::Bytes>
where
    T: serde::ser::Serialize,
{
    let body = serde_json::to_vec(message).map_err(Error::ser)?;
    tracing::debug!(
        typename = std::any::type_name::<T>(),
        length = body.len(),
        "encoded JSON body"
    );
    Ok(bytes::Bytes::from(body))
}

/// Decodes a response body.
///
/// Keys that are not declared on `T` are ignored. Keys declared on `T` but
/// missing in the input leave the corresponding fields unset.
pub fn from_json_slice<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    tracing::debug!(
        typename = std::any::type_name::<T>(),
        length = body.len(),
        "decoding JSON body"
    );
    serde_json::from_slice::<T>(body).map_err(Error::deser)
}

/// Decodes a request record from JSON text, rejecting unknown keys.
///
/// Every key of the top-level JSON object must be a wire name declared on
/// `T`. All the unexpected keys are reported, in sorted order, in a single
/// [build request][Error::is_build_request] error. Malformed JSON and type
/// mismatches are reported as [deserialization][Error::is_deserialization]
/// errors with the parser error as their source.
pub fn from_json_str_strict<T>(text: &str) -> Result<T>
where
    T: Message,
{
    let value = serde_json::from_str::<serde_json::Value>(text).map_err(Error::deser)?;
    let Some(object) = value.as_object() else {
        return Err(Error::deser(format!(
            "{} must be a JSON object, got {text}",
            T::typename()
        )));
    };
    let known = T::field_names();
    let mut unknown = object
        .keys()
        .filter(|key| !known.iter().any(|name| *name == key.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>();
    unknown.sort_unstable();
    if !unknown.is_empty() {
        return Err(Error::build_request(format!(
            "{} has unknown keys: {}",
            T::typename(),
            unknown.join(", ")
        )));
    }
    serde_json::from_str::<T>(text).map_err(Error::deser)
}

/// Re-serializes a record into a JSON string, discarding errors.
///
/// Returns an empty string if the record cannot be serialized.
pub fn to_json_string<T>(message: &T) -> String
where
    T: serde::ser::Serialize + ?Sized,
{
    serde_json::to_string(message).unwrap_or_else(|e| {
        tracing::warn!(
            typename = std::any::type_name::<T>(),
            "cannot serialize, returning an empty string: {e}"
        );
        String::new()
    })
}

/// Returns the wire names of the fields declared on `T`.
///
/// This drives the derived `Deserialize` implementation with a deserializer
/// that only records the field list `serde` passes to `deserialize_struct()`.
/// Types that are not deserialized as structs have no fields.
pub fn field_names<T>() -> &'static [&'static str]
where
    T: DeserializeOwned,
{
    let mut fields = None;
    let _ = T::deserialize(FieldNames {
        fields: &mut fields,
    });
    fields.unwrap_or_default()
}

struct FieldNames<'a> {
    fields: &'a mut Option<&'static [&'static str]>,
}

impl<'de> serde::de::Deserializer<'de> for FieldNames<'_> {
    type Error = serde::de::value::Error;

    fn deserialize_any<V>(self, _visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(serde::de::Error::custom("only structs have field names"))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> std::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        *self.fields = Some(fields);
        Err(serde::de::Error::custom("field names captured"))
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::error::Error as _;
    use test_case::test_case;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        values: Option<Vec<String>>,
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct ThingRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        thing_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        project_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        filters: Option<Vec<Filter>>,
        #[serde(rename = "CPU", skip_serializing_if = "Option::is_none")]
        cpu: Option<u64>,
        #[serde(skip)]
        envelope: Option<String>,
    }

    impl Message for ThingRequest {
        fn typename() -> &'static str {
            "ThingRequest"
        }
    }

    struct Unserializable;

    impl serde::ser::Serialize for Unserializable {
        fn serialize<S>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::ser::Serializer,
        {
            Err(serde::ser::Error::custom("simulated failure"))
        }
    }

    #[test]
    fn field_names_from_deserialize() {
        let got = ThingRequest::field_names();
        assert_eq!(got, &["ThingName", "ProjectId", "Filters", "CPU"]);
    }

    #[test]
    fn field_names_non_struct() {
        assert!(field_names::<String>().is_empty());
        assert!(field_names::<Vec<Filter>>().is_empty());
    }

    #[test_case(ThingRequest::default(), json!({}))]
    #[test_case(ThingRequest { project_id: Some(0), ..Default::default() }, json!({"ProjectId": 0}))]
    #[test_case(ThingRequest { thing_name: Some(String::new()), ..Default::default() }, json!({"ThingName": ""}))]
    #[test_case(ThingRequest { filters: Some(vec![]), ..Default::default() }, json!({"Filters": []}))]
    #[test_case(ThingRequest { filters: Some(vec![Filter::default()]), ..Default::default() }, json!({"Filters": [{}]}))]
    #[test_case(ThingRequest { cpu: Some(4), ..Default::default() }, json!({"CPU": 4}))]
    #[test_case(ThingRequest { envelope: Some("ignored".into()), ..Default::default() }, json!({}))]
    fn encode(input: ThingRequest, want: Value) -> anyhow::Result<()> {
        let got = to_json_bytes(&input)?;
        let got = serde_json::from_slice::<Value>(&got)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn decode_ignores_unknown() -> anyhow::Result<()> {
        let input = json!({"ThingName": "abc", "NewField": {"x": 1}});
        let got = from_json_slice::<ThingRequest>(input.to_string().as_bytes())?;
        let want = ThingRequest {
            thing_name: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn decode_type_mismatch() {
        let input = json!({"ProjectId": "not-a-number"});
        let got = from_json_slice::<ThingRequest>(input.to_string().as_bytes());
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>());
        assert!(matches!(source, Some(e) if e.is_data()), "{err:?}");
    }

    #[test]
    fn decode_malformed() {
        let got = from_json_slice::<ThingRequest>(b"{\"ThingName\": ");
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>());
        assert!(matches!(source, Some(e) if e.is_eof()), "{err:?}");
    }

    #[test]
    fn strict() -> anyhow::Result<()> {
        let input = r#"{"ThingName": "demo", "ProjectId": 0, "Filters": [{"Name": "zone", "Values": ["a"]}]}"#;
        let got = ThingRequest::from_json_string(input)?;
        let want = ThingRequest {
            thing_name: Some("demo".into()),
            project_id: Some(0),
            filters: Some(vec![Filter {
                name: Some("zone".into()),
                values: Some(vec!["a".into()]),
            }]),
            ..Default::default()
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn strict_unknown_key() {
        let got = ThingRequest::from_json_string(r#"{"ThingName": "demo", "Typo": true}"#);
        let err = got.unwrap_err();
        assert!(err.is_build_request(), "{err:?}");
        assert_eq!(err.code(), Some(crate::error::BUILD_REQUEST_ERROR));
        assert_eq!(err.request_id(), Some(""));
        let message = err.message().unwrap_or_default();
        assert!(message.contains("ThingRequest"), "{message}");
        assert!(message.contains("Typo"), "{message}");
    }

    #[test]
    fn strict_collects_all_unknown_keys() {
        let got = ThingRequest::from_json_string(r#"{"Zeta": 1, "ThingName": "demo", "Alpha": 2}"#);
        let err = got.unwrap_err();
        assert_eq!(
            err.message(),
            Some("ThingRequest has unknown keys: Alpha, Zeta")
        );
    }

    #[test_case(r#"{"thingName": "demo"}"#; "case sensitive")]
    #[test_case(r#"{"Envelope": "x"}"#; "skipped fields are not wire names")]
    fn strict_rejects(input: &str) {
        let got = ThingRequest::from_json_string(input);
        assert!(matches!(&got, Err(e) if e.is_build_request()), "{got:?}");
    }

    #[test_case("[]")]
    #[test_case("42")]
    #[test_case("\"ThingName\"")]
    #[test_case("{")]
    fn strict_not_an_object(input: &str) {
        let got = ThingRequest::from_json_string(input);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn strict_type_mismatch() {
        let got = ThingRequest::from_json_string(r#"{"ProjectId": "zero"}"#);
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>());
        assert!(source.is_some(), "{err:?}");
    }

    #[test]
    fn strict_roundtrip() -> anyhow::Result<()> {
        let input = json!({"ThingName": "q\"uo\\te ünïcødé 🚀", "CPU": 8, "Filters": []});
        let got = ThingRequest::from_json_string(&input.to_string())?;
        let trip = serde_json::from_str::<Value>(&got.to_json_string())?;
        assert_eq!(trip, input);
        Ok(())
    }

    #[test]
    fn to_json_string_compact() {
        let input = ThingRequest {
            thing_name: Some("demo".into()),
            ..Default::default()
        };
        assert_eq!(input.to_json_string(), r#"{"ThingName":"demo"}"#);
    }

    #[test]
    fn to_json_string_swallows_errors() {
        assert_eq!(to_json_string(&Unserializable), "");
        let got = to_json_bytes(&Unserializable);
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
    }
}
