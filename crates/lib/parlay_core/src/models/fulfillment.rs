//! Fulfillment wire schema.
//!
//! Types matching the agent platform's webhook request/response JSON. The
//! platform evolves its schema without versioned endpoints, so decoding is
//! deliberately tolerant: every request field is optional and unrecognized
//! fields are discarded. On the way out, unset optional fields are omitted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A dynamically-typed parameter value.
///
/// The platform models parameter values as a JSON value space: null, bool,
/// double, string, list, or nested map. All numbers are doubles on the wire,
/// so integers arrive and leave as `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<ParameterValue>),
    Map(BTreeMap<String, ParameterValue>),
}

impl ParameterValue {
    /// Borrows the string payload, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null)
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        ParameterValue::String(s.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        ParameterValue::String(s)
    }
}

impl From<bool> for ParameterValue {
    fn from(b: bool) -> Self {
        ParameterValue::Bool(b)
    }
}

impl From<f64> for ParameterValue {
    fn from(n: f64) -> Self {
        ParameterValue::Number(n)
    }
}

/// Session parameter map merged into agent-managed conversation state.
pub type ParameterMap = BTreeMap<String, ParameterValue>;

/// How a response's messages combine with others the agent has queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeBehavior {
    #[default]
    #[serde(rename = "MERGE_BEHAVIOR_UNSPECIFIED")]
    Unspecified,
    /// Discard queued messages in favor of these.
    #[serde(rename = "REPLACE")]
    Replace,
    /// Emit these after queued messages.
    #[serde(rename = "APPEND")]
    Append,
}

/// A message shown to the end user.
///
/// Externally tagged on the wire: `{"text": {...}}`. Only the `text` variant
/// is produced here; `payload` carries platform-specific custom content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseMessage {
    Text(TextMessage),
    Payload(ParameterMap),
}

/// Ordered alternative phrasings; the agent picks one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMessage {
    pub text: Vec<String>,
}

/// Identifies which fulfillment the agent is asking for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// A parameter as matched by the agent's NLU.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentParameter {
    /// Text as written by the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_value: Option<String>,
    /// Value after entity resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_value: Option<ParameterValue>,
}

/// The intent matched for the current turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_matched_intent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, IntentParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// The page the conversation is on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Session identity and parameters for the current conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParameterMap>,
}

/// Webhook request for one conversational turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_intent_response_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// End-user utterance for this turn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_info: Option<FulfillmentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_info: Option<IntentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_info: Option<SessionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ParameterMap>,
}

/// Messages and merge directive for the current turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentResponse {
    pub messages: Vec<ResponseMessage>,
    pub merge_behavior: MergeBehavior,
}

/// Webhook response for one conversational turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_response: Option<FulfillmentResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_info: Option<SessionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ParameterMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_flow: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_decodes_to_empty_request() {
        let request: WebhookRequest = serde_json::from_str("{}").expect("decode {}");
        assert_eq!(request, WebhookRequest::default());
    }

    #[test]
    fn unknown_fields_are_discarded() {
        let request: WebhookRequest = serde_json::from_str(
            r#"{
                "languageCode": "en",
                "futureField": {"nested": [1, 2, 3]},
                "sessionInfo": {
                    "session": "projects/p/sessions/s",
                    "alsoUnknown": true
                }
            }"#,
        )
        .expect("decode with unknown fields");

        assert_eq!(request.language_code.as_deref(), Some("en"));
        let session_info = request.session_info.expect("sessionInfo");
        assert_eq!(session_info.session.as_deref(), Some("projects/p/sessions/s"));
        assert!(session_info.parameters.is_none());
    }

    #[test]
    fn partial_request_decodes() {
        let request: WebhookRequest = serde_json::from_str(
            r#"{
                "fulfillmentInfo": {"tag": "order-status"},
                "intentInfo": {
                    "displayName": "check.order",
                    "confidence": 0.87,
                    "parameters": {
                        "order_id": {"originalValue": "12", "resolvedValue": 12}
                    }
                },
                "pageInfo": {"currentPage": "flows/f/pages/start"},
                "sessionInfo": {
                    "parameters": {
                        "count": 2,
                        "verified": true,
                        "note": null,
                        "names": ["a", "b"]
                    }
                }
            }"#,
        )
        .expect("decode partial request");

        let tag = request.fulfillment_info.unwrap().tag.unwrap();
        assert_eq!(tag, "order-status");

        let page = request.page_info.unwrap();
        assert_eq!(page.current_page.as_deref(), Some("flows/f/pages/start"));
        assert!(page.display_name.is_none());

        let intent = request.intent_info.unwrap();
        assert_eq!(intent.display_name.as_deref(), Some("check.order"));
        let intent_parameters = intent.parameters.unwrap();
        let order_id = &intent_parameters["order_id"];
        assert_eq!(order_id.original_value.as_deref(), Some("12"));
        assert_eq!(order_id.resolved_value, Some(ParameterValue::Number(12.0)));

        let parameters = request.session_info.unwrap().parameters.unwrap();
        assert_eq!(parameters["count"], ParameterValue::Number(2.0));
        assert_eq!(parameters["verified"], ParameterValue::Bool(true));
        assert!(parameters["note"].is_null());
        assert_eq!(
            parameters["names"],
            ParameterValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn merge_behavior_wire_names() {
        assert_eq!(
            serde_json::to_value(MergeBehavior::Replace).unwrap(),
            serde_json::json!("REPLACE")
        );
        assert_eq!(
            serde_json::to_value(MergeBehavior::Unspecified).unwrap(),
            serde_json::json!("MERGE_BEHAVIOR_UNSPECIFIED")
        );
        let appended: MergeBehavior = serde_json::from_str("\"APPEND\"").unwrap();
        assert_eq!(appended, MergeBehavior::Append);
    }

    #[test]
    fn text_message_wire_shape() {
        let message = ResponseMessage::Text(TextMessage {
            text: vec!["hello".to_string()],
        });
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({"text": {"text": ["hello"]}})
        );
    }

    #[test]
    fn payload_message_decodes() {
        let message: ResponseMessage =
            serde_json::from_str(r#"{"payload": {"kind": "card", "rank": 1}}"#).unwrap();
        match message {
            ResponseMessage::Payload(payload) => {
                assert_eq!(payload["kind"].as_str(), Some("card"));
                assert_eq!(payload["rank"], ParameterValue::Number(1.0));
            }
            other => panic!("expected payload message, got {other:?}"),
        }
    }

    #[test]
    fn parameter_value_covers_json_value_space() {
        let decoded: ParameterMap = serde_json::from_str(
            r#"{
                "s": "str",
                "n": 1.5,
                "b": false,
                "z": null,
                "l": [1, "two"],
                "m": {"inner": "v"}
            }"#,
        )
        .unwrap();

        assert_eq!(decoded["s"].as_str(), Some("str"));
        assert_eq!(decoded["n"], ParameterValue::Number(1.5));
        assert_eq!(decoded["b"], ParameterValue::Bool(false));
        assert!(decoded["z"].is_null());
        assert_eq!(
            decoded["l"],
            ParameterValue::List(vec![ParameterValue::Number(1.0), "two".into()])
        );
        match &decoded["m"] {
            ParameterValue::Map(m) => assert_eq!(m["inner"].as_str(), Some("v")),
            other => panic!("expected map, got {other:?}"),
        }

        // Values survive an encode/decode cycle unchanged.
        let encoded = serde_json::to_string(&decoded).unwrap();
        let again: ParameterMap = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, decoded);
    }

    #[test]
    fn unset_response_fields_are_omitted() {
        let encoded = serde_json::to_value(WebhookResponse::default()).unwrap();
        assert_eq!(encoded, serde_json::json!({}));
    }
}
