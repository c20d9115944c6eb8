//! Fulfillment response construction.
//!
//! Builds the reply for one conversational turn. The current logic returns
//! the platform's example values; a production deployment replaces the body
//! of [`respond`] with real lookups while keeping the same contract.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::models::fulfillment::{
    FulfillmentResponse, MergeBehavior, ParameterValue, ResponseMessage, SessionInfo, TextMessage,
    WebhookRequest, WebhookResponse,
};

/// Phrase returned to the end user on every call.
pub const REPLY_TEXT: &str = "hi from the webhook!";

/// Example session parameter merged into conversation state.
pub const SESSION_PARAM_KEY: &str = "key";
pub const SESSION_PARAM_VALUE: &str = "value";

/// Errors from response construction.
///
/// The example logic cannot fail, but construction is fallible by contract
/// so implementations that consult real data sources slot in unchanged.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("fulfillment failed: {0}")]
    Internal(String),
}

/// Builds the fulfillment response for a decoded webhook request.
///
/// Returns one text message with [`REPLY_TEXT`], `REPLACE` merge behavior,
/// and the example session parameter.
pub fn respond(request: &WebhookRequest) -> Result<WebhookResponse, FulfillmentError> {
    let tag = request
        .fulfillment_info
        .as_ref()
        .and_then(|info| info.tag.as_deref());
    debug!(tag, "building fulfillment response");

    let mut parameters = BTreeMap::new();
    parameters.insert(
        SESSION_PARAM_KEY.to_string(),
        ParameterValue::from(SESSION_PARAM_VALUE),
    );

    let messages = vec![ResponseMessage::Text(TextMessage {
        text: vec![REPLY_TEXT.to_string()],
    })];

    Ok(WebhookResponse {
        fulfillment_response: Some(FulfillmentResponse {
            messages,
            merge_behavior: MergeBehavior::Replace,
        }),
        session_info: Some(SessionInfo {
            session: None,
            parameters: Some(parameters),
        }),
        ..Default::default()
    })
}
