//! Voice platform request and response envelopes

use crate::skill::{IntentInput, SessionAttributes};
use crate::speech::SkillResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const ENVELOPE_VERSION: &str = "1.0";

// ============================================================
// Requests
// ============================================================

/// Incoming request envelope
#[derive(Debug, Deserialize)]
pub struct SkillRequestEnvelope {
    #[serde(default)]
    #[allow(dead_code)] // Deserialized for completeness; only 1.0 exists
    pub version: String,
    #[serde(default)]
    pub session: Option<SessionInfo>,
    pub request: PlatformRequest,
}

impl SkillRequestEnvelope {
    pub fn session_id(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.session_id.as_str())
    }

    pub fn is_new_session(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_new)
    }

    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .map(|a| a.application_id.as_str())
    }

    /// Stored attributes, empty for a new session
    pub fn take_attributes(&mut self) -> SessionAttributes {
        self.session
            .as_mut()
            .and_then(|s| s.attributes.take())
            .map(SessionAttributes::from_value)
            .unwrap_or_default()
    }
}

/// Session block of the envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default, rename = "new")]
    pub is_new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Option<ApplicationInfo>,
    #[serde(default)]
    pub attributes: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInfo {
    pub application_id: String,
}

/// Request body, discriminated by `type`
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum PlatformRequest {
    LaunchRequest(RequestMeta),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default)]
    pub request_id: String,
    pub intent: IntentPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotPayload>,
}

#[derive(Debug, Deserialize)]
pub struct SlotPayload {
    #[serde(default)]
    pub value: Option<String>,
}

impl IntentPayload {
    /// Keep only slots the user actually filled
    pub fn into_input(self) -> IntentInput {
        IntentInput {
            name: self.name,
            slots: self
                .slots
                .into_iter()
                .filter_map(|(name, slot)| slot.value.map(|value| (name, value)))
                .collect(),
        }
    }
}

// ============================================================
// Responses
// ============================================================

/// Outgoing response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponseEnvelope {
    pub version: &'static str,
    pub session_attributes: SessionAttributes,
    pub response: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub ssml: String,
}

impl OutputSpeech {
    fn ssml(ssml: String) -> Self {
        Self { kind: "SSML", ssml }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl SkillResponseEnvelope {
    pub fn new(session_attributes: SessionAttributes, response: SkillResponse) -> Self {
        Self {
            version: ENVELOPE_VERSION,
            session_attributes,
            response: ResponseBody {
                output_speech: Some(OutputSpeech::ssml(response.ssml)),
                reprompt: response.reprompt.map(|ssml| Reprompt {
                    output_speech: OutputSpeech::ssml(ssml),
                }),
                should_end_session: response.should_end_session,
            },
        }
    }

    /// Acknowledgement with nothing to say
    pub fn empty() -> Self {
        Self {
            version: ENVELOPE_VERSION,
            session_attributes: SessionAttributes::default(),
            response: ResponseBody {
                output_speech: None,
                reprompt: None,
                should_end_session: true,
            },
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
