use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Relay direction: device to server, or server back to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

/// Immutable conversation message owned by the store.
///
/// Clients only read and append; `id` and `created_at` are assigned by the
/// store on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    pub direction: Direction,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create payload; store-assigned fields are absent by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    pub direction: Direction,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

impl MessageDraft {
    #[must_use]
    pub fn new(direction: Direction, content: impl Into<String>) -> Self {
        Self {
            patient_id: None,
            device_id: None,
            speaker: None,
            direction,
            content: content.into(),
            intent: None,
        }
    }

    #[must_use]
    pub fn with_patient_id(mut self, patient_id: Option<String>) -> Self {
        self.patient_id = patient_id;
        self
    }

    #[must_use]
    pub fn with_device_id(mut self, device_id: Option<String>) -> Self {
        self.device_id = device_id;
        self
    }

    #[must_use]
    pub fn with_speaker(mut self, speaker: Option<String>) -> Self {
        self.speaker = speaker;
        self
    }

    #[must_use]
    pub fn with_intent(mut self, intent: Option<String>) -> Self {
        self.intent = intent;
        self
    }
}

/// List envelope returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageList {
    pub patient_id: String,
    pub patient_name: String,
    pub messages: Vec<Message>,
}

/// Receipt returned when a conversation log is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearReceipt {
    pub deleted: u64,
}
