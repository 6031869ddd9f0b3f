use chrono::Utc;

use crate::error::{CoreError, CoreResult};

use super::message::{Direction, Message, MessageDraft};
use super::store::{LIST_LIMIT, MessageStore};

/// In-memory store used by tests and headless sessions.
///
/// Mirrors the portal store's observable behavior: newest-first listing
/// capped at [`LIST_LIMIT`], store-assigned ids and timestamps, per-patient
/// clearing and a default patient for drafts that carry none. Scripted
/// one-shot failures let tests exercise each transport error path without a
/// network.
#[derive(Debug)]
pub struct MemoryMessageStore {
    default_patient_id: String,
    messages: Vec<Message>,
    next_seq: u64,
    next_list_error: Option<String>,
    next_create_error: Option<String>,
    next_clear_error: Option<String>,
}

impl MemoryMessageStore {
    #[must_use]
    pub fn new(default_patient_id: impl Into<String>) -> Self {
        Self {
            default_patient_id: default_patient_id.into(),
            messages: Vec::new(),
            next_seq: 0,
            next_list_error: None,
            next_create_error: None,
            next_clear_error: None,
        }
    }

    /// Every stored message, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn count_by_direction(&self, direction: Direction) -> usize {
        self.messages
            .iter()
            .filter(|m| m.direction == direction)
            .count()
    }

    /// The next `list` call fails once with a transport error.
    pub fn fail_next_list(&mut self, reason: impl Into<String>) {
        self.next_list_error = Some(reason.into());
    }

    /// The next `create` call fails once with a transport error.
    pub fn fail_next_create(&mut self, reason: impl Into<String>) {
        self.next_create_error = Some(reason.into());
    }

    /// The next `clear` call fails once with a transport error.
    pub fn fail_next_clear(&mut self, reason: impl Into<String>) {
        self.next_clear_error = Some(reason.into());
    }

    fn resolve_patient<'a>(&'a self, patient_id: Option<&'a str>) -> &'a str {
        patient_id.unwrap_or(&self.default_patient_id)
    }
}

impl Default for MemoryMessageStore {
    fn default() -> Self {
        Self::new("patient-0001")
    }
}

impl MessageStore for MemoryMessageStore {
    fn list(&mut self, patient_id: Option<&str>) -> CoreResult<Vec<Message>> {
        if let Some(reason) = self.next_list_error.take() {
            return Err(CoreError::Transport(reason));
        }

        let patient = self.resolve_patient(patient_id);
        Ok(self
            .messages
            .iter()
            .rev()
            .filter(|m| m.patient_id == patient)
            .take(LIST_LIMIT)
            .cloned()
            .collect())
    }

    fn create(&mut self, draft: &MessageDraft) -> CoreResult<Message> {
        if let Some(reason) = self.next_create_error.take() {
            return Err(CoreError::Transport(reason));
        }

        self.next_seq += 1;
        let message = Message {
            id: format!("msg-{:04}", self.next_seq),
            patient_id: self
                .resolve_patient(draft.patient_id.as_deref())
                .to_owned(),
            patient_name: None,
            device_id: draft.device_id.clone(),
            speaker: draft.speaker.clone(),
            direction: draft.direction,
            content: draft.content.clone(),
            intent: draft.intent.clone(),
            created_at: Utc::now(),
        };
        self.messages.push(message.clone());
        Ok(message)
    }

    fn clear(&mut self, patient_id: Option<&str>) -> CoreResult<u64> {
        if let Some(reason) = self.next_clear_error.take() {
            return Err(CoreError::Transport(reason));
        }

        let patient = self.resolve_patient(patient_id).to_owned();
        let before = self.messages.len();
        self.messages.retain(|m| m.patient_id != patient);
        Ok((before - self.messages.len()) as u64)
    }
}
