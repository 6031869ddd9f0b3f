use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

use super::message::{ClearReceipt, Message, MessageDraft, MessageList};
use super::store::MessageStore;

const MESSAGES_PATH: &str = "/doctor/symptom_analytics/messages";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Blocking HTTP client for the portal message store.
///
/// Speaks the portal's doctor API under `/doctor/symptom_analytics/messages`.
/// Transport and decode failures map to `CoreError::Transport`; no retries
/// are attempted here.
#[derive(Debug, Clone)]
pub struct HttpMessageStore {
    base_url: String,
    client: Client,
}

impl HttpMessageStore {
    pub fn new(base_url: impl Into<String>) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::Transport(format!("http client init failed: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    fn messages_url(&self) -> String {
        format!("{}{MESSAGES_PATH}", self.base_url)
    }

    fn with_patient(request: RequestBuilder, patient_id: Option<&str>) -> RequestBuilder {
        match patient_id {
            Some(patient_id) => request.query(&[("patient_id", patient_id)]),
            None => request,
        }
    }
}

impl MessageStore for HttpMessageStore {
    fn list(&mut self, patient_id: Option<&str>) -> CoreResult<Vec<Message>> {
        let request = Self::with_patient(self.client.get(self.messages_url()), patient_id);
        let envelope: MessageList = request
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| CoreError::Transport(format!("list messages failed: {e}")))?
            .json()
            .map_err(|e| CoreError::Transport(format!("list messages decode failed: {e}")))?;

        debug!(
            patient_id = %envelope.patient_id,
            count = envelope.messages.len(),
            "listed conversation messages"
        );
        Ok(envelope.messages)
    }

    fn create(&mut self, draft: &MessageDraft) -> CoreResult<Message> {
        let message: Message = self
            .client
            .post(self.messages_url())
            .json(draft)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| CoreError::Transport(format!("create message failed: {e}")))?
            .json()
            .map_err(|e| CoreError::Transport(format!("create message decode failed: {e}")))?;

        debug!(id = %message.id, direction = ?message.direction, "created conversation message");
        Ok(message)
    }

    fn clear(&mut self, patient_id: Option<&str>) -> CoreResult<u64> {
        let request = Self::with_patient(self.client.delete(self.messages_url()), patient_id);
        let receipt: ClearReceipt = request
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| CoreError::Transport(format!("clear messages failed: {e}")))?
            .json()
            .map_err(|e| CoreError::Transport(format!("clear messages decode failed: {e}")))?;

        debug!(deleted = receipt.deleted, "cleared conversation messages");
        Ok(receipt.deleted)
    }
}
