use crate::error::CoreResult;

use super::message::{Message, MessageDraft};

/// Newest-first message history cap shared by every store implementation.
pub const LIST_LIMIT: usize = 50;

/// Storage boundary for the bounded conversation log.
///
/// Implementations list messages newest-first, capped at [`LIST_LIMIT`]
/// entries; consumers slice the head for display. `None` as the patient
/// selects the store's default patient. No operation retries internally —
/// retry policy belongs to the calling state machine.
pub trait MessageStore {
    fn list(&mut self, patient_id: Option<&str>) -> CoreResult<Vec<Message>>;

    /// Appends a message; the store assigns `id` and `created_at`.
    fn create(&mut self, draft: &MessageDraft) -> CoreResult<Message>;

    /// Deletes every message for the patient, returning the deleted count.
    fn clear(&mut self, patient_id: Option<&str>) -> CoreResult<u64>;
}
