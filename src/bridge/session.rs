use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};

use super::message::{Direction, MessageDraft};
use super::store::MessageStore;
use super::synthesizer::{TemplatePicker, synthesize};

/// Visible lifecycle phase of one send/receive/reply cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationPhase {
    Idle,
    Receiving,
    Replying,
    Settled,
}

/// Tuning for the settled-state hold before the session returns to idle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettleBehavior {
    pub hold_seconds: f64,
}

impl Default for SettleBehavior {
    fn default() -> Self {
        Self { hold_seconds: 0.8 }
    }
}

/// Identity stamped on messages created by this session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationIdentity {
    /// `None` addresses the store's default patient.
    pub patient_id: Option<String>,
    pub device_id: Option<String>,
    pub inbound_speaker: Option<String>,
    pub outbound_speaker: Option<String>,
}

impl Default for ConversationIdentity {
    fn default() -> Self {
        Self {
            patient_id: None,
            device_id: Some("MM-BOX-AN-001".to_owned()),
            inbound_speaker: Some("Patient".to_owned()),
            outbound_speaker: Some("CareBoard".to_owned()),
        }
    }
}

/// Client-local conversation session: one per mounted widget, never
/// persisted.
///
/// The session orchestrates the message store and the reply synthesizer into
/// a user-visible cycle: `Idle → Receiving → Replying → Settled → Idle`, with
/// `Idle → Receiving → Idle` as the error path. One network leg runs per
/// `advance` call so hosts can repaint between the intermediate states, and
/// no new submission is accepted while a cycle is in flight.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    phase: ConversationPhase,
    identity: ConversationIdentity,
    settle: SettleBehavior,
    draft_text: String,
    in_flight_text: Option<String>,
    last_error: Option<String>,
    settled_for_seconds: f64,
    generation: u64,
}

impl ConversationSession {
    #[must_use]
    pub fn new(identity: ConversationIdentity) -> Self {
        Self {
            phase: ConversationPhase::Idle,
            identity,
            settle: SettleBehavior::default(),
            draft_text: String::new(),
            in_flight_text: None,
            last_error: None,
            settled_for_seconds: 0.0,
            generation: 0,
        }
    }

    #[must_use]
    pub fn with_settle_behavior(mut self, settle: SettleBehavior) -> Self {
        self.settle = settle;
        self
    }

    #[must_use]
    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    /// The preserved user input; survives failed cycles for retry.
    #[must_use]
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Most recent recoverable failure, persistent until dismissed or until
    /// the next submission starts.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Bumped on every accepted submission. A host that hands work to
    /// another flow can capture this and discard results arriving for an
    /// older generation, e.g. after the widget was torn down.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a submission cycle.
    ///
    /// Legal from `Idle`, or from `Settled` (which settles immediately).
    /// Blank text is a no-op returning `false`. A cycle already in flight is
    /// rejected defensively.
    pub fn submit(&mut self, text: &str) -> CoreResult<bool> {
        match self.phase {
            ConversationPhase::Idle => {}
            ConversationPhase::Settled => self.finish_settle(),
            ConversationPhase::Receiving | ConversationPhase::Replying => {
                return Err(CoreError::Configuration(
                    "submission already in flight".to_owned(),
                ));
            }
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        self.draft_text = text.to_owned();
        self.in_flight_text = Some(trimmed.to_owned());
        self.last_error = None;
        self.generation += 1;
        self.phase = ConversationPhase::Receiving;
        debug!(generation = self.generation, "submission accepted");
        Ok(true)
    }

    /// Executes the next network leg of an active cycle.
    ///
    /// One leg per call keeps every intermediate phase observable. Transport
    /// failures are absorbed into the session (`Idle` + `last_error`), not
    /// returned as errors; calling this while `Idle` or `Settled` is a no-op.
    pub fn advance<S, P>(&mut self, store: &mut S, picker: &mut P) -> CoreResult<ConversationPhase>
    where
        S: MessageStore,
        P: TemplatePicker,
    {
        match self.phase {
            ConversationPhase::Idle | ConversationPhase::Settled => Ok(self.phase),
            ConversationPhase::Receiving => self.advance_receiving(store),
            ConversationPhase::Replying => self.advance_replying(store, picker),
        }
    }

    /// Runs a full cycle: submit, then advance until `Settled` or the first
    /// failed leg. Returns the phase the session ended in.
    pub fn submit_and_settle<S, P>(
        &mut self,
        store: &mut S,
        picker: &mut P,
        text: &str,
    ) -> CoreResult<ConversationPhase>
    where
        S: MessageStore,
        P: TemplatePicker,
    {
        if !self.submit(text)? {
            return Ok(self.phase);
        }
        while matches!(
            self.phase,
            ConversationPhase::Receiving | ConversationPhase::Replying
        ) {
            self.advance(store, picker)?;
        }
        Ok(self.phase)
    }

    /// Advances wall-clock time; a settled session returns to idle once the
    /// configured hold elapses.
    pub fn tick(&mut self, elapsed_seconds: f64) {
        if self.phase == ConversationPhase::Settled {
            self.settled_for_seconds += elapsed_seconds.max(0.0);
            if self.settled_for_seconds >= self.settle.hold_seconds {
                self.finish_settle();
            }
        }
    }

    /// Clears the stored conversation; legal only while idle.
    ///
    /// The phase stays `Idle` no matter the outcome; a failed deletion is
    /// surfaced through both the returned error and `last_error`.
    pub fn clear<S: MessageStore>(&mut self, store: &mut S) -> CoreResult<u64> {
        if self.phase != ConversationPhase::Idle {
            return Err(CoreError::Configuration(
                "clear requires an idle session".to_owned(),
            ));
        }

        match store.clear(self.identity.patient_id.as_deref()) {
            Ok(deleted) => {
                debug!(deleted, "conversation cleared");
                Ok(deleted)
            }
            Err(err) => {
                warn!(error = %err, "conversation clear failed");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn advance_receiving<S: MessageStore>(
        &mut self,
        store: &mut S,
    ) -> CoreResult<ConversationPhase> {
        let Some(text) = self.in_flight_text.clone() else {
            self.phase = ConversationPhase::Idle;
            return Err(CoreError::Configuration(
                "receiving phase without submitted text".to_owned(),
            ));
        };

        let draft = MessageDraft::new(Direction::In, text)
            .with_patient_id(self.identity.patient_id.clone())
            .with_device_id(self.identity.device_id.clone())
            .with_speaker(self.identity.inbound_speaker.clone());

        match store.create(&draft) {
            Ok(message) => {
                debug!(id = %message.id, "inbound message committed");
                self.phase = ConversationPhase::Replying;
            }
            Err(err) => {
                warn!(error = %err, "inbound leg failed; draft preserved for retry");
                self.last_error = Some(err.to_string());
                self.in_flight_text = None;
                self.phase = ConversationPhase::Idle;
            }
        }
        Ok(self.phase)
    }

    fn advance_replying<S, P>(
        &mut self,
        store: &mut S,
        picker: &mut P,
    ) -> CoreResult<ConversationPhase>
    where
        S: MessageStore,
        P: TemplatePicker,
    {
        let Some(text) = self.in_flight_text.clone() else {
            self.phase = ConversationPhase::Idle;
            return Err(CoreError::Configuration(
                "replying phase without submitted text".to_owned(),
            ));
        };

        let reply = synthesize(picker, &text);
        let draft = MessageDraft::new(Direction::Out, reply.content)
            .with_patient_id(self.identity.patient_id.clone())
            .with_device_id(self.identity.device_id.clone())
            .with_speaker(self.identity.outbound_speaker.clone())
            .with_intent(Some(reply.intent.as_str().to_owned()));

        match store.create(&draft) {
            Ok(message) => {
                debug!(id = %message.id, intent = ?reply.intent, "reply delivered");
                self.draft_text.clear();
                self.in_flight_text = None;
                self.settled_for_seconds = 0.0;
                self.phase = ConversationPhase::Settled;
            }
            Err(err) => {
                // The inbound message is already committed and stays in the
                // log; only the reply is missing. Surface that asymmetry.
                warn!(error = %err, "outbound leg failed; inbound message stays committed");
                self.last_error = Some(format!("reply delivery failed: {err}"));
                self.in_flight_text = None;
                self.phase = ConversationPhase::Idle;
            }
        }
        Ok(self.phase)
    }

    fn finish_settle(&mut self) {
        self.phase = ConversationPhase::Idle;
        self.settled_for_seconds = 0.0;
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new(ConversationIdentity::default())
    }
}
