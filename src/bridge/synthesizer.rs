use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound on how much inbound text is echoed back inside a reply.
pub const REPLY_PREVIEW_MAX_CHARS: usize = 48;

/// Fixed acknowledgement template variants; `{preview}` carries the
/// truncated inbound text.
const ACK_TEMPLATES: [&str; 4] = [
    "Thanks for letting us know about \"{preview}\". Your care team has been notified.",
    "Message received: \"{preview}\". Please continue your medication as scheduled.",
    "We have recorded \"{preview}\". A clinician will review it shortly.",
    "Got it. \"{preview}\" has been added to your health log.",
];

/// Escalations bypass the random template set so the urgent wording is
/// always the same.
const ESCALATE_TEMPLATE: &str =
    "We flagged \"{preview}\" for urgent clinician review. If symptoms worsen, call emergency services.";

const ESCALATION_KEYWORDS: [&str; 6] = [
    "chest pain",
    "breath",
    "bleeding",
    "faint",
    "severe",
    "collapse",
];

/// Chooses a template variant; injectable so callers can pin deterministic
/// output in tests.
pub trait TemplatePicker {
    /// Returns an index in `0..variant_count`.
    fn pick(&mut self, variant_count: usize) -> usize;
}

/// Uniform picker backed by any `rand` source.
#[derive(Debug)]
pub struct RngPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<rand::rngs::ThreadRng> {
    /// Picker seeded from the thread-local generator, for production use.
    #[must_use]
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> TemplatePicker for RngPicker<R> {
    fn pick(&mut self, variant_count: usize) -> usize {
        self.rng.random_range(0..variant_count)
    }
}

/// Always picks the same variant; used by tests and deterministic replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl TemplatePicker for FixedPicker {
    fn pick(&mut self, variant_count: usize) -> usize {
        self.0 % variant_count
    }
}

/// Coarse intent classified from the inbound text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyIntent {
    Ack,
    Escalate,
}

impl ReplyIntent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ack => "ack",
            Self::Escalate => "escalate",
        }
    }
}

/// Synthesized outbound reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub intent: ReplyIntent,
}

/// Scans the inbound text for urgent-symptom keywords.
#[must_use]
pub fn classify_intent(inbound: &str) -> ReplyIntent {
    let lowered = inbound.to_lowercase();
    if ESCALATION_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        ReplyIntent::Escalate
    } else {
        ReplyIntent::Ack
    }
}

/// Builds the outbound reply for one inbound message.
///
/// Pure with respect to the picker: the same inbound text and picker choice
/// always produce the same reply. No network or state access happens here.
pub fn synthesize<P: TemplatePicker>(picker: &mut P, inbound: &str) -> Reply {
    let preview = preview_of(inbound);
    let intent = classify_intent(inbound);

    let template = match intent {
        ReplyIntent::Escalate => ESCALATE_TEMPLATE,
        ReplyIntent::Ack => {
            let index = picker.pick(ACK_TEMPLATES.len()) % ACK_TEMPLATES.len();
            ACK_TEMPLATES[index]
        }
    };

    Reply {
        content: template.replace("{preview}", &preview),
        intent,
    }
}

/// Char-boundary-safe preview of the inbound text, truncated with an
/// ellipsis when it exceeds [`REPLY_PREVIEW_MAX_CHARS`].
fn preview_of(inbound: &str) -> String {
    let trimmed = inbound.trim();
    let mut preview: String = trimmed.chars().take(REPLY_PREVIEW_MAX_CHARS).collect();
    if trimmed.chars().count() > REPLY_PREVIEW_MAX_CHARS {
        preview.push('…');
    }
    preview
}
