mod memory;
mod message;
mod session;
mod store;
mod synthesizer;

pub use memory::MemoryMessageStore;
pub use message::{ClearReceipt, Direction, Message, MessageDraft, MessageList};
pub use session::{ConversationIdentity, ConversationPhase, ConversationSession, SettleBehavior};
pub use store::{LIST_LIMIT, MessageStore};
pub use synthesizer::{
    FixedPicker, REPLY_PREVIEW_MAX_CHARS, Reply, ReplyIntent, RngPicker, TemplatePicker,
    classify_intent, synthesize,
};

#[cfg(feature = "http-store")]
mod http;
#[cfg(feature = "http-store")]
pub use http::HttpMessageStore;
