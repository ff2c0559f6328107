//! Reply assembly: card payloads, the transcript message codec, the
//! append-only transcript, and the pipeline tying one query-reply cycle
//! together.

pub mod codec;
pub mod payload;
pub mod pipeline;
pub mod transcript;

pub use codec::{decode, encode, CARD_MARKER, CARD_MULTI_MARKER};
pub use payload::{build_payloads, CardPayload};
pub use pipeline::ReplyPipeline;
pub use transcript::{ChatMessage, Role, Transcript};
