//! The remote classification oracle: an OpenAI-compatible chat-completions
//! endpoint used strictly to map queries onto card categories.

pub mod classifier;
pub mod client;
pub mod parse;

pub use classifier::RemoteClassifier;
pub use client::OracleClient;
