//! One query-reply cycle: resolve intents, pull content, build cards,
//! encode the transcript message.

use super::codec;
use super::payload::build_payloads;
use super::transcript::Transcript;
use crate::content::ContentStore;
use crate::error::Result;
use crate::intent::IntentResolver;
use anyhow::Context;
use std::path::PathBuf;

pub struct ReplyPipeline {
    resolver: IntentResolver,
    content_path: PathBuf,
}

impl ReplyPipeline {
    pub fn new(resolver: IntentResolver, content_path: PathBuf) -> Self {
        Self {
            resolver,
            content_path,
        }
    }

    /// Answer one query with an encoded transcript message. The profile
    /// document is loaded fresh per query; intent resolution itself never
    /// fails (the heuristic stage is total), so the only error sources are
    /// the document and serialization.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let items = self.resolver.resolve(query).await;
        tracing::debug!(cards = items.len(), "intents resolved");

        let store = ContentStore::load(&self.content_path)?;
        let payloads = build_payloads(&items, &store);
        let encoded = codec::encode(&payloads).context("failed to encode card payloads")?;
        Ok(encoded)
    }

    /// Run `answer` and commit the exchange to the transcript. Nothing is
    /// committed on failure - an aborted query leaves the transcript at its
    /// pre-query state.
    pub async fn answer_into(&self, transcript: &mut Transcript, query: &str) -> Result<()> {
        let reply = self.answer(query).await?;
        transcript.push_user(query);
        transcript.push_assistant(reply);
        Ok(())
    }
}
