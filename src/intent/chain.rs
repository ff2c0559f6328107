//! Ordered fallback chain over classification strategies.
//!
//! Each stage shares one contract: a query in, an ordered item list out,
//! never an error. Stages run sequentially and the first non-empty result
//! wins - a later stage never overrides an earlier non-empty one. The final
//! heuristic stage is total, so resolution of a non-empty query is never
//! empty.

use super::category::ClassificationItem;
use super::heuristic::infer_locally;
use crate::oracle::RemoteClassifier;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait IntentStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn classify(&self, query: &str) -> Vec<ClassificationItem>;
}

/// Remote multi-card call - the primary stage.
pub struct RemoteMultiStrategy {
    classifier: Arc<RemoteClassifier>,
}

#[async_trait]
impl IntentStrategy for RemoteMultiStrategy {
    fn name(&self) -> &'static str {
        "remote-multi"
    }

    async fn classify(&self, query: &str) -> Vec<ClassificationItem> {
        self.classifier.classify(query).await
    }
}

/// Remote single-intent call - fired only when the multi-card stage yields
/// nothing.
pub struct RemoteSingleStrategy {
    classifier: Arc<RemoteClassifier>,
}

#[async_trait]
impl IntentStrategy for RemoteSingleStrategy {
    fn name(&self) -> &'static str {
        "remote-single"
    }

    async fn classify(&self, query: &str) -> Vec<ClassificationItem> {
        match self.classifier.classify_one(query).await {
            Some(category) => vec![ClassificationItem::bare(category)],
            None => Vec::new(),
        }
    }
}

/// Local keyword heuristics - terminal stage, total for non-empty queries.
pub struct HeuristicStrategy;

#[async_trait]
impl IntentStrategy for HeuristicStrategy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn classify(&self, query: &str) -> Vec<ClassificationItem> {
        infer_locally(query)
            .into_iter()
            .map(ClassificationItem::bare)
            .collect()
    }
}

pub struct IntentResolver {
    strategies: Vec<Box<dyn IntentStrategy>>,
}

impl IntentResolver {
    pub fn new(strategies: Vec<Box<dyn IntentStrategy>>) -> Self {
        Self { strategies }
    }

    /// The default chain: remote multi → remote single → local heuristic.
    pub fn with_default_chain(classifier: Arc<RemoteClassifier>) -> Self {
        Self::new(vec![
            Box::new(RemoteMultiStrategy {
                classifier: Arc::clone(&classifier),
            }),
            Box::new(RemoteSingleStrategy { classifier }),
            Box::new(HeuristicStrategy),
        ])
    }

    pub async fn resolve(&self, query: &str) -> Vec<ClassificationItem> {
        for strategy in &self.strategies {
            let items = strategy.classify(query).await;
            if !items.is_empty() {
                tracing::debug!(
                    strategy = strategy.name(),
                    cards = items.len(),
                    "query resolved"
                );
                return items;
            }
            tracing::debug!(strategy = strategy.name(), "stage yielded nothing");
        }
        Vec::new()
    }
}
