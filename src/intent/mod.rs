//! Query-to-intent resolution: the closed category set, the local keyword
//! fallback, and the ordered strategy chain that ties remote and local
//! classification together.

pub mod category;
pub mod chain;
pub mod heuristic;

pub use category::{Category, ClassificationItem};
pub use chain::{HeuristicStrategy, IntentResolver, IntentStrategy};
pub use heuristic::infer_locally;
