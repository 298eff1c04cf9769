//! Named-vector knowledge base with cleanup-memory queries.

mod store;

pub use store::{DefineOutcome, KnowledgeBase, QueryMatch, QueryOutcome};
