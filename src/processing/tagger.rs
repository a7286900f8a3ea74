//! Entity tagging capability used for name extraction

/// Label attached to a tagged span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
    Other(String),
}

/// A span of text with its entity label.
#[derive(Debug, Clone)]
pub struct TaggedEntity {
    pub text: String,
    pub label: EntityLabel,
}

/// Best-effort named-entity tagging backend.
///
/// Implementations may wrap any external NLP tool, so errors are arbitrary.
/// The profile extractor treats failures and absent taggers the same way: it
/// falls back to a line-scan heuristic instead of propagating.
pub trait EntityTagger: Send + Sync {
    fn tag(&self, text: &str) -> anyhow::Result<Vec<TaggedEntity>>;
}
