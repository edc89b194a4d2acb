//! Search index contract.
//!
//! The query layer treats the index as a black box: it hands over a text
//! query and a restriction to entity kinds, and gets back ranked hits with
//! highlighted fragments. Ranking and highlighting policy live entirely
//! behind [`SearchBackend`].

pub mod simple;

use async_trait::async_trait;

use crate::errors::QueryError;

/// Entity kinds the index knows about. `Other` exists so that new kinds
/// added behind the backend degrade gracefully instead of breaking the
/// aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Experiment,
    Sample,
    Other,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Experiment => "experiment",
            SearchKind::Sample => "sample",
            SearchKind::Other => "other",
        }
    }
}

/// A ranked hit as produced by the index, before cross-referencing.
#[derive(Debug, Clone)]
pub struct RawHit {
    pub kind: SearchKind,
    pub pk: String,
    pub highlighted: Vec<String>,
}

#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run `query` against the index, restricted to `kinds`, returning
    /// hits in relevance order.
    async fn search(&self, kinds: &[SearchKind], query: &str) -> Result<Vec<RawHit>, QueryError>;
}
