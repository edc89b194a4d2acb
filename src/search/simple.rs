//! Substring-match search backend over the entity store.
//!
//! Good enough for modest reference datasets: scans experiment and sample
//! text fields case-insensitively and wraps matches in `<em>` tags. A
//! dedicated index server can replace this behind the same trait.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::{RawHit, SearchBackend, SearchKind};
use crate::database::entities::{experiments::Entity as Experiments, samples::Entity as Samples};
use crate::errors::QueryError;

pub struct SimpleSearchBackend {
    db: DatabaseConnection,
}

impl SimpleSearchBackend {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SearchBackend for SimpleSearchBackend {
    async fn search(&self, kinds: &[SearchKind], query: &str) -> Result<Vec<RawHit>, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits = Vec::new();

        if kinds.contains(&SearchKind::Experiment) {
            for experiment in Experiments::find().all(&self.db).await? {
                let mut highlighted = Vec::new();
                if let Some(fragment) = highlight(&experiment.name, query) {
                    highlighted.push(fragment);
                }
                if let Some(fragment) = experiment
                    .description
                    .as_deref()
                    .and_then(|d| highlight(d, query))
                {
                    highlighted.push(fragment);
                }
                if !highlighted.is_empty() {
                    hits.push(RawHit {
                        kind: SearchKind::Experiment,
                        pk: experiment.accession,
                        highlighted,
                    });
                }
            }
        }

        if kinds.contains(&SearchKind::Sample) {
            for sample in Samples::find().all(&self.db).await? {
                let mut highlighted = Vec::new();
                if let Some(fragment) = highlight(&sample.name, query) {
                    highlighted.push(fragment);
                }
                if let Some(fragment) = sample
                    .ml_data_source
                    .as_deref()
                    .and_then(|s| highlight(s, query))
                {
                    highlighted.push(fragment);
                }
                if !highlighted.is_empty() {
                    hits.push(RawHit {
                        kind: SearchKind::Sample,
                        pk: sample.id.to_string(),
                        highlighted,
                    });
                }
            }
        }

        Ok(hits)
    }
}

/// Wrap every case-insensitive occurrence of `query` in `<em>` tags.
/// Returns `None` when the text does not match at all.
fn highlight(text: &str, query: &str) -> Option<String> {
    let lower_text = text.to_lowercase();
    let lower_query = query.to_lowercase();
    if lower_query.is_empty() || !lower_text.contains(&lower_query) {
        return None;
    }

    // Case folding can shift byte offsets outside ASCII; fall back to
    // exact matching rather than slicing at misaligned positions.
    if lower_text.len() != text.len() || lower_query.len() != query.len() {
        return text
            .contains(query)
            .then(|| text.replace(query, &format!("<em>{}</em>", query)));
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some(offset) = lower_text[cursor..].find(&lower_query) {
        let start = cursor + offset;
        let end = start + lower_query.len();
        out.push_str(&text[cursor..start]);
        out.push_str("<em>");
        out.push_str(&text[start..end]);
        out.push_str("</em>");
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_wraps_case_insensitive_matches() {
        assert_eq!(
            highlight("Heat stress study", "heat"),
            Some("<em>Heat</em> stress study".to_string())
        );
    }

    #[test]
    fn highlight_wraps_every_occurrence() {
        assert_eq!(
            highlight("aba", "a"),
            Some("<em>a</em>b<em>a</em>".to_string())
        );
    }

    #[test]
    fn highlight_misses_return_none() {
        assert_eq!(highlight("Leaf_R1", "heat"), None);
    }
}
