//! Typed filter requests for the query layer.
//!
//! All ID parsing and validation happens here, before any store access.
//! Handlers build these structs from raw query parameters; services only
//! ever see validated, typed filters.

use std::collections::HashSet;

use crate::errors::QueryError;

/// Parse a comma-separated list of IDs into a set. Duplicates collapse
/// implicitly; any malformed token rejects the whole list.
pub fn parse_id_list(raw: &str) -> Result<HashSet<i32>, QueryError> {
    raw.split(',')
        .map(|token| {
            token
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|id| *id >= 0)
                .ok_or_else(|| QueryError::InvalidFilterValue(format!("invalid IDs: {}", raw)))
        })
        .collect()
}

pub fn parse_id(raw: &str) -> Result<i32, QueryError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| QueryError::InvalidFilterValue(format!("invalid ID: {}", raw)))
}

/// Treat an absent or empty query parameter as "no filter".
pub fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

#[derive(Debug, Default)]
pub struct NodeFilter {
    /// Keep only nodes with a participation for every listed gene.
    pub heavy_genes: Option<HashSet<i32>>,
    pub mlmodel: Option<i32>,
    /// Exact name match. Commas in the value are part of the name.
    pub name: Option<String>,
    /// Membership in a comma-separated name list.
    pub name_in: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrdering {
    WeightAsc,
    WeightDesc,
}

impl EdgeOrdering {
    /// `weight` sorts ascending, `-weight` descending; anything else is
    /// rejected as a bad filter value.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        match raw {
            "weight" => Ok(EdgeOrdering::WeightAsc),
            "-weight" => Ok(EdgeOrdering::WeightDesc),
            other => Err(QueryError::InvalidFilterValue(format!(
                "invalid order_by field: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Default)]
pub struct EdgeFilter {
    /// Keep edges with either endpoint in the listed gene set.
    pub genes: Option<HashSet<i32>>,
    pub gene1: Option<HashSet<i32>>,
    pub gene2: Option<HashSet<i32>>,
    pub mlmodel: Option<i32>,
    pub order_by: Option<EdgeOrdering>,
}

#[derive(Debug, Default)]
pub struct ActivityFilter {
    pub mlmodel: Option<i32>,
    pub samples: Option<HashSet<i32>>,
    pub nodes: Option<HashSet<i32>>,
}

#[derive(Debug, Default)]
pub struct ParticipationFilter {
    pub nodes: Option<HashSet<i32>>,
    pub genes: Option<HashSet<i32>>,
}

#[derive(Debug, Default)]
pub struct ExperimentFilter {
    pub node: Option<i32>,
}

#[derive(Debug, Default)]
pub struct SampleFilter {
    pub experiment: Option<String>,
    pub ids: Option<HashSet<i32>>,
}
