//! Cosine-similarity ranking of candidate vectors.

use ordered_float::OrderedFloat;

use crate::Embedding;
use crate::error::{Result, RetrievalError};
use crate::vector::{dot, normalize};

/// Rank candidate vectors by descending cosine similarity to the query.
///
/// Only the first query vector is considered. Every candidate is compared
/// in its own slot, so candidate `i` always produces index `i`'s score.
/// Returns all candidate indices, most similar first; ties keep their
/// input order.
///
/// Both sides are normalized internally, so pre-normalized input is
/// harmless but redundant.
pub fn rank(query: &[Embedding], candidates: &[Embedding]) -> Result<Vec<usize>> {
    let query_vector = query
        .first()
        .ok_or(RetrievalError::EmptyInput("query vector set"))?;
    if query_vector.is_empty() {
        return Err(RetrievalError::EmptyInput("query vector"));
    }
    let first_candidate = candidates
        .first()
        .ok_or(RetrievalError::EmptyInput("candidate vector set"))?;
    if first_candidate.is_empty() {
        return Err(RetrievalError::EmptyInput("candidate vector"));
    }

    let query_unit = normalize(query_vector)?;

    let mut scored: Vec<(OrderedFloat<f32>, usize)> = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let candidate_unit = normalize(candidate)?;
        let similarity = dot(&query_unit, &candidate_unit)?;
        scored.push((OrderedFloat(similarity), index));
    }

    // Stable sort keeps input order for tied scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(scored.into_iter().map(|(_, index)| index).collect())
}
