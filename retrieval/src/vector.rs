//! Pure vector math primitives.
//!
//! Zero norms and mismatched dimensions are explicit error cases rather
//! than silent non-finite values or panics.

use crate::Embedding;
use crate::error::{Result, RetrievalError};

/// Euclidean (L2) norm. Returns 0 for an all-zero or empty vector.
pub fn norm(vector: &[f32]) -> f32 {
    vector.iter().map(|v| v * v).sum::<f32>().sqrt()
}

/// Scale a vector to unit length.
///
/// Fails with `ZeroNorm` if the norm is zero.
pub fn normalize(vector: &[f32]) -> Result<Embedding> {
    let norm = norm(vector);
    if norm == 0.0 {
        return Err(RetrievalError::ZeroNorm);
    }
    Ok(vector.iter().map(|v| v / norm).collect())
}

/// Dot product of two vectors of equal length.
///
/// Fails with `DimensionMismatch` if the lengths differ.
pub fn dot(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(RetrievalError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}
