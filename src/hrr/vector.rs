//! Dense real-valued concept vectors.

use serde::{Deserialize, Serialize};

use crate::error::{EngramError, Result};

/// Norms below this are treated as numerically zero.
const NORM_EPSILON: f64 = 1e-12;

/// A dense real-valued vector representing a concept.
///
/// Primitive concepts are random unit vectors; composites are produced
/// by binding (unit-normalized) or superposition (unnormalized sum).
/// Vectors are immutable once produced: every engine operation returns
/// a freshly allocated vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptVector {
    components: Vec<f64>,
}

impl ConceptVector {
    /// Creates a vector from raw components.
    pub fn from_components(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Creates an all-zero vector of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self {
            components: vec![0.0; dim],
        }
    }

    /// Returns the dimension of this vector.
    #[inline]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Computes the dot product with another vector.
    ///
    /// For two unit vectors this is the cosine similarity.
    pub fn dot(&self, other: &ConceptVector) -> f64 {
        debug_assert_eq!(
            self.dim(),
            other.dim(),
            "Vector dimensions must match"
        );

        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Computes the Euclidean (L2) norm.
    pub fn norm(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Returns a unit-normalized copy of this vector.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::DegenerateNorm`] if the norm is numerically
    /// zero. Dividing through anyway would silently fill the vector with
    /// NaN and poison every later similarity score.
    pub fn normalized(&self) -> Result<ConceptVector> {
        let norm = self.norm();
        if norm < NORM_EPSILON {
            return Err(EngramError::DegenerateNorm);
        }

        Ok(ConceptVector {
            components: self.components.iter().map(|c| c / norm).collect(),
        })
    }

    /// Returns the element-wise sum of this vector and another.
    pub fn sum(&self, other: &ConceptVector) -> ConceptVector {
        debug_assert_eq!(
            self.dim(),
            other.dim(),
            "Vector dimensions must match"
        );

        ConceptVector {
            components: self
                .components
                .iter()
                .zip(other.components.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}
