//! The HRR engine: generation, binding, unbinding, similarity.

use std::sync::Arc;

use num_complex::Complex;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rustfft::{Fft, FftPlanner};

use crate::error::{EngramError, Result};
use crate::hrr::ConceptVector;

/// Stateless HRR vector algebra over a fixed dimension.
///
/// The engine knows nothing about names or storage; it operates on
/// vectors by read-only reference and always returns fresh vectors.
/// FFT plans are computed once at construction, so each bind/unbind
/// costs only the transforms themselves.
pub struct HrrEngine {
    dim: usize,
    fft: Arc<dyn Fft<f64>>,
    ifft: Arc<dyn Fft<f64>>,
}

impl HrrEngine {
    /// Creates an engine for vectors of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::Config`] if `dim` is zero.
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(EngramError::Config(
                "dimension must be non-zero".to_string(),
            ));
        }

        let mut planner = FftPlanner::<f64>::new();
        Ok(Self {
            dim,
            fft: planner.plan_fft_forward(dim),
            ifft: planner.plan_fft_inverse(dim),
        })
    }

    /// Returns the vector dimension this engine operates on.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Generates a fresh random concept vector.
    ///
    /// Draws independent samples from a standard normal distribution and
    /// unit-normalizes the result. Random unit vectors in high dimensions
    /// are near-orthogonal, which is the property every other operation
    /// relies on; do not substitute a different distribution.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<ConceptVector> {
        let normal = Normal::new(0.0, 1.0).unwrap();
        let components: Vec<f64> = (0..self.dim).map(|_| normal.sample(rng)).collect();

        ConceptVector::from_components(components).normalized()
    }

    /// Binds two vectors via circular convolution.
    ///
    /// Computed as `IFFT(FFT(a) ⊙ FFT(b))`, unit-normalized. The result
    /// resembles neither input but can be approximately inverted with
    /// [`HrrEngine::unbind`]. Commutative and associative up to
    /// floating-point rounding.
    pub fn bind(&self, a: &ConceptVector, b: &ConceptVector) -> Result<ConceptVector> {
        self.check_dimension(a)?;
        self.check_dimension(b)?;

        let spec_a = self.spectrum(a);
        let spec_b = self.spectrum(b);

        let product: Vec<Complex<f64>> = spec_a
            .iter()
            .zip(spec_b.iter())
            .map(|(x, y)| x * y)
            .collect();

        self.inverse(product)?.normalized()
    }

    /// Recovers the value bound to `key` inside `composite`.
    ///
    /// Computed as `IFFT(FFT(composite) ⊙ conj(FFT(key)))`, i.e. circular
    /// correlation, the approximate inverse of circular convolution. The
    /// result is a *noisy* estimate of the bound value; the noise grows
    /// with the number of unrelated terms superposed into `composite`.
    /// Denoising is the job of the cleanup scan in the knowledge base,
    /// not of this operation.
    pub fn unbind(&self, composite: &ConceptVector, key: &ConceptVector) -> Result<ConceptVector> {
        self.check_dimension(composite)?;
        self.check_dimension(key)?;

        let spec_c = self.spectrum(composite);
        let spec_k = self.spectrum(key);

        let product: Vec<Complex<f64>> = spec_c
            .iter()
            .zip(spec_k.iter())
            .map(|(x, y)| x * y.conj())
            .collect();

        self.inverse(product)?.normalized()
    }

    /// Cosine similarity between two vectors.
    ///
    /// A plain dot product: exact cosine for unit vectors, a ranking
    /// score (not a probability) otherwise. Nominally in `[-1, 1]`.
    pub fn similarity(&self, a: &ConceptVector, b: &ConceptVector) -> f64 {
        a.dot(b)
    }

    /// Superposes vectors by element-wise summation.
    ///
    /// The sum is deliberately NOT normalized: its magnitude grows with
    /// the number of terms, but unbind-then-compare still works because
    /// cosine similarity is scale-invariant. Raw dot products against a
    /// superposition are not comparable to those among unit vectors.
    ///
    /// # Errors
    ///
    /// Returns [`EngramError::EmptyInput`] for an empty part list and
    /// [`EngramError::DimensionMismatch`] for a misfit vector.
    pub fn superpose(&self, parts: &[&ConceptVector]) -> Result<ConceptVector> {
        if parts.is_empty() {
            return Err(EngramError::EmptyInput(
                "cannot superpose an empty list of vectors".to_string(),
            ));
        }

        let mut composite = ConceptVector::zeros(self.dim);
        for part in parts {
            self.check_dimension(part)?;
            composite = composite.sum(part);
        }

        Ok(composite)
    }

    fn check_dimension(&self, v: &ConceptVector) -> Result<()> {
        if v.dim() != self.dim {
            return Err(EngramError::DimensionMismatch {
                expected: self.dim,
                actual: v.dim(),
            });
        }
        Ok(())
    }

    /// Forward transform of a real vector into the frequency domain.
    fn spectrum(&self, v: &ConceptVector) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = v
            .as_slice()
            .iter()
            .map(|&c| Complex::new(c, 0.0))
            .collect();
        self.fft.process(&mut buffer);
        buffer
    }

    /// Inverse transform back to a real vector.
    ///
    /// rustfft's inverse is unscaled, so divide by the length. Imaginary
    /// residue is rounding noise for real inputs and is dropped.
    fn inverse(&self, mut spectrum: Vec<Complex<f64>>) -> Result<ConceptVector> {
        self.ifft.process(&mut spectrum);
        let n = self.dim as f64;
        Ok(ConceptVector::from_components(
            spectrum.iter().map(|c| c.re / n).collect(),
        ))
    }
}
