//! Holographic Reduced Representation (HRR) engine.
//!
//! HRRs encode discrete symbols as dense high-dimensional real vectors
//! and compose them algebraically:
//!
//! 1. **Generation**: random unit vectors are near-orthogonal in high
//!    dimensions, so independently drawn concepts barely interfere.
//! 2. **Binding (⊛)**: circular convolution associates a key with a
//!    value; the result resembles neither input.
//! 3. **Unbinding**: circular correlation approximately inverts binding,
//!    recovering a noisy estimate of the value given the key.
//! 4. **Superposition (+)**: vector addition bundles several bound facts
//!    into a single composite.
//!
//! Both transforms run in the frequency domain: convolution is an
//! element-wise spectral product, correlation multiplies by the key
//! spectrum's complex conjugate.
//!
//! References:
//! - Plate (1995): "Holographic Reduced Representations"
//! - Kanerva (2009): "Hyperdimensional Computing: An Introduction"

mod engine;
mod vector;

pub use engine::HrrEngine;
pub use vector::ConceptVector;
