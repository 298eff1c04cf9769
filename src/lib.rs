//! # Engram - Holographic Associative Memory
//!
//! Engram is a Rust implementation of Holographic Reduced Representations
//! (HRRs), a Vector Symbolic Architecture for encoding discrete symbols
//! as fixed-length real vectors and composing them algebraically.
//!
//! ## Overview
//!
//! A structured fact like "the Color of the Apple is Red" is stored in a
//! single dense vector: the attribute and value vectors are *bound* via
//! circular convolution, several bound facts are *superposed* by
//! addition, and a fact is recovered by *unbinding* (circular
//! correlation) followed by a nearest-neighbor cleanup against the set
//! of known concepts.
//!
//! ## Key Features
//!
//! - **FFT-based binding/unbinding** for O(D log D) composition
//! - **Cleanup memory**: similarity-ranked recovery against a named store
//! - **Interactive shell** with `new` / `bind` / `add` / `query` commands
//! - **Deterministic sessions** via seedable random generation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use engram::KnowledgeBase;
//!
//! let mut kb = KnowledgeBase::new(2048, Some(42))?;
//! kb.define("Color")?;
//! kb.define("Red")?;
//! kb.combine("ColorRed", "Color", "Red")?;
//!
//! let outcome = kb.query("ColorRed", "Color")?;
//! assert_eq!(outcome.best().unwrap().name, "Red");
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`hrr`] - The HRR engine: generation, bind, unbind, similarity
//! - [`memory`] - The knowledge base and cleanup queries
//! - [`shell`] - Command parsing and the interactive session
//! - [`demo`] - The fixed scripted demonstration
//!
//! The engine is pure vector algebra with no notion of names; the
//! knowledge base never touches transform math directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod demo;
pub mod error;
pub mod hrr;
pub mod memory;
pub mod shell;

// Re-export commonly used types
pub use config::{Config, EngineConfig, QueryConfig};
pub use error::{EngramError, Result};
pub use hrr::{ConceptVector, HrrEngine};
pub use memory::{DefineOutcome, KnowledgeBase, QueryMatch, QueryOutcome};
pub use shell::{parse, Command, Session};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default vector dimension.
pub const DEFAULT_DIMENSION: usize = 2048;

/// Default display threshold for query match scores.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.1;
