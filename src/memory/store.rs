//! The knowledge base: a mapping from concept names to vectors.
//!
//! All four operations (define, combine, superpose, query) are built on
//! the [`HrrEngine`] and are all-or-nothing: a failed lookup aborts the
//! operation without any partial mutation. The store only ever grows;
//! there is no delete, by design.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::EngineConfig;
use crate::error::{EngramError, Result};
use crate::hrr::{ConceptVector, HrrEngine};

/// What [`KnowledgeBase::define`] did for a given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineOutcome {
    /// A new primitive concept was generated and stored.
    Created,
    /// The name already existed; the stored vector was left untouched.
    AlreadyExists,
}

/// A single scored candidate from a cleanup query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatch {
    /// Name of the stored concept.
    pub name: String,
    /// Cosine similarity of the unbound result to that concept.
    pub score: f64,
}

/// Result of a cleanup query: every candidate, ranked by score.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    /// All candidates (the store minus the two query names), sorted by
    /// descending score. Ties keep insertion order, so the first entry
    /// to reach the maximum wins deterministically.
    pub ranked: Vec<QueryMatch>,
}

impl QueryOutcome {
    /// The best-scoring candidate, if any candidate existed at all.
    pub fn best(&self) -> Option<&QueryMatch> {
        self.ranked.first()
    }
}

/// A knowledge base mapping unique names to concept vectors.
///
/// Owns the HRR engine and a seedable RNG, so independent instances are
/// fully isolated; nothing here is process-global. Iteration order for
/// queries is insertion order, kept explicitly in a side list.
pub struct KnowledgeBase {
    engine: HrrEngine,
    rng: ChaCha8Rng,
    vectors: HashMap<String, ConceptVector>,
    order: Vec<String>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base for vectors of `dimension`.
    ///
    /// `seed` fixes the RNG for reproducible concept generation.
    pub fn new(dimension: usize, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self {
            engine: HrrEngine::new(dimension)?,
            rng,
            vectors: HashMap::new(),
            order: Vec::new(),
        })
    }

    /// Creates a knowledge base from an [`EngineConfig`].
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        Self::new(config.dimension, config.seed)
    }

    /// Defines `name` as a fresh primitive concept.
    ///
    /// If the name already exists this is a no-op returning
    /// [`DefineOutcome::AlreadyExists`]; the stored vector is never
    /// overwritten. Callers surface this as a warning, not a failure.
    pub fn define(&mut self, name: &str) -> Result<DefineOutcome> {
        if self.vectors.contains_key(name) {
            return Ok(DefineOutcome::AlreadyExists);
        }

        let vector = self.engine.generate(&mut self.rng)?;
        self.insert(name, vector);
        Ok(DefineOutcome::Created)
    }

    /// Binds `key` and `value` and stores the result under `result`.
    ///
    /// Unlike [`KnowledgeBase::define`], an existing `result` name is
    /// silently overwritten. The asymmetry with `define` is deliberate;
    /// callers composing facts iteratively rely on it.
    ///
    /// # Errors
    ///
    /// [`EngramError::UnknownConcept`] if `key` or `value` is missing;
    /// nothing is mutated in that case.
    pub fn combine(&mut self, result: &str, key: &str, value: &str) -> Result<()> {
        let vec_key = self.resolve(key)?;
        let vec_value = self.resolve(value)?;

        let bound = self.engine.bind(vec_key, vec_value)?;
        self.insert(result, bound);
        Ok(())
    }

    /// Superposes the named parts and stores the unnormalized sum under
    /// `result`.
    ///
    /// All part names are resolved before anything is written: a missing
    /// part aborts the whole operation with no partial composite left
    /// behind. Overwrite policy matches [`KnowledgeBase::combine`].
    ///
    /// # Errors
    ///
    /// [`EngramError::UnknownConcept`] naming the first missing part, or
    /// [`EngramError::EmptyInput`] if `parts` is empty.
    pub fn superpose(&mut self, result: &str, parts: &[&str]) -> Result<()> {
        if parts.is_empty() {
            return Err(EngramError::EmptyInput(
                "superposition needs at least one part".to_string(),
            ));
        }

        let resolved = parts
            .iter()
            .map(|name| self.resolve(name))
            .collect::<Result<Vec<_>>>()?;

        let composite = self.engine.superpose(&resolved)?;
        self.insert(result, composite);
        Ok(())
    }

    /// Unbinds `object` by `key` and cleans the noisy result up against
    /// the store.
    ///
    /// Every stored vector is scored by cosine similarity against the
    /// unbound result, *except* the two argument names themselves;
    /// without that exclusion the query terms would trivially win.
    /// Candidates are scanned in insertion order and returned ranked.
    pub fn query(&self, object: &str, key: &str) -> Result<QueryOutcome> {
        let vec_object = self.resolve(object)?;
        let vec_key = self.resolve(key)?;

        let recovered = self.engine.unbind(vec_object, vec_key)?;

        let mut ranked: Vec<QueryMatch> = self
            .order
            .iter()
            .filter(|name| name.as_str() != object && name.as_str() != key)
            .map(|name| QueryMatch {
                name: name.clone(),
                score: self.engine.similarity(&recovered, &self.vectors[name]),
            })
            .collect();

        // Stable sort: equal scores keep insertion order.
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());

        Ok(QueryOutcome { ranked })
    }

    /// Returns the vector stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ConceptVector> {
        self.vectors.get(name)
    }

    /// Returns true if `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.vectors.contains_key(name)
    }

    /// All concept names, in insertion order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Number of stored concepts.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no concepts are stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The vector dimension shared by every concept in this store.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.engine.dimension()
    }

    fn resolve(&self, name: &str) -> Result<&ConceptVector> {
        self.vectors
            .get(name)
            .ok_or_else(|| EngramError::UnknownConcept(name.to_string()))
    }

    /// Inserts or overwrites; an overwritten name keeps its original
    /// position in the iteration order.
    fn insert(&mut self, name: &str, vector: ConceptVector) {
        if self.vectors.insert(name.to_string(), vector).is_none() {
            self.order.push(name.to_string());
        }
    }
}
