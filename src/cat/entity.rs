//! Cat — an immutable DNA sequence with optional parentage and store id
//!
//! Cats are created three ways: sampled at random, built from a caller
//! supplied sequence (including records coming back from the favorites
//! store), or bred from two existing cats.

use super::{Dna, Parentage};
use crate::error::{CatError, Result};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the favorites store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatId(pub u64);

/// Largest integer a JavaScript number holds exactly (2^53)
const MAX_EXACT_JS_INTEGER: f64 = 9_007_199_254_740_992.0;

impl CatId {
    /// Convert a JavaScript number, rejecting anything that is not an exact
    /// non-negative integer
    pub fn from_js_number(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_EXACT_JS_INTEGER {
            return Err(CatError::InvalidId(format!(
                "{} is not a non-negative integer up to 2^53",
                value
            )));
        }
        Ok(CatId(value as u64))
    }
}

impl fmt::Display for CatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional attributes supplied at construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatOptions {
    /// Full sequences of both parents; `None` for a cat that was not bred
    pub parents: Option<Parentage>,
    /// Store id; `None` until the cat has been saved as a favorite
    pub id: Option<CatId>,
}

/// A cat, identified by its DNA
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cat {
    dna: Dna,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parents: Option<Parentage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<CatId>,
}

impl Cat {
    /// Build a cat from a candidate sequence
    ///
    /// Fails with [`CatError::InvalidDna`](crate::CatError::InvalidDna) unless
    /// the sequence is exactly 32 letters `A-Z`. The sequence is kept as given.
    pub fn new(dna: impl Into<String>) -> Result<Self> {
        Self::with_options(dna, CatOptions::default())
    }

    /// Build a cat with parentage and/or a store id
    pub fn with_options(dna: impl Into<String>, options: CatOptions) -> Result<Self> {
        let dna = Dna::parse(dna)?;
        Ok(Self::from_parts(dna, options))
    }

    /// Assemble a cat from an already validated sequence
    pub fn from_parts(dna: Dna, options: CatOptions) -> Self {
        Self {
            dna,
            parents: options.parents,
            id: options.id,
        }
    }

    /// A random cat drawn from the thread-local generator
    pub fn generate_random() -> Self {
        Self::generate_random_with(&mut rand::thread_rng())
    }

    /// A random cat drawn from `rng`
    pub fn generate_random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_parts(Dna::random(rng), CatOptions::default())
    }

    /// `count` independent random cats
    pub fn litter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Self> {
        (0..count).map(|_| Self::generate_random_with(rng)).collect()
    }

    /// Breed a kitten with `mate`
    ///
    /// The kitten's DNA interlaces the first 16 symbols of this cat with the
    /// first 16 symbols of `mate`; the last 16 symbols of both parents are
    /// dropped. Parentage records both full sequences, this cat first.
    pub fn mate(&self, mate: &Cat) -> Result<Cat> {
        let dna = Dna::interlace(&self.dna, &mate.dna)?;
        debug!("Mated {} x {} -> {}", self.dna, mate.dna, dna);
        Ok(Self::from_parts(
            dna,
            CatOptions {
                parents: Some(Parentage::new(self.dna.clone(), mate.dna.clone())),
                id: None,
            },
        ))
    }

    /// Parse two sequences and breed them
    pub fn mate_by_dna(dna: &str, mate_dna: &str) -> Result<Cat> {
        let cat = Cat::new(dna)?;
        let mate = Cat::new(mate_dna)?;
        cat.mate(&mate)
    }

    pub fn dna(&self) -> &Dna {
        &self.dna
    }

    pub fn parents(&self) -> Option<&Parentage> {
        self.parents.as_ref()
    }

    pub fn id(&self) -> Option<CatId> {
        self.id
    }

    /// True iff this cat was bred, i.e. has parentage
    pub fn is_kitten(&self) -> bool {
        self.parents.is_some()
    }

    /// Copy of this cat carrying a store id
    pub fn with_id(&self, id: CatId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    pub fn summary(&self) -> String {
        let id = self.id.map(|id| format!("#{} ", id)).unwrap_or_default();
        match &self.parents {
            Some(p) => format!("{}Cat {} | kitten of {} x {}", id, self.dna, p.first(), p.second()),
            None => format!("{}Cat {}", id, self.dna),
        }
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dna, f)
    }
}
