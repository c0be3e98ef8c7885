//! Dna — the 32-letter sequence every cat is made of
//!
//! `Dna::parse` is the only way a string becomes a sequence. Random
//! sampling and interlacing both hand their result to the same gate, so an
//! invalid `Dna` cannot exist.

use crate::error::{CatError, Result};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Symbols a sequence may contain
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in every sequence
pub const DNA_LENGTH: usize = 32;

/// Number of leading symbols each parent contributes when mating
pub const HALF_LENGTH: usize = DNA_LENGTH / 2;

/// A validated DNA sequence: exactly 32 symbols in `A..=Z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dna(String);

impl Dna {
    /// Validate a candidate sequence, storing it verbatim on success
    pub fn parse(candidate: impl Into<String>) -> Result<Self> {
        let candidate = candidate.into();
        Self::check(&candidate)?;
        Ok(Self(candidate))
    }

    fn check(candidate: &str) -> Result<()> {
        let len = candidate.chars().count();
        if len != DNA_LENGTH {
            return Err(CatError::InvalidDna {
                reason: format!("expected {} symbols, got {}", DNA_LENGTH, len),
            });
        }
        if let Some((pos, c)) = candidate
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_uppercase())
        {
            return Err(CatError::InvalidDna {
                reason: format!("symbol {:?} at position {} is not in A-Z", c, pos),
            });
        }
        Ok(())
    }

    /// Sample 32 symbols uniformly and independently from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sequence: String = (0..DNA_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        match Self::parse(sequence) {
            Ok(dna) => dna,
            Err(e) => unreachable!("sampling from ALPHABET produced {}", e),
        }
    }

    /// Interlace the leading halves of two sequences: `a0 b0 a1 b1 ... a15 b15`
    ///
    /// Only the first 16 symbols of each side are read; the trailing halves
    /// never reach the offspring.
    pub fn interlace(a: &Dna, b: &Dna) -> Result<Self> {
        let interlaced: String = a
            .leading_half()
            .chars()
            .zip(b.leading_half().chars())
            .flat_map(|(x, y)| [x, y])
            .collect();
        Self::parse(interlaced)
    }

    /// Split a sequence into its even-position and odd-position symbols
    pub fn deinterlace(&self) -> (String, String) {
        let even = self.0.chars().step_by(2).collect();
        let odd = self.0.chars().skip(1).step_by(2).collect();
        (even, odd)
    }

    /// The first 16 symbols, the part that is passed on when mating
    pub fn leading_half(&self) -> &str {
        &self.0[..HALF_LENGTH]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Dna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Dna {
    type Err = CatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Dna {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Dna {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Dna {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Dna::parse(raw).map_err(serde::de::Error::custom)
    }
}
