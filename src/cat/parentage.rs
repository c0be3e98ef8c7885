//! Parentage — the two full sequences a kitten was bred from
//!
//! A kitten records both parents verbatim, including the trailing halves
//! that mating discards. Parentage is either absent or exactly two
//! sequences; the type has no other shape.

use super::Dna;
use serde::{Deserialize, Serialize};

/// Ordered pair of parent sequences: `[self, mate]` at mating time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parentage([Dna; 2]);

impl Parentage {
    pub fn new(first: Dna, second: Dna) -> Self {
        Self([first, second])
    }

    /// The parent whose leading half fills the even positions
    pub fn first(&self) -> &Dna {
        &self.0[0]
    }

    /// The parent whose leading half fills the odd positions
    pub fn second(&self) -> &Dna {
        &self.0[1]
    }

    pub fn as_array(&self) -> &[Dna; 2] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dna> {
        self.0.iter()
    }

    /// The portion of each parent that actually reached the offspring
    pub fn contributions(&self) -> (&str, &str) {
        (self.first().leading_half(), self.second().leading_half())
    }

    /// Check whether `child` is the interlacing of these two parents
    pub fn produced(&self, child: &Dna) -> bool {
        let (even, odd) = child.deinterlace();
        let (a, b) = self.contributions();
        even == a && odd == b
    }
}

impl From<[Dna; 2]> for Parentage {
    fn from(parents: [Dna; 2]) -> Self {
        Self(parents)
    }
}
