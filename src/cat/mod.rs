//! Cat model — DNA sequences, parentage and breeding
//!
//! A cat is nothing more than a 32-letter DNA sequence, plus the two parent
//! sequences when it was bred and a store id once it has been favorited.

mod dna;
mod entity;
mod parentage;

pub use dna::{Dna, ALPHABET, DNA_LENGTH, HALF_LENGTH};
pub use entity::{Cat, CatId, CatOptions};
pub use parentage::Parentage;
