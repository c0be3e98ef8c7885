//! Catmate — random DNA cats and interlaced breeding
//!
//! Every cat is a 32-letter DNA sequence. Two cats mate by interlacing the
//! first halves of their sequences; favorite kittens can be kept in a
//! persistent store.

pub mod cat;
pub mod error;
pub mod portrait;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use cat::{Cat, CatId, CatOptions, Dna, Parentage};
pub use error::{CatError, Result};
pub use portrait::PortraitConfig;
pub use storage::{CatRecord, FavoriteStore, NewFavorite};
