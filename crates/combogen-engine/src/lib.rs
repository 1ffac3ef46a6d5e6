//! Combination generator core for striking-sport training.
//!
//! Given a desired move count, stance, skill level, and mode, this crate
//! produces a pseudo-random but stylistically plausible sequence of named
//! techniques (a "combo"). Generation runs in three stages:
//!
//! 1. [`MoveCatalog`] - the static technique catalog, filtered down to the
//!    entries that are legal for the request (level, mode, stance)
//! 2. Category sequencing - the "shape" of the combo as an ordered list of
//!    categories (punch, kick, knee, defense), drawn with level-dependent
//!    weights, adjacency constraints, and opener/finisher bias
//! 3. Move selection - one concrete technique per slot, drawn with
//!    multiplicative weighting that discourages repetition and same-side runs
//!
//! The generator is total: out-of-range counts are clamped, and candidate
//! filters fall back to wider pools instead of failing, so every call
//! returns exactly the clamped number of display labels.
//!
//! Randomness is injected: every entry point takes a [`rand::Rng`], and
//! [`ComboSeed`] provides a seedable PCG source for reproducible output.
//!
//! # Example
//!
//! ```
//! use combogen_engine::{ComboRequest, Level, MoveCatalog, Stance, generate_combo};
//!
//! let request = ComboRequest::new(4, Stance::Orthodox, Level::Beginner);
//! let combo = generate_combo(&MoveCatalog::STANDARD, &request, &mut rand::rng());
//! assert_eq!(combo.len(), 4);
//! ```

pub use self::{catalog::*, generator::*};

pub mod catalog;
pub mod generator;
