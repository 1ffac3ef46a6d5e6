//! The combo generation algorithm.
//!
//! Generation is a single pure computation per invocation:
//!
//! 1. The sequencer draws the combo's "shape" - an ordered list of
//!    categories - slot by slot with level-weighted distribution, adjacency
//!    constraints, and opener/finisher bias
//! 2. The selector walks that sequence and draws one concrete technique per
//!    slot from the legal pool, with multiplicative anti-repetition and
//!    side-variety weighting
//!
//! Every numeric constant of the algorithm lives in [`Tuning`] as named,
//! overridable configuration; the per-call policy switches live in
//! [`Rules`]. [`generate_combo`] is the single entry point.

pub use self::{combo::*, config::*, seed::*};

mod combo;
mod config;
mod seed;
mod selector;
mod sequencer;
