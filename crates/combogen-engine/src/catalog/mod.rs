//! Move taxonomy and the static technique catalog.
//!
//! - [`Category`], [`Level`], [`Stance`], [`Mode`], [`Side`] - the closed
//!   enumerations every catalog entry is tagged with
//! - [`Move`] - a single catalog entry
//! - [`MoveCatalog`] - the immutable catalog plus the legality filter

pub use self::{moves::*, taxonomy::*};

mod moves;
mod taxonomy;
