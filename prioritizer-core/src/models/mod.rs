//! Domain models for the prioritizer.
//!
//! # Core Concepts
//!
//! - [`Feature`]: A product idea scored with RICE. Holds only the authoritative
//!   inputs; the score is always derived, never stored.
//! - [`FeatureEdit`]: A single-field change to one feature, as a tagged union so
//!   the set of editable fields is checked by the compiler.
//! - [`PrdDocument`]: A templated mini product-requirements document generated
//!   on demand for one feature.
//! - [`PrdPanel`]: Visibility state of the document (`Hidden` or `Shown`).

mod bounds;
mod edit;
mod feature;
mod prd;

pub use bounds::*;
pub use edit::*;
pub use feature::*;
pub use prd::*;
