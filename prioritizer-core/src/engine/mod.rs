//! Pure prioritization functions over feature records.
//!
//! Nothing here is cached: every call derives its result from the records it
//! is given, so results can never go stale relative to an edit.

mod prd;
mod ranking;
mod scoring;

pub use prd::*;
pub use ranking::*;
pub use scoring::*;
