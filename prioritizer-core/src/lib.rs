//! Feature records, the in-memory feature store, and the RICE prioritization engine.
//!
//! The store owns the ordered collection and applies single-field edits. The
//! engine is a set of pure functions over feature records: it never sees the
//! store, only a snapshot of it.

pub mod engine;
pub mod models;
pub mod store;
