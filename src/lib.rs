pub mod api;
pub mod config;

pub use prioritizer_core::{engine, models, store};
