//! rheo-core: stable foundation for rheomodel.
//!
//! Contains:
//! - numeric (Real + tolerances + shear-rate grid helpers)
//! - error (shared error types member crates convert into)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RheoError, RheoResult};
pub use numeric::*;
