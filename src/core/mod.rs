//! The core of the crate: numeric helpers, the random number
//! generator, low-discrepancy sequences, item mapping and the alias
//! table, plus the api driving the comparison.

pub mod api;
pub mod error;
pub mod geometry;
pub mod histogram;
pub mod lowdiscrepancy;
pub mod pbrt;
pub mod report;
pub mod rng;
pub mod sampler;
pub mod sampling;
