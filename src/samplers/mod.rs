//! Point generators feed uniform values to the item mapping and the
//! alias table. All of them are deterministic for a fixed seed.
//!
//! - AdditiveSampler
//! - GoldenRatioSqrt2Sampler
//! - R2Sampler
//! - R2AdditiveSampler
//! - RandomSampler
//! - SobolSampler
//!
//! ## Additive Sampler
//!
//! A 1D additive recurrence `v = fract(v + delta)`. With an irrational
//! *delta* (golden ratio conjugate, pi, sqrt 2) the values are
//! equidistributed; with `delta = 1/N` it walks the items in order.
//!
//! ## Random Sampler
//!
//! The Random Sampler is using the random number generator class
//! **Rng** (PCG32) with a fixed default sequence, so white noise runs
//! are reproducible.
//!
//! ## R2 Sampler
//!
//! The R2 sequence generalizes the golden ratio to two dimensions
//! using the root of `g^3 = g + 1`. It is available as a directly
//! indexed sequence and as a walk-forward additive recurrence.
//!
//! ## Sobol Sampler
//!
//! The Sobol Sampler is very efficient to implement while also being
//! extremly well distributed over both dimensions. The weakness of the
//! Sobol' points is that they are prone to structural grid artefacts
//! before convergence.

pub mod additive;
pub mod random;
pub mod r2;
pub mod sobol;
