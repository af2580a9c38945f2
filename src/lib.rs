//! # rs_alias
//!
//! Compare strategies for drawing items from a fixed-size alphabet,
//! either uniformly or according to arbitrary weights, and measure how
//! quickly the empirical distribution converges to the target.
//!
//! The weighted path builds a [Vose alias table][alias] once and
//! samples it in O(1) from two uniform coordinates. The coordinates
//! come from white noise (PCG32) or from low-discrepancy sequences:
//! the [R2 sequence][r2] (indexed or additive) and the first two
//! dimensions of the Sobol' sequence.
//!
//! ```rust
//! use rs_alias::core::lowdiscrepancy::r2_at_index;
//! use rs_alias::core::sampling::{linear_weights, AliasTable};
//!
//! let weights = linear_weights(10).unwrap();
//! let table = AliasTable::new(&weights).unwrap();
//! let p = r2_at_index(42);
//! let item = table.sample(p.x, p.y);
//! assert!(item < 10);
//! ```
//!
//! [alias]: core/sampling/struct.AliasTable.html
//! [r2]: http://extremelearning.com.au/unreasonable-effectiveness-of-quasirandom-sequences/

pub mod core;
pub mod jobqueue;
pub mod samplers;
