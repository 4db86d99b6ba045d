//! Epsilon-aware scalar helpers and geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used.

mod predicates;

pub use predicates::{approximately, between, map_range, orient2d, signed_angle, Orientation};
