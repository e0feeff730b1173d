//----------------------------------------
// Root lib
//----------------------------------------
//! Sample size and power calculations for comparing two independent
//! groups. Means are compared with a two-sample t-test and proportions
//! with an arcsine-transformed normal test, under equality,
//! superiority, non-inferiority and (for means) equivalence designs.

/// This module houses the public API for computing sample sizes,
/// achieved power and simulated power
pub mod compute;
pub mod computation_target;
pub mod design;
pub mod distribution;
pub mod effect_size;
/// This module contains error types
pub mod error;
pub mod hypothesis_type;
pub mod power;
mod sample_size;
mod sim;
mod util;
