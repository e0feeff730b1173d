use serde::Serialize;

use crate::design::types::TestType;
use crate::effect_size::types::EffectSize;

/// Whole participants per group
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct SampleSizeResult {
    pub n1: u64,
    pub n2: u64,
}

impl SampleSizeResult {
    /// Rounds the solver's group 1 size and its ratio-scaled group 2
    /// counterpart up; group 2 is scaled before rounding
    pub fn from_raw(n1_raw: f64, ratio: f64) -> Self {
        SampleSizeResult {
            n1: n1_raw.ceil() as u64,
            n2: (n1_raw * ratio).ceil() as u64,
        }
    }

    pub fn total(&self) -> u64 {
        self.n1 + self.n2
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct SampleSizeReport {
    pub test_type: TestType,
    pub effect_size: EffectSize,
    /// Unrounded group 1 size; for TOST the larger of the two
    pub n1_raw: f64,
    /// Group 1 sizes of the lower and upper one-sided tests
    pub tost_n1: Option<(f64, f64)>,
    pub result: SampleSizeResult,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct PowerReport {
    pub test_type: TestType,
    pub effect_size: EffectSize,
    pub n1: f64,
    pub n2: f64,
    pub power: f64,
    /// Powers of the lower and upper one-sided tests
    pub tost_power: Option<(f64, f64)>,
}
