//----------------------------------------
// compute mod types
//----------------------------------------
use serde::Serialize;

pub use crate::computation_target::ComputationTarget;
pub use crate::sample_size::types::{PowerReport, SampleSizeReport, SampleSizeResult};
pub use crate::sim::power_sim::SimulationReport;

/// Result of a request for either computation target
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(tag = "target", rename_all = "kebab-case")]
pub enum Outcome {
    SampleSize(SampleSizeReport),
    Power(PowerReport),
}

impl Outcome {
    /// Group sizes the outcome describes, rounded up for the power target
    pub fn group_sizes(&self) -> (u64, u64) {
        match self {
            Outcome::SampleSize(report) => (report.result.n1, report.result.n2),
            Outcome::Power(report) => (report.n1.ceil() as u64, report.n2.ceil() as u64),
        }
    }
}
