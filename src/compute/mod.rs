//----------------------------------------
// computation mod
//----------------------------------------
pub mod types;

pub use crate::effect_size::compute_effect_size;
pub use crate::sample_size::compute_power::{achieved_power, compute_power};
pub use crate::sample_size::compute_ss::{compute_sample_size, default_solver, sample_size};
pub use crate::sim::power_sim::simulate_power;

use crate::design::error::InputErr;
use crate::design::types::SampleSizeRequest;
use crate::error::FisherErr;
use types::{ComputationTarget, Outcome};

/// Runs a request for the given target. The power target needs the
/// group 1 size to evaluate.
pub fn compute(
    request: &SampleSizeRequest,
    target: ComputationTarget,
    n1: Option<f64>,
) -> Result<Outcome, FisherErr> {
    match target {
        ComputationTarget::SampleSize => sample_size(request).map(Outcome::SampleSize),
        ComputationTarget::Power => {
            let n1 = n1.ok_or::<FisherErr>(InputErr::MissingGroupSize.into())?;
            achieved_power(request, n1).map(Outcome::Power)
        }
    }
}
