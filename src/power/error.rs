//----------------------------------------
// power solver errors
//----------------------------------------
use crate::error::FisherErr;
use crate::hypothesis_type::Alternative;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverErr {
    #[error("{solver} failed for effect size {effect_size} ({alternative}): {reason}")]
    Failed {
        solver: &'static str,
        effect_size: f64,
        alternative: Alternative,
        reason: String,
    },
    #[error("{solver} returned an invalid sample size ({value})")]
    InvalidOutput { solver: &'static str, value: f64 },
}

impl Into<FisherErr> for SolverErr {
    fn into(self) -> FisherErr {
        FisherErr::Solver(self)
    }
}
