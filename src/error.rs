//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::design::error::InputErr;
pub use crate::distribution::error::DistributionErr;
pub use crate::effect_size::error::EffectSizeErr;
pub use crate::power::error::SolverErr;
pub use crate::sim::error::SimulationErr;
pub use crate::util::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FisherErr {
    #[error("invalid input: {0}")]
    Input(InputErr),
    #[error("invalid effect size: {0}")]
    EffectSize(EffectSizeErr),
    #[error("while evaluating distribution: {0}")]
    Distribution(DistributionErr),
    #[error("while solving for sample size: {0}")]
    RootFind(RootFindErr),
    #[error("power solver failed: {0}")]
    Solver(SolverErr),
    #[error("while simulating power: {0}")]
    Simulation(SimulationErr),
}

/// Whether a failure is the caller's to fix (a warning in the UI) or a
/// numerical failure of the computation itself
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailureKind {
    InvalidInput,
    ComputationFailed,
}

impl FisherErr {
    pub fn kind(&self) -> FailureKind {
        match self {
            FisherErr::Input(_) | FisherErr::EffectSize(_) => FailureKind::InvalidInput,
            FisherErr::Distribution(_)
            | FisherErr::RootFind(_)
            | FisherErr::Solver(_)
            | FisherErr::Simulation(_) => FailureKind::ComputationFailed,
        }
    }
}
