//----------------------------------------
// simulation errors
//----------------------------------------
use crate::error::FisherErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationErr {
    #[error("number of simulations must be > 0")]
    NoSimulations,
    #[error("each group needs at least {min} subjects to simulate (group sizes {n1}, {n2})")]
    GroupTooSmall { n1: u64, n2: u64, min: u64 },
    #[error("could not construct outcome distribution: {0}")]
    BadOutcomeDistribution(String),
}

impl Into<FisherErr> for SimulationErr {
    fn into(self) -> FisherErr {
        FisherErr::Simulation(self)
    }
}
