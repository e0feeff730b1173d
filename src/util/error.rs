use crate::error::FisherErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootFindErr {
    #[error("f(lower_bound) is larger than target; use smaller lower bound")]
    BadLowerBound,
    #[error("target not reached by upper bound {0}")]
    NoUpperBound(f64),
    #[error("failed to converge after {0} iterations")]
    FailedToConverge(usize),
    #[error("function returned non-finite value {y} at {x}")]
    NonFinite { x: f64, y: f64 },
}

impl Into<FisherErr> for RootFindErr {
    fn into(self) -> FisherErr {
        FisherErr::RootFind(self)
    }
}
