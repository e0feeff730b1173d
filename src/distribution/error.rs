//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::FisherErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistributionErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("degrees of freedom should be > 0; got {0}")]
    BadFreedom(f64),
    #[error("noncentrality parameter must be finite; got {0}")]
    BadNoncentrality(f64),
}

impl Into<FisherErr> for DistributionErr {
    fn into(self) -> FisherErr {
        FisherErr::Distribution(self)
    }
}
