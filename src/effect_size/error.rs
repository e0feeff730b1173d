//----------------------------------------
// effect size errors
//----------------------------------------
use crate::error::FisherErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EffectSizeErr {
    #[error("effect size must be > 0; got {0}")]
    NonPositive(f64),
    #[error(
        "effect size is not within equivalence margins (lower effect {lower}, \
        upper effect {upper}); revise the margin or expected difference"
    )]
    OutsideEquivalenceMargins { lower: f64, upper: f64 },
    #[error("margin-adjusted proportion should be in [0, 1]; got {0}")]
    AdjustedProportionOutOfRange(f64),
}

impl Into<FisherErr> for EffectSizeErr {
    fn into(self) -> FisherErr {
        FisherErr::EffectSize(self)
    }
}
