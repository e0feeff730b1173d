//----------------------------------------
// input errors
//----------------------------------------
use crate::design::types::TestType;
use crate::error::FisherErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputErr {
    #[error("significance level should be in (0, 0.2]; got {0}")]
    AlphaOutOfRange(f64),
    #[error("power should be in [0.5, 0.99]; got {0}")]
    PowerOutOfRange(f64),
    #[error("group 2 / group 1 ratio should be in [0.1, 10]; got {0}")]
    RatioOutOfRange(f64),
    #[error("{field} must be finite; got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be > 0; got {value}")]
    NonPositiveSd { field: &'static str, value: f64 },
    #[error("{field} should be in [0, 1]; got {value}")]
    ProportionOutOfRange { field: &'static str, value: f64 },
    #[error("margin must be >= 0; got {0}")]
    NegativeMargin(f64),
    #[error("{0} test requires a margin")]
    MissingMargin(TestType),
    #[error("{test_type} test is not available for {endpoint}")]
    UnsupportedDesign {
        test_type: TestType,
        endpoint: &'static str,
    },
    #[error("computing power requires a group 1 size")]
    MissingGroupSize,
    #[error("group 1 size should be at least {min}; got {n1}")]
    GroupSizeTooSmall { n1: f64, min: f64 },
}

impl Into<FisherErr> for InputErr {
    fn into(self) -> FisherErr {
        FisherErr::Input(self)
    }
}
