use crate::design::error::InputErr;
use crate::design::types::{
    Endpoint, MeanDifference, MeansInput, ProportionsInput, SampleSizeRequest, StatisticalParams,
    StdDev, StudyDesign, TestType,
};
use crate::error::FisherErr;

const ALPHA_MAX: f64 = 0.2;
const POWER_RANGE: (f64, f64) = (0.5, 0.99);
const RATIO_RANGE: (f64, f64) = (0.1, 10.0);

/// Range checks the presentation layer is expected to enforce before a
/// request reaches the effect size or solver code
pub fn validate_request(request: &SampleSizeRequest) -> Result<(), FisherErr> {
    validate_params(&request.params)?;
    validate_design(&request.design)?;
    match &request.endpoint {
        Endpoint::Means(input) => validate_means(input),
        Endpoint::Proportions(input) => {
            if request.design.test_type == TestType::Equivalence {
                return Err(InputErr::UnsupportedDesign {
                    test_type: TestType::Equivalence,
                    endpoint: request.endpoint.name(),
                }
                .into());
            }
            validate_proportions(input)
        }
    }
}

pub fn validate_params(params: &StatisticalParams) -> Result<(), FisherErr> {
    let StatisticalParams {
        alpha,
        power,
        ratio,
    } = *params;
    // NaN fails every comparison, so these also reject non-finite values
    if !(alpha > 0.0 && alpha <= ALPHA_MAX) {
        return Err(InputErr::AlphaOutOfRange(alpha).into());
    }
    if !(power >= POWER_RANGE.0 && power <= POWER_RANGE.1) {
        return Err(InputErr::PowerOutOfRange(power).into());
    }
    if !(ratio >= RATIO_RANGE.0 && ratio <= RATIO_RANGE.1) {
        return Err(InputErr::RatioOutOfRange(ratio).into());
    }
    Ok(())
}

fn validate_design(design: &StudyDesign) -> Result<(), FisherErr> {
    if design.test_type == TestType::Equality {
        return Ok(());
    }
    match design.margin {
        None => Err(InputErr::MissingMargin(design.test_type).into()),
        Some(margin) if !margin.is_finite() => Err(InputErr::NonFinite {
            field: "margin",
            value: margin,
        }
        .into()),
        Some(margin) if margin < 0.0 => Err(InputErr::NegativeMargin(margin).into()),
        Some(_) => Ok(()),
    }
}

fn validate_means(input: &MeansInput) -> Result<(), FisherErr> {
    match input.difference {
        MeanDifference::Means { mean1, mean2 } => {
            check_finite("mean1", mean1)?;
            check_finite("mean2", mean2)?;
        }
        MeanDifference::Difference { mean_diff } => check_finite("mean_diff", mean_diff)?,
    }
    match input.sd {
        StdDev::Pooled { pooled_sd } => check_sd("pooled_sd", pooled_sd),
        StdDev::Separate { sd1, sd2 } => {
            check_sd("sd1", sd1)?;
            check_sd("sd2", sd2)
        }
    }
}

fn validate_proportions(input: &ProportionsInput) -> Result<(), FisherErr> {
    check_proportion("prop1", input.prop1)?;
    check_proportion("prop2", input.prop2)
}

fn check_finite(field: &'static str, value: f64) -> Result<(), FisherErr> {
    if !value.is_finite() {
        return Err(InputErr::NonFinite { field, value }.into());
    }
    Ok(())
}

fn check_sd(field: &'static str, value: f64) -> Result<(), FisherErr> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(InputErr::NonPositiveSd { field, value }.into());
    }
    Ok(())
}

fn check_proportion(field: &'static str, value: f64) -> Result<(), FisherErr> {
    if !(0.0..=1.0).contains(&value) {
        return Err(InputErr::ProportionOutOfRange { field, value }.into());
    }
    Ok(())
}
