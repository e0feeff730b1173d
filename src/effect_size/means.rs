use crate::design::types::{MeansInput, StdDev, StudyDesign, TestType};
use crate::effect_size::error::EffectSizeErr;
use crate::effect_size::types::EffectSize;
use crate::error::FisherErr;

/// Standard deviation used to standardize the mean difference.
/// Separate SDs are combined as sqrt((sd1^2 + sd2^2) / 2), i.e. the
/// variances are averaged without weighting by group size.
pub fn combined_sd(sd: &StdDev) -> f64 {
    match *sd {
        StdDev::Pooled { pooled_sd } => pooled_sd,
        StdDev::Separate { sd1, sd2 } => ((sd1 * sd1 + sd2 * sd2) / 2.).sqrt(),
    }
}

/// Standardized mean difference for the chosen hypothesis framework
pub fn means_effect_size(
    design: &StudyDesign,
    input: &MeansInput,
) -> Result<EffectSize, FisherErr> {
    let sd = combined_sd(&input.sd);
    let raw_diff = input.difference.raw_diff();
    let margin = design.effective_margin();

    let value = match design.test_type {
        TestType::Equality => raw_diff.abs() / sd,
        TestType::Superiority => (raw_diff - margin) / sd,
        TestType::NonInferiority => (raw_diff + margin) / sd,
        TestType::Equivalence => {
            let lower = (raw_diff + margin) / sd;
            let upper = (raw_diff - margin) / sd;
            if !(lower > 0. && upper < 0.) {
                return Err(EffectSizeErr::OutsideEquivalenceMargins { lower, upper }.into());
            }
            return Ok(EffectSize::Tost { lower, upper });
        }
    };

    if !(value > 0.) {
        return Err(EffectSizeErr::NonPositive(value).into());
    }
    Ok(EffectSize::Single { value })
}
