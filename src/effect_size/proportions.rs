use crate::design::error::InputErr;
use crate::design::types::{ProportionsInput, StudyDesign, TestType};
use crate::effect_size::error::EffectSizeErr;
use crate::effect_size::types::EffectSize;
use crate::error::FisherErr;

/// Cohen's h, the difference of the arcsine square root transformed
/// proportions
pub fn proportion_effectsize(prop1: f64, prop2: f64) -> f64 {
    2. * prop1.sqrt().asin() - 2. * prop2.sqrt().asin()
}

/// Effect size for comparing two proportions. The margin moves the
/// group 2 proportion; there is no equivalence variant.
pub fn proportions_effect_size(
    design: &StudyDesign,
    input: &ProportionsInput,
) -> Result<EffectSize, FisherErr> {
    let margin = design.effective_margin();
    let adjusted_prop2 = match design.test_type {
        TestType::Equality => input.prop2,
        TestType::Superiority => input.prop2 - margin,
        TestType::NonInferiority => input.prop2 + margin,
        TestType::Equivalence => {
            return Err(InputErr::UnsupportedDesign {
                test_type: TestType::Equivalence,
                endpoint: "proportions",
            }
            .into());
        }
    };
    if !(0. ..=1.).contains(&adjusted_prop2) {
        return Err(EffectSizeErr::AdjustedProportionOutOfRange(adjusted_prop2).into());
    }

    let value = proportion_effectsize(input.prop1, adjusted_prop2);
    if !(value > 0.) {
        return Err(EffectSizeErr::NonPositive(value).into());
    }
    Ok(EffectSize::Single { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::types::Sidedness;

    #[test]
    fn cohens_h_value() {
        let h = proportion_effectsize(0.5, 0.4);
        assert!((h - 0.20135792079033088).abs() < 1e-12);
    }

    #[test]
    fn cohens_h_antisymmetric() {
        assert_eq!(
            proportion_effectsize(0.3, 0.7),
            -proportion_effectsize(0.7, 0.3)
        );
    }

    #[test]
    fn equality_keeps_direction() {
        let design = StudyDesign::equality(Sidedness::TwoSided);
        let res = proportions_effect_size(
            &design,
            &ProportionsInput {
                prop1: 0.4,
                prop2: 0.5,
            },
        );
        assert!(matches!(
            res,
            Err(FisherErr::EffectSize(EffectSizeErr::NonPositive(_)))
        ));
    }

    #[test]
    fn superiority_lowers_group_2() {
        let design = StudyDesign::with_margin(TestType::Superiority, Sidedness::OneSided, 0.05);
        let effect = proportions_effect_size(&design, &ProportionsInput::default())
            .expect("failed to compute effect size");
        let expected = proportion_effectsize(0.5, 0.4 - 0.05);
        assert_eq!(effect, EffectSize::Single { value: expected });
    }

    #[test]
    fn non_inferiority_raises_group_2() {
        let design = StudyDesign::with_margin(TestType::NonInferiority, Sidedness::OneSided, 0.05);
        let effect = proportions_effect_size(
            &design,
            &ProportionsInput {
                prop1: 0.6,
                prop2: 0.5,
            },
        )
        .expect("failed to compute effect size");
        let expected = proportion_effectsize(0.6, 0.5 + 0.05);
        assert_eq!(effect, EffectSize::Single { value: expected });
    }

    #[test]
    fn adjusted_proportion_must_stay_in_unit_interval() {
        let design = StudyDesign::with_margin(TestType::Superiority, Sidedness::OneSided, 0.2);
        let res = proportions_effect_size(
            &design,
            &ProportionsInput {
                prop1: 0.3,
                prop2: 0.1,
            },
        );
        assert!(matches!(
            res,
            Err(FisherErr::EffectSize(
                EffectSizeErr::AdjustedProportionOutOfRange(_)
            ))
        ));
    }
}
