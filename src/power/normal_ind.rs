use crate::distribution::std_normal::{std_normal_cdf, std_normal_quantile, std_normal_sf};
use crate::error::FisherErr;
use crate::hypothesis_type::Alternative;
use crate::power::types::PowerSolver;

/// Power of a z-test with effective sample size `nobs` (unit variance)
pub fn normal_power(
    effect_size: f64,
    nobs: f64,
    alpha: f64,
    alternative: Alternative,
) -> Result<f64, FisherErr> {
    let alpha_ = match alternative {
        Alternative::TwoSided => alpha / 2.,
        Alternative::Larger | Alternative::Smaller => alpha,
    };
    let crit = std_normal_quantile(1. - alpha_)?;
    let shift = effect_size * nobs.sqrt();

    let mut power = 0.;
    if matches!(alternative, Alternative::TwoSided | Alternative::Larger) {
        power += std_normal_sf(crit - shift);
    }
    if matches!(alternative, Alternative::TwoSided | Alternative::Smaller) {
        power += std_normal_cdf(-crit - shift);
    }
    Ok(power)
}

/// Two independent samples under the normal approximation; with Cohen's
/// h as the effect this is the arcsine test for two proportions
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalIndPower;

impl PowerSolver for NormalIndPower {
    fn name(&self) -> &'static str {
        "two-sample z-test"
    }

    fn power(
        &self,
        effect_size: f64,
        nobs1: f64,
        alpha: f64,
        ratio: f64,
        alternative: Alternative,
    ) -> Result<f64, FisherErr> {
        let nobs2 = nobs1 * ratio;
        let nobs = 1. / (1. / nobs1 + 1. / nobs2);
        normal_power(effect_size, nobs, alpha, alternative)
    }

    fn min_nobs1(&self) -> f64 {
        1e-3
    }
}
