use crate::distribution::noncentral_t::{nct_cdf, nct_sf};
use crate::distribution::students_t::t_quantile;
use crate::error::FisherErr;
use crate::hypothesis_type::Alternative;
use crate::power::types::PowerSolver;

/// Power of a t-test with effective sample size `nobs` and `df` degrees
/// of freedom against a standardized effect
pub fn ttest_power(
    effect_size: f64,
    nobs: f64,
    alpha: f64,
    df: f64,
    alternative: Alternative,
) -> Result<f64, FisherErr> {
    let nc = effect_size * nobs.sqrt();
    let alpha_ = match alternative {
        Alternative::TwoSided => alpha / 2.,
        Alternative::Larger | Alternative::Smaller => alpha,
    };

    let mut power = 0.;
    if matches!(alternative, Alternative::TwoSided | Alternative::Larger) {
        let crit_upper = t_quantile(1. - alpha_, df)?;
        power += nct_sf(crit_upper, df, nc)?;
    }
    if matches!(alternative, Alternative::TwoSided | Alternative::Smaller) {
        let crit_lower = t_quantile(alpha_, df)?;
        power += nct_cdf(crit_lower, df, nc)?;
    }
    Ok(power)
}

/// Independent two-sample t-test with pooled variance
#[derive(Debug, Default, Clone, Copy)]
pub struct TTestIndPower;

impl PowerSolver for TTestIndPower {
    fn name(&self) -> &'static str {
        "two-sample t-test"
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
        let df = nobs1 + nobs2 - 2.;
        let nobs = 1. / (1. / nobs1 + 1. / nobs2);
        ttest_power(effect_size, nobs, alpha, df, alternative)
    }

    // Keeps df = n1 (1 + ratio) - 2 positive for every allowed ratio
    fn min_nobs1(&self) -> f64 {
        2.
    }
}
