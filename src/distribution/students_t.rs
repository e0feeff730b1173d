use crate::distribution::error::DistributionErr;
use crate::distribution::std_normal::std_normal_quantile;
use crate::error::FisherErr;
use statrs::distribution::{Continuous, ContinuousCDF, StudentsT};

// Above this df the quantile comes from the Cornish-Fisher expansion
// through 1/df^4, accurate to ~1e-11 at the cutover and better beyond it.
// Incomplete beta inversion drifts by 1e-6 and worse from df ~ 1e5.
const LARGE_DF: f64 = 1e3;
const NEWTON_STEPS: usize = 2;

fn t_dist(df: f64) -> Result<StudentsT, FisherErr> {
    StudentsT::new(0.0, 1.0, df).map_err(|_| DistributionErr::BadFreedom(df).into())
}

/// CDF of the central t distribution; df need not be an integer
pub fn t_cdf(x: f64, df: f64) -> Result<f64, FisherErr> {
    Ok(t_dist(df)?.cdf(x))
}

/// Abramowitz & Stegun 26.7.5
fn cornish_fisher(z: f64, df: f64) -> f64 {
    let z2 = z * z;
    let g1 = z * (z2 + 1.) / 4.;
    let g2 = z * ((5. * z2 + 16.) * z2 + 3.) / 96.;
    let g3 = z * (((3. * z2 + 19.) * z2 + 17.) * z2 - 15.) / 384.;
    let g4 = z * ((((79. * z2 + 776.) * z2 + 1482.) * z2 - 1920.) * z2 - 945.) / 92160.;
    z + (g1 + (g2 + (g3 + g4 / df) / df) / df) / df
}

/// Quantile of the central t distribution
pub fn t_quantile(p: f64, df: f64) -> Result<f64, FisherErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(DistributionErr::QuantileOutOfBounds(p).into());
    }
    let dist = t_dist(df)?;
    if df > LARGE_DF {
        return Ok(cornish_fisher(std_normal_quantile(p)?, df));
    }
    // Polish the inversion against the cdf
    let mut q = dist.inverse_cdf(p);
    for _ in 0..NEWTON_STEPS {
        let step = (dist.cdf(q) - p) / dist.pdf(q);
        if !step.is_finite() {
            break;
        }
        q -= step;
    }
    Ok(q)
}
