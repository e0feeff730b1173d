use crate::distribution::error::DistributionErr;
use crate::error::FisherErr;
use statrs::distribution::{ContinuousCDF, Normal};

pub fn std_normal_cdf(z: f64) -> f64 {
    Normal::standard().cdf(z)
}

/// Upper tail, computed directly rather than as 1 - cdf
pub fn std_normal_sf(z: f64) -> f64 {
    Normal::standard().sf(z)
}

pub fn std_normal_quantile(p: f64) -> Result<f64, FisherErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(DistributionErr::QuantileOutOfBounds(p).into());
    }
    Ok(Normal::standard().inverse_cdf(p))
}
