use rand::{SeedableRng, distributions::Distribution, rngs};
use serde::Serialize;
use statrs::distribution::{Binomial, Normal};
use statrs::statistics::Statistics;
use tracing::{debug, info};

use crate::design::types::{
    Endpoint, MeansInput, ProportionsInput, SampleSizeRequest, Sidedness, StudyDesign, TestType,
};
use crate::design::validate::validate_request;
use crate::distribution::{std_normal::std_normal_quantile, students_t::t_quantile};
use crate::error::FisherErr;
use crate::sim::error::SimulationErr;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct SimulationReport {
    pub n_sims: usize,
    pub n1: u64,
    pub n2: u64,
    pub seed: u64,
    pub rejections: usize,
    pub empirical_power: f64,
}

/// Critical values of the test statistic at the request's alpha
#[derive(Debug, Clone, Copy)]
struct Critical {
    one_sided: f64,
    two_sided: f64,
}

impl Critical {
    fn new<Q>(alpha: f64, quantile: Q) -> Result<Self, FisherErr>
    where
        Q: Fn(f64) -> Result<f64, FisherErr>,
    {
        Ok(Critical {
            one_sided: quantile(1. - alpha)?,
            two_sided: quantile(1. - alpha / 2.)?,
        })
    }
}

/// Monte Carlo estimate of the power of the request's design with `n1`
/// and `n2` subjects. Each of the `n_sims` trials draws outcomes with
/// the request's means and SDs (normal) or proportions (Bernoulli),
/// then applies the pooled t-test or arcsine z-test of the design.
/// Simulation i is seeded with `seed + i`, so results are reproducible.
/// Simulating a design with no true effect estimates its type I error.
pub fn simulate_power(
    request: &SampleSizeRequest,
    n1: u64,
    n2: u64,
    n_sims: usize,
    seed: u64,
) -> Result<SimulationReport, FisherErr> {
    validate_request(request)?;
    if n_sims == 0 {
        return Err(SimulationErr::NoSimulations.into());
    }

    let rejections = match &request.endpoint {
        Endpoint::Means(input) => {
            simulate_means(&request.design, input, request.params.alpha, n1, n2, n_sims, seed)?
        }
        Endpoint::Proportions(input) => simulate_proportions(
            &request.design,
            input,
            request.params.alpha,
            n1,
            n2,
            n_sims,
            seed,
        )?,
    };

    let empirical_power = rejections as f64 / n_sims as f64;
    info!(n_sims, n1, n2, empirical_power, "simulated power");
    Ok(SimulationReport {
        n_sims,
        n1,
        n2,
        seed,
        rejections,
        empirical_power,
    })
}

fn simulate_means(
    design: &StudyDesign,
    input: &MeansInput,
    alpha: f64,
    n1: u64,
    n2: u64,
    n_sims: usize,
    seed: u64,
) -> Result<usize, FisherErr> {
    if n1 < 2 || n2 < 2 {
        return Err(SimulationErr::GroupTooSmall { n1, n2, min: 2 }.into());
    }
    let df = (n1 + n2 - 2) as f64;
    let crit = Critical::new(alpha, |p| t_quantile(p, df))?;
    debug!(?crit, df, "t-test critical values");

    let (mean1, mean2) = input.difference.means();
    let (sd1, sd2) = input.sd.group_sds();
    let arm1 = Normal::new(mean1, sd1)
        .map_err(|e| SimulationErr::BadOutcomeDistribution(e.to_string()))
        .map_err(Into::<FisherErr>::into)?;
    let arm2 = Normal::new(mean2, sd2)
        .map_err(|e| SimulationErr::BadOutcomeDistribution(e.to_string()))
        .map_err(Into::<FisherErr>::into)?;

    let margin = design.effective_margin();
    // Equality is tested in the direction of the expected difference
    let direction = if input.difference.raw_diff() < 0. { -1. } else { 1. };
    let (n1_f, n2_f) = (n1 as f64, n2 as f64);

    let rejections = (0..n_sims)
        .filter(|&i| {
            let mut rng = rngs::StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let x1: Vec<f64> = (0..n1).map(|_| arm1.sample(&mut rng)).collect();
            let x2: Vec<f64> = (0..n2).map(|_| arm2.sample(&mut rng)).collect();

            let diff = x1.iter().mean() - x2.iter().mean();
            let pooled_var =
                ((n1_f - 1.) * x1.iter().variance() + (n2_f - 1.) * x2.iter().variance()) / df;
            let se = (pooled_var * (1. / n1_f + 1. / n2_f)).sqrt();

            match design.test_type {
                TestType::Equality => rejects(design.sidedness, direction * diff / se, crit),
                TestType::Superiority => rejects(design.sidedness, (diff - margin) / se, crit),
                TestType::NonInferiority => rejects(design.sidedness, (diff + margin) / se, crit),
                TestType::Equivalence => {
                    (diff + margin) / se > crit.one_sided && (diff - margin) / se < -crit.one_sided
                }
            }
        })
        .count();
    Ok(rejections)
}

fn simulate_proportions(
    design: &StudyDesign,
    input: &ProportionsInput,
    alpha: f64,
    n1: u64,
    n2: u64,
    n_sims: usize,
    seed: u64,
) -> Result<usize, FisherErr> {
    if n1 < 1 || n2 < 1 {
        return Err(SimulationErr::GroupTooSmall { n1, n2, min: 1 }.into());
    }
    let crit = Critical::new(alpha, std_normal_quantile)?;
    debug!(?crit, "z-test critical values");

    let arm1 = Binomial::new(input.prop1, n1)
        .map_err(|e| SimulationErr::BadOutcomeDistribution(e.to_string()))
        .map_err(Into::<FisherErr>::into)?;
    let arm2 = Binomial::new(input.prop2, n2)
        .map_err(|e| SimulationErr::BadOutcomeDistribution(e.to_string()))
        .map_err(Into::<FisherErr>::into)?;

    let margin = design.effective_margin();
    let shift = match design.test_type {
        TestType::Superiority => -margin,
        TestType::NonInferiority => margin,
        TestType::Equality | TestType::Equivalence => 0.,
    };
    let (n1_f, n2_f) = (n1 as f64, n2 as f64);
    let se = (1. / n1_f + 1. / n2_f).sqrt();

    let rejections = (0..n_sims)
        .filter(|&i| {
            let mut rng = rngs::StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let events1: u64 = arm1.sample(&mut rng);
            let events2: u64 = arm2.sample(&mut rng);
            let p1_hat = events1 as f64 / n1_f;
            let p2_hat = (events2 as f64 / n2_f + shift).clamp(0., 1.);
            let h_hat = 2. * p1_hat.sqrt().asin() - 2. * p2_hat.sqrt().asin();
            rejects(design.sidedness, h_hat / se, crit)
        })
        .count();
    Ok(rejections)
}

fn rejects(sidedness: Sidedness, stat: f64, crit: Critical) -> bool {
    match sidedness {
        Sidedness::TwoSided => stat.abs() > crit.two_sided,
        Sidedness::OneSided => stat > crit.one_sided,
    }
}
