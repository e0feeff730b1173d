use tracing::{info, warn};

use crate::design::types::{Endpoint, SampleSizeRequest, StatisticalParams};
use crate::design::validate::validate_request;
use crate::effect_size::{compute_effect_size, types::EffectSize};
use crate::error::FisherErr;
use crate::hypothesis_type::Alternative;
use crate::power::error::SolverErr;
use crate::power::normal_ind::NormalIndPower;
use crate::power::ttest_ind::TTestIndPower;
use crate::power::types::PowerSolver;
use crate::sample_size::types::{SampleSizeReport, SampleSizeResult};

/// Solver matching the endpoint: t-test for means, normal approximation
/// for proportions
pub fn default_solver(endpoint: &Endpoint) -> &'static dyn PowerSolver {
    match endpoint {
        Endpoint::Means(_) => &TTestIndPower,
        Endpoint::Proportions(_) => &NormalIndPower,
    }
}

/// Sample size per group for the request, using the endpoint's default
/// solver
pub fn sample_size(request: &SampleSizeRequest) -> Result<SampleSizeReport, FisherErr> {
    compute_sample_size(request, default_solver(&request.endpoint))
}

/// Computes the per-group sample size for a request with an injected
/// solver. Equality, superiority and non-inferiority designs make one
/// solver call; equivalence designs solve both one-sided tests of TOST
/// and keep the larger group 1 size. Group 2 is group 1 scaled by the
/// allocation ratio, and both are rounded up.
pub fn compute_sample_size(
    request: &SampleSizeRequest,
    solver: &dyn PowerSolver,
) -> Result<SampleSizeReport, FisherErr> {
    validate_request(request).inspect_err(|e| warn!(error = %e, "rejected request"))?;
    let effect_size = compute_effect_size(request)
        .inspect_err(|e| warn!(error = %e, "no sample size computed"))?;
    let StatisticalParams {
        alpha,
        power,
        ratio,
    } = request.params;

    let (n1_raw, tost_n1) = match effect_size {
        EffectSize::Single { value } => {
            let alternative = request.design.alternative();
            let n1 = solve(solver, value, alpha, power, ratio, alternative)?;
            (n1, None)
        }
        EffectSize::Tost { lower, upper } => {
            let n_lower = solve(solver, lower, alpha, power, ratio, Alternative::Larger)?;
            let n_upper = solve(solver, upper, alpha, power, ratio, Alternative::Smaller)?;
            (n_lower.max(n_upper), Some((n_lower, n_upper)))
        }
    };

    let result = SampleSizeResult::from_raw(n1_raw, ratio);
    info!(
        test_type = %request.design.test_type,
        endpoint = request.endpoint.name(),
        n1_raw,
        n1 = result.n1,
        n2 = result.n2,
        "computed sample size"
    );
    Ok(SampleSizeReport {
        test_type: request.design.test_type,
        effect_size,
        n1_raw,
        tost_n1,
        result,
    })
}

/// One solver call; any failure comes back as a solver error carrying
/// the underlying message
fn solve(
    solver: &dyn PowerSolver,
    effect_size: f64,
    alpha: f64,
    power: f64,
    ratio: f64,
    alternative: Alternative,
) -> Result<f64, FisherErr> {
    let n1 = solver
        .solve_power(effect_size, alpha, power, ratio, alternative)
        .map_err(|e| -> FisherErr {
            SolverErr::Failed {
                solver: solver.name(),
                effect_size,
                alternative,
                reason: e.to_string(),
            }
            .into()
        })?;
    if !(n1.is_finite() && n1 > 0.) {
        return Err(SolverErr::InvalidOutput {
            solver: solver.name(),
            value: n1,
        }
        .into());
    }
    Ok(n1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::types::{
        MeanDifference, MeansInput, ProportionsInput, Sidedness, StdDev, StudyDesign, TestType,
    };
    use crate::distribution::error::DistributionErr;
    use crate::effect_size::error::EffectSizeErr;
    use std::cell::RefCell;

    /// Deterministic stand-in: n1 = scale / effect^2, recording each call
    struct StubSolver {
        scale: f64,
        calls: RefCell<Vec<(f64, Alternative)>>,
    }

    impl StubSolver {
        fn new(scale: f64) -> Self {
            StubSolver {
                scale,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PowerSolver for StubSolver {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn power(
            &self,
            _effect_size: f64,
            _nobs1: f64,
            _alpha: f64,
            _ratio: f64,
            _alternative: Alternative,
        ) -> Result<f64, FisherErr> {
            Ok(0.5)
        }

        fn min_nobs1(&self) -> f64 {
            1.
        }

        fn solve_power(
            &self,
            effect_size: f64,
            _alpha: f64,
            _power: f64,
            _ratio: f64,
            alternative: Alternative,
        ) -> Result<f64, FisherErr> {
            self.calls.borrow_mut().push((effect_size, alternative));
            Ok(self.scale / (effect_size * effect_size))
        }
    }

    struct FailingSolver;

    impl PowerSolver for FailingSolver {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn power(
            &self,
            _effect_size: f64,
            _nobs1: f64,
            _alpha: f64,
            _ratio: f64,
            _alternative: Alternative,
        ) -> Result<f64, FisherErr> {
            Err(DistributionErr::BadFreedom(-1.).into())
        }

        fn min_nobs1(&self) -> f64 {
            2.
        }
    }

    fn means(mean1: f64, mean2: f64, design: StudyDesign, ratio: f64) -> SampleSizeRequest {
        SampleSizeRequest::means(
            design,
            MeansInput {
                difference: MeanDifference::Means { mean1, mean2 },
                sd: StdDev::Pooled { pooled_sd: 1.0 },
            },
            StatisticalParams {
                ratio,
                ..Default::default()
            },
        )
    }

    #[test]
    fn equality_single_call_two_sided() {
        let stub = StubSolver::new(16.);
        let request = means(1.0, 0.5, StudyDesign::equality(Sidedness::TwoSided), 1.0);
        let report = compute_sample_size(&request, &stub).expect("failed to compute sample size");
        assert_eq!(*stub.calls.borrow(), vec![(0.5, Alternative::TwoSided)]);
        assert_eq!(report.n1_raw, 64.);
        assert_eq!(report.result, SampleSizeResult { n1: 64, n2: 64 });
        assert_eq!(report.tost_n1, None);
    }

    #[test]
    fn one_sided_uses_larger() {
        let stub = StubSolver::new(1.);
        let design = StudyDesign::with_margin(TestType::NonInferiority, Sidedness::OneSided, 0.5);
        compute_sample_size(&means(0.0, 0.0, design, 1.0), &stub).unwrap();
        assert_eq!(*stub.calls.borrow(), vec![(0.5, Alternative::Larger)]);
    }

    #[test]
    fn group_2_follows_ratio() {
        let stub = StubSolver::new(10.);
        // n1_raw = 10 / 0.3^2 = 111.1..., n2 = 222.2... -> 223
        let request = means(0.3, 0.0, StudyDesign::equality(Sidedness::TwoSided), 2.0);
        let report = compute_sample_size(&request, &stub).unwrap();
        assert_eq!(report.result.n1, 112);
        assert_eq!(report.result.n2, (report.n1_raw * 2.0).ceil() as u64);
        assert_eq!(report.result.n2, 223);
    }

    #[test]
    fn equivalence_makes_two_one_sided_calls() {
        let stub = StubSolver::new(1.);
        let design = StudyDesign::with_margin(TestType::Equivalence, Sidedness::TwoSided, 0.5);
        // raw diff 0.1: lower = 0.6, upper = -0.4
        let report = compute_sample_size(&means(0.1, 0.0, design, 1.0), &stub).unwrap();
        let calls = stub.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, Alternative::Larger);
        assert_eq!(calls[1].1, Alternative::Smaller);
        let (n_lower, n_upper) = report.tost_n1.expect("missing TOST sizes");
        assert!(n_upper > n_lower);
        assert_eq!(report.n1_raw, n_upper);
    }

    #[test]
    fn non_positive_effect_skips_solver() {
        let stub = StubSolver::new(1.);
        let request = means(0.0, 0.0, StudyDesign::equality(Sidedness::TwoSided), 1.0);
        let res = compute_sample_size(&request, &stub);
        assert!(matches!(
            res,
            Err(FisherErr::EffectSize(EffectSizeErr::NonPositive(_)))
        ));
        assert!(stub.calls.borrow().is_empty());
    }

    #[test]
    fn inconsistent_equivalence_skips_solver() {
        let stub = StubSolver::new(1.);
        let design = StudyDesign::with_margin(TestType::Equivalence, Sidedness::TwoSided, 0.5);
        let res = compute_sample_size(&means(2.0, 0.0, design, 1.0), &stub);
        assert!(res.is_err());
        assert!(stub.calls.borrow().is_empty());
    }

    #[test]
    fn solver_failure_carries_reason() {
        let request = means(1.0, 0.0, StudyDesign::equality(Sidedness::TwoSided), 1.0);
        let res = compute_sample_size(&request, &FailingSolver);
        if let Err(e) = res {
            assert_eq!(e.kind(), crate::error::FailureKind::ComputationFailed);
            assert_eq!(
                format!("{e}"),
                "power solver failed: failing failed for effect size 1 (two-sided): \
                while evaluating distribution: degrees of freedom should be > 0; got -1"
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn invalid_solver_output_rejected() {
        let stub = StubSolver::new(0.);
        let request = means(1.0, 0.0, StudyDesign::equality(Sidedness::TwoSided), 1.0);
        assert!(matches!(
            compute_sample_size(&request, &stub),
            Err(FisherErr::Solver(SolverErr::InvalidOutput { .. }))
        ));
    }

    #[test]
    fn cohens_d_one_needs_17_per_group() {
        let request = means(1.0, 0.0, StudyDesign::equality(Sidedness::TwoSided), 1.0);
        let report = sample_size(&request).expect("failed to compute sample size");
        assert_eq!(report.result, SampleSizeResult { n1: 17, n2: 17 });
    }

    #[test]
    fn proportions_use_normal_solver() {
        let request = SampleSizeRequest::proportions(
            StudyDesign::equality(Sidedness::TwoSided),
            ProportionsInput {
                prop1: 0.5,
                prop2: 0.4,
            },
            StatisticalParams::default(),
        );
        let report = sample_size(&request).expect("failed to compute sample size");
        assert_eq!(report.result, SampleSizeResult { n1: 388, n2: 388 });
    }

    #[test]
    fn symmetric_equivalence_calls_agree() {
        let design = StudyDesign::with_margin(TestType::Equivalence, Sidedness::TwoSided, 0.5);
        let report = sample_size(&means(0.0, 0.0, design, 1.0)).unwrap();
        let (n_lower, n_upper) = report.tost_n1.unwrap();
        assert!((n_lower - n_upper).abs() < 1e-6);
        // Same as a one-sided test against d = 0.5
        assert_eq!(report.result, SampleSizeResult { n1: 51, n2: 51 });
    }
}
