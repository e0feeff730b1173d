use tracing::info;

use crate::design::error::InputErr;
use crate::design::types::{SampleSizeRequest, StatisticalParams};
use crate::design::validate::validate_request;
use crate::effect_size::{compute_effect_size, types::EffectSize};
use crate::error::FisherErr;
use crate::hypothesis_type::Alternative;
use crate::power::error::SolverErr;
use crate::power::types::PowerSolver;
use crate::sample_size::compute_ss::default_solver;
use crate::sample_size::types::PowerReport;

/// Power of the request's design with `n1` subjects in group 1, using the
/// endpoint's default solver
pub fn achieved_power(request: &SampleSizeRequest, n1: f64) -> Result<PowerReport, FisherErr> {
    compute_power(request, n1, default_solver(&request.endpoint))
}

/// Power of the request's design with `n1` subjects in group 1 and
/// `n1 * ratio` in group 2. The requested power is not used. For
/// equivalence the smaller of the two one-sided powers is reported,
/// which is a lower bound on the TOST power.
pub fn compute_power(
    request: &SampleSizeRequest,
    n1: f64,
    solver: &dyn PowerSolver,
) -> Result<PowerReport, FisherErr> {
    validate_request(request)?;
    let min = solver.min_nobs1();
    if !(n1 >= min) || !n1.is_finite() {
        return Err(InputErr::GroupSizeTooSmall { n1, min }.into());
    }
    let effect_size = compute_effect_size(request)?;
    let StatisticalParams { alpha, ratio, .. } = request.params;

    let eval = |effect: f64, alternative: Alternative| -> Result<f64, FisherErr> {
        solver
            .power(effect, n1, alpha, ratio, alternative)
            .map_err(|e| -> FisherErr {
                SolverErr::Failed {
                    solver: solver.name(),
                    effect_size: effect,
                    alternative,
                    reason: e.to_string(),
                }
                .into()
            })
    };

    let (power, tost_power) = match effect_size {
        EffectSize::Single { value } => (eval(value, request.design.alternative())?, None),
        EffectSize::Tost { lower, upper } => {
            let p_lower = eval(lower, Alternative::Larger)?;
            let p_upper = eval(upper, Alternative::Smaller)?;
            (p_lower.min(p_upper), Some((p_lower, p_upper)))
        }
    };

    info!(
        test_type = %request.design.test_type,
        n1,
        power,
        "computed achieved power"
    );
    Ok(PowerReport {
        test_type: request.design.test_type,
        effect_size,
        n1,
        n2: n1 * ratio,
        power,
        tost_power,
    })
}
