use crate::error::FisherErr;
use crate::util::error::RootFindErr;
use tracing::debug;

const MAX_EXPANSIONS: usize = 64;
const MAX_ITERATIONS: usize = 500;

/// Given a monotonically increasing function f(x) and lower bound, finds
/// value x' to the right of the lower bound such that f(x') = target.
/// The bracket is widened by doubling until f reaches the target, then
/// bisected until the bracket or the residual is within `tol`. The
/// returned x always has f(x) >= target.
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, FisherErr>
where
    F: Fn(f64) -> Result<f64, FisherErr>,
{
    let eval = |x: f64| -> Result<f64, FisherErr> {
        let y = f(x)?;
        if !y.is_finite() {
            return Err(RootFindErr::NonFinite { x, y }.into());
        }
        Ok(y)
    };

    if eval(lower_bound)? >= target {
        return Err(RootFindErr::BadLowerBound.into());
    }

    // Set window for search
    let mut lower_bound = lower_bound;
    let mut upper_bound = lower_bound;
    let mut expansions = 0;
    while eval(upper_bound)? < target {
        if expansions == MAX_EXPANSIONS {
            return Err(RootFindErr::NoUpperBound(upper_bound).into());
        }
        upper_bound *= 2.;
        upper_bound += 1.; // In case lower_bound is zero
        expansions += 1;
    }
    debug!(lower_bound, upper_bound, expansions, "bracketed root");

    // Perform search; f(lower_bound) < target <= f(upper_bound) throughout
    let mut iterations = 0;
    while upper_bound - lower_bound > tol / 2. {
        if iterations == MAX_ITERATIONS {
            return Err(RootFindErr::FailedToConverge(MAX_ITERATIONS).into());
        }
        let x = (lower_bound + upper_bound) / 2.;
        // Bracket can't shrink further at this magnitude
        if x == lower_bound || x == upper_bound {
            break;
        }
        let y = eval(x)?;
        iterations += 1;
        if y < target {
            lower_bound = x;
        } else {
            upper_bound = x;
            if y - target <= tol {
                break;
            }
        }
    }
    debug!(x = upper_bound, iterations, "root found");
    Ok(upper_bound)
}
