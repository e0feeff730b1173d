//----------------------------------------
// power mod types
//----------------------------------------
use crate::error::FisherErr;
use crate::hypothesis_type::Alternative;
use crate::util::root_find::root_find_monotonic;
use tracing::debug;

/// Residual tolerance on power when solving for the group 1 size
pub const SOLVE_TOL: f64 = 1e-10;

/// Two-sample power calculation for a standardized effect size, with
/// group 2 holding `ratio` times as many subjects as group 1
pub trait PowerSolver {
    fn name(&self) -> &'static str;

    /// Power of the test with `nobs1` subjects in group 1
    fn power(
        &self,
        effect_size: f64,
        nobs1: f64,
        alpha: f64,
        ratio: f64,
        alternative: Alternative,
    ) -> Result<f64, FisherErr>;

    /// Smallest group 1 size the search starts from
    fn min_nobs1(&self) -> f64;

    /// Group 1 size (not rounded) at which the test reaches `power`
    fn solve_power(
        &self,
        effect_size: f64,
        alpha: f64,
        power: f64,
        ratio: f64,
        alternative: Alternative,
    ) -> Result<f64, FisherErr> {
        let floor = self.min_nobs1();
        let power_at_floor = self.power(effect_size, floor, alpha, ratio, alternative)?;
        if power_at_floor >= power {
            debug!(
                solver = self.name(),
                power_at_floor, "target power reached at smallest group size"
            );
            return Ok(floor);
        }
        root_find_monotonic(
            |nobs1| self.power(effect_size, nobs1, alpha, ratio, alternative),
            floor,
            power,
            SOLVE_TOL,
        )
    }
}
