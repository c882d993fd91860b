use planar_core::{Integrator, Pair, Sample};
use planar_solvers::OdeSolver;

use crate::systems::ExactSolution;

/// Returns the root-mean-square distance between `samples` and `exact`.
///
/// ```text
/// sqrt( Σ ((x_i - x*(t_i))² + (y_i - y*(t_i))²) / N )
/// ```
///
/// Returns `0.0` for an empty slice.
pub fn l2_error(samples: &[Sample], exact: impl Fn(f64) -> Pair) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_square_error: f64 = samples
        .iter()
        .map(|sample| {
            let diff = sample.state - exact(sample.time);
            diff.x * diff.x + diff.y * diff.y
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let count = samples.len() as f64;
    (sum_square_error / count).sqrt()
}

/// Solves `system` from `initial` on the solver's grid and returns the L2
/// error against the system's analytic solution.
///
/// The solver's initial values and right-hand side are replaced; its grid must
/// already be configured.
///
/// # Errors
///
/// Returns [`planar_core::Error::PreconditionViolation`] if the solver has no
/// grid.
pub fn solve_and_l2_error<'f, I, S>(
    solver: &mut OdeSolver<'f, I>,
    system: &'f S,
    initial: Pair,
) -> Result<f64, planar_core::Error>
where
    I: Integrator,
    S: planar_core::Rhs + ExactSolution,
{
    solver.set_initial_values(initial.x, initial.y);
    solver.set_rhs(system);
    solver.solve()?;

    let samples = solver.samples()?;
    let start = samples[0].time;
    Ok(l2_error(samples, |time| system.exact(initial, start, time)))
}
