use planar_core::{Integrator, Pair, Rhs, StepIntegrable};

/// A first-order explicit integrator using the forward Euler method.
///
/// Applies the update rule:
///
/// ```text
/// state_{n+1} = state_n + f(state_n, t_n) * dt
/// ```
///
/// The global error is `O(dt)`. The scheme is only conditionally stable: for
/// `x' = -k x` it diverges once `|dt| > 2 / k`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn name(&self) -> &'static str {
        "forward Euler"
    }

    fn order(&self) -> u32 {
        1
    }

    fn advance(&self, rhs: &dyn Rhs, state: Pair, time: f64, dt: f64) -> Pair {
        state.step(rhs.derivative(state, time), dt)
    }
}
