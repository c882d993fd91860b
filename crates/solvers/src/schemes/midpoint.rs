use planar_core::{Integrator, Pair, Rhs, StepIntegrable};

/// The explicit midpoint method, a second-order Runge-Kutta scheme.
///
/// ```text
/// k1 = f(state_n, t_n)
/// k2 = f(state_n + k1 * dt/2, t_n + dt/2)
/// state_{n+1} = state_n + k2 * dt
/// ```
///
/// The global error is `O(dt²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Midpoint;

impl Integrator for Midpoint {
    fn name(&self) -> &'static str {
        "midpoint"
    }

    fn order(&self) -> u32 {
        2
    }

    fn advance(&self, rhs: &dyn Rhs, state: Pair, time: f64, dt: f64) -> Pair {
        let half = 0.5 * dt;

        let k1 = rhs.derivative(state, time);
        let k2 = rhs.derivative(state.step(k1, half), time + half);

        state.step(k2, dt)
    }
}
