use planar_core::{Integrator, Pair, Rhs, StepIntegrable};

/// Classical fixed-step fourth-order Runge-Kutta.
///
/// ```text
/// k1 = f(state_n, t_n)
/// k2 = f(state_n + k1 * dt/2, t_n + dt/2)
/// k3 = f(state_n + k2 * dt/2, t_n + dt/2)
/// k4 = f(state_n + k3 * dt, t_n + dt)
/// state_{n+1} = state_n + (k1/6 + k2/3 + k3/3 + k4/6) * dt
/// ```
///
/// The global error is `O(dt⁴)`, at the cost of four right-hand side
/// evaluations per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn name(&self) -> &'static str {
        "RK4"
    }

    fn order(&self) -> u32 {
        4
    }

    fn advance(&self, rhs: &dyn Rhs, state: Pair, time: f64, dt: f64) -> Pair {
        let half = 0.5 * dt;

        let k1 = rhs.derivative(state, time);
        let k2 = rhs.derivative(state.step(k1, half), time + half);
        let k3 = rhs.derivative(state.step(k2, half), time + half);
        let k4 = rhs.derivative(state.step(k3, dt), time + dt);

        state.step(k1 / 6.0 + k2 / 3.0 + k3 / 3.0 + k4 / 6.0, dt)
    }
}
