use crate::{Pair, Rhs};

/// A fixed-step explicit integration scheme.
///
/// An `Integrator` advances a state by one step of size `dt`, using only the
/// right-hand side and the state and time at the start of the step. The
/// solver drives it over a [`Grid`](crate::Grid), records each returned state
/// in a [`Trace`](crate::Trace), and computes the sample times itself, so
/// implementations never accumulate time.
///
/// `dt` may be negative, which integrates backward in time.
///
/// # Example Implementations
///
/// The `planar-solvers` crate provides forward Euler, the second-order
/// midpoint Runge-Kutta method, and classical fourth-order Runge-Kutta.
pub trait Integrator {
    /// A short name for the scheme, used in diagnostics.
    fn name(&self) -> &'static str;

    /// The order of the global error, `O(dt^order)`.
    fn order(&self) -> u32;

    /// Returns the state one step of size `dt` after `state` at `time`.
    fn advance(&self, rhs: &dyn Rhs, state: Pair, time: f64, dt: f64) -> Pair;
}

impl<I: Integrator + ?Sized> Integrator for &I {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn order(&self) -> u32 {
        (**self).order()
    }

    fn advance(&self, rhs: &dyn Rhs, state: Pair, time: f64, dt: f64) -> Pair {
        (**self).advance(rhs, state, time, dt)
    }
}
