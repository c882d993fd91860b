//! Standard planar systems used to check integrators.
//!
//! Each system is a unit or parameter struct implementing [`Rhs`], so it can
//! be handed to a solver by reference. Systems with a closed-form solution
//! also implement [`ExactSolution`].

use planar_core::{Pair, Rhs};

/// The analytic solution of a system.
pub trait ExactSolution {
    /// Returns the exact state at `time` for the trajectory passing through
    /// `initial` at `start`.
    fn exact(&self, initial: Pair, start: f64, time: f64) -> Pair;
}

/// Rotation about the origin: `x' = -y`, `y' = x`.
///
/// Trajectories are circles, `x² + y² = const`, traversed once every `2π`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle;

impl Rhs for Circle {
    fn derivative(&self, state: Pair, _time: f64) -> Pair {
        Pair::new(-state.y, state.x)
    }
}

impl ExactSolution for Circle {
    fn exact(&self, initial: Pair, start: f64, time: f64) -> Pair {
        let (sin, cos) = (time - start).sin_cos();
        Pair::new(
            initial.x * cos - initial.y * sin,
            initial.x * sin + initial.y * cos,
        )
    }
}

/// Exponential decay in x and a quadratic ramp in y: `x' = -5x`, `y' = 2t`.
///
/// The solution is `x = x0 e^{-5 (t - t0)}` and `y = y0 + t² - t0²`. Forward
/// Euler is unstable on the x component for steps larger than `2/5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoupledExponentialQuadratic;

impl DecoupledExponentialQuadratic {
    /// The decay rate of the x component.
    pub const RATE: f64 = 5.0;
}

impl Rhs for DecoupledExponentialQuadratic {
    fn derivative(&self, state: Pair, time: f64) -> Pair {
        Pair::new(-Self::RATE * state.x, 2.0 * time)
    }
}

impl ExactSolution for DecoupledExponentialQuadratic {
    fn exact(&self, initial: Pair, start: f64, time: f64) -> Pair {
        Pair::new(
            initial.x * (-Self::RATE * (time - start)).exp(),
            initial.y + time * time - start * start,
        )
    }
}

/// The Van der Pol oscillator in Liénard form:
///
/// ```text
/// x' = mu (x - x³/3 - y)
/// y' = x / mu
/// ```
///
/// Large `mu` gives relaxation oscillations with fast jumps between slow
/// branches, a useful stress test for fixed-step schemes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanDerPol {
    pub mu: f64,
}

impl Default for VanDerPol {
    fn default() -> Self {
        Self { mu: 7.0 }
    }
}

impl Rhs for VanDerPol {
    fn derivative(&self, state: Pair, _time: f64) -> Pair {
        let Pair { x, y } = state;
        Pair::new(self.mu * (x - x.powi(3) / 3.0 - y), x / self.mu)
    }
}
