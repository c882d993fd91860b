//! Fixed-step explicit integrators for two-dimensional initial value problems.
//!
//! An [`OdeSolver`] holds the problem configuration and the recorded trace;
//! the integrator it is built with decides how each step is taken.
//!
//! # Integrators
//!
//! - [`ForwardEuler`]: first order, one right-hand side evaluation per step
//! - [`Midpoint`]: second-order Runge-Kutta, two evaluations per step
//! - [`Rk4`]: classical fourth-order Runge-Kutta, four evaluations per step
//! - [`Method`]: any of the above, chosen at runtime
//!
//! None of the schemes check stability. Forward Euler in particular needs a
//! step size small relative to the system's time scales.
//!
//! # Example
//!
//! ```
//! use planar_core::Pair;
//! use planar_solvers::{ForwardEuler, OdeSolver};
//!
//! let decay = |v: Pair, t: f64| Pair::new(-5.0 * v.x, 2.0 * t);
//!
//! let mut solver = OdeSolver::new(ForwardEuler);
//! solver.set_initial_values(10.0, 0.0);
//! solver.set_grid_by_step(0.0, 0.01, 1.0)?;
//! solver.set_rhs(&decay);
//! solver.solve()?;
//!
//! assert_eq!(solver.time_trace()?.len(), 101);
//! # Ok::<(), planar_core::Error>(())
//! ```

mod schemes;
mod solver;

pub use schemes::{ForwardEuler, Method, Midpoint, Rk4, UnknownMethod};
pub use solver::OdeSolver;

/// A solver stepping with forward Euler.
pub type ForwardEulerSolver<'f> = OdeSolver<'f, ForwardEuler>;

/// A solver stepping with the midpoint method.
pub type MidpointSolver<'f> = OdeSolver<'f, Midpoint>;

/// A solver stepping with classical fourth-order Runge-Kutta.
pub type Rk4Solver<'f> = OdeSolver<'f, Rk4>;
