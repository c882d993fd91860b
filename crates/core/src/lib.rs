//! Core types for integrating two-dimensional initial value problems.
//!
//! This crate defines the shared abstractions that the solvers and analysis
//! crates build on:
//!
//! - [`Pair`]: the two-component state `(x, y)` of the system
//! - [`StepIntegrable`]: stepping a state by `derivative * delta`
//! - [`Rhs`]: the right-hand side `(state, time) -> derivative` of the system
//! - [`Integrator`]: a single-step explicit integration scheme
//! - [`Grid`]: a validated fixed time discretization
//! - [`Trace`]: the recorded `(time, state)` samples of a completed run
//! - [`Error`]: the structured error shared by every crate in the workspace

mod error;
mod format;
mod grid;
mod integrator;
mod pair;
mod rhs;
mod step;
mod trace;

pub use error::Error;
pub use format::format_significant;
pub use grid::Grid;
pub use integrator::Integrator;
pub use pair::Pair;
pub use rhs::Rhs;
pub use step::StepIntegrable;
pub use trace::{Sample, Trace};
