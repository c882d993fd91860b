//! Reference systems and accuracy studies for planar integrators.
//!
//! # Modules
//!
//! - [`systems`]: standard right-hand sides and their analytic solutions
//! - [`convergence`]: error-versus-step-size studies over repeated halving
//!
//! [`l2_error`] and [`solve_and_l2_error`] compare a trace against an analytic
//! solution after the fact; nothing here estimates error during a solve.
//!
//! # Features
//!
//! - `serde`: derives `Deserialize` for [`convergence::Config`] and
//!   `Serialize` for [`convergence::Row`].

mod error;
mod l2;

pub mod convergence;
pub mod systems;

pub use error::Error;
pub use l2::{l2_error, solve_and_l2_error};
