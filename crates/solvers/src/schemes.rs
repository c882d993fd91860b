mod forward_euler;
mod method;
mod midpoint;
mod rk4;

pub use forward_euler::ForwardEuler;
pub use method::{Method, UnknownMethod};
pub use midpoint::Midpoint;
pub use rk4::Rk4;
