use std::{fmt, str::FromStr};

use planar_core::{Integrator, Pair, Rhs};
use thiserror::Error;

use super::{ForwardEuler, Midpoint, Rk4};

/// An integration scheme chosen at runtime.
///
/// Use `Method` when the scheme comes from configuration or user input; it
/// parses from `"euler"`, `"rk2"` (or `"midpoint"`), and `"rk4"`:
///
/// ```
/// use planar_core::Integrator;
/// use planar_solvers::Method;
///
/// let method: Method = "rk2".parse()?;
/// assert_eq!(method, Method::Midpoint);
/// assert_eq!(method.order(), 2);
/// # Ok::<(), planar_solvers::UnknownMethod>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    ForwardEuler,
    Midpoint,
    Rk4,
}

impl Method {
    /// Every available scheme, lowest order first.
    pub const ALL: [Method; 3] = [Method::ForwardEuler, Method::Midpoint, Method::Rk4];

    /// The short identifier accepted by [`FromStr`].
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::ForwardEuler => "euler",
            Self::Midpoint => "rk2",
            Self::Rk4 => "rk4",
        }
    }
}

impl Integrator for Method {
    fn name(&self) -> &'static str {
        match self {
            Self::ForwardEuler => ForwardEuler.name(),
            Self::Midpoint => Midpoint.name(),
            Self::Rk4 => Rk4.name(),
        }
    }

    fn order(&self) -> u32 {
        match self {
            Self::ForwardEuler => ForwardEuler.order(),
            Self::Midpoint => Midpoint.order(),
            Self::Rk4 => Rk4.order(),
        }
    }

    fn advance(&self, rhs: &dyn Rhs, state: Pair, time: f64, dt: f64) -> Pair {
        match self {
            Self::ForwardEuler => ForwardEuler.advance(rhs, state, time, dt),
            Self::Midpoint => Midpoint.advance(rhs, state, time, dt),
            Self::Rk4 => Rk4.advance(rhs, state, time, dt),
        }
    }
}

/// Error returned when parsing an unrecognized [`Method`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integration method `{0}`, expected one of: euler, rk2, midpoint, rk4")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" | "forward-euler" | "forward_euler" => Ok(Self::ForwardEuler),
            "rk2" | "midpoint" => Ok(Self::Midpoint),
            "rk4" => Ok(Self::Rk4),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        assert_eq!("euler".parse(), Ok(Method::ForwardEuler));
        assert_eq!("Forward_Euler".parse(), Ok(Method::ForwardEuler));
        assert_eq!("midpoint".parse(), Ok(Method::Midpoint));
        assert_eq!(" RK4 ".parse(), Ok(Method::Rk4));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = "rk45".parse::<Method>().unwrap_err();
        assert_eq!(err, UnknownMethod("rk45".to_string()));
    }

    #[test]
    fn keys_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }

    #[test]
    fn delegates_to_the_selected_scheme() {
        let growth = |v: Pair, _t: f64| v;
        let state = Pair::new(1.0, 2.0);

        assert_eq!(
            Method::Midpoint.advance(&growth, state, 0.0, 0.1),
            Midpoint.advance(&growth, state, 0.0, 0.1)
        );
        assert_eq!(
            Method::Rk4.advance(&growth, state, 0.0, 0.1),
            Rk4.advance(&growth, state, 0.0, 0.1)
        );
        assert_eq!(Method::ForwardEuler.name(), "forward Euler");
        assert_eq!(Method::ALL.map(|m| m.order()), [1, 2, 4]);
    }
}
