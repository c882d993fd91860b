use crate::Pair;

/// The right-hand side of a planar system `x' = f(x, y, t)`, `y' = g(x, y, t)`.
///
/// A right-hand side maps the current state and time to the state derivative.
/// It must be a pure function of its inputs: the integrators call it with the
/// most recently recorded sample and with internal stage estimates, up to four
/// times per step, and expect the same answer for the same arguments.
///
/// Any `Fn(Pair, f64) -> Pair` is a right-hand side, so plain functions and
/// closures work directly:
///
/// ```
/// use planar_core::{Pair, Rhs};
///
/// fn decay(v: Pair, _t: f64) -> Pair {
///     v * -1.0
/// }
///
/// assert_eq!(decay.derivative(Pair::new(2.0, 4.0), 0.0), Pair::new(-2.0, -4.0));
/// ```
pub trait Rhs {
    /// Returns the derivative of `state` at `time`.
    fn derivative(&self, state: Pair, time: f64) -> Pair;
}

impl<F> Rhs for F
where
    F: Fn(Pair, f64) -> Pair,
{
    fn derivative(&self, state: Pair, time: f64) -> Pair {
        self(state, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shear {
        rate: f64,
    }

    impl Rhs for Shear {
        fn derivative(&self, state: Pair, _time: f64) -> Pair {
            Pair::new(self.rate * state.y, 0.0)
        }
    }

    #[test]
    fn closures_are_right_hand_sides() {
        let rhs = |v: Pair, t: f64| Pair::new(-5.0 * v.x, 2.0 * t);

        assert_eq!(
            rhs.derivative(Pair::new(1.0, 100.0), 7.0),
            Pair::new(-5.0, 14.0)
        );
        assert_eq!(
            rhs.derivative(Pair::new(-2.0, 100.0), 8.0),
            Pair::new(10.0, 16.0)
        );
    }

    #[test]
    fn structs_are_right_hand_sides() {
        let rhs: &dyn Rhs = &Shear { rate: 3.0 };
        assert_eq!(rhs.derivative(Pair::new(1.0, 2.0), 0.0), Pair::new(6.0, 0.0));
    }
}
