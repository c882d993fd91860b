/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the integration schemes advance a state via
/// `derivative * delta`, where the derivative is with respect to `Delta`.
/// Stage estimates of the Runge-Kutta schemes are built the same way, by
/// stepping the current state with a partial step size.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}
