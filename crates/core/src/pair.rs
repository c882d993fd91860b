use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

use crate::StepIntegrable;

/// The two coupled state variables of a planar system.
///
/// Named fields keep right-hand sides readable:
///
/// ```
/// use planar_core::Pair;
///
/// let circle = |v: Pair, _t: f64| Pair::new(-v.y, v.x);
/// assert_eq!(circle(Pair::new(1.0, 0.0), 0.0), Pair::new(0.0, 1.0));
/// ```
///
/// `Pair` doubles as the derivative type, so the arithmetic needed by the
/// integration schemes (sums, scaling by a step size, element-wise products
/// and quotients) is available directly on it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    pub x: f64,
    pub y: f64,
}

impl Pair {
    /// Creates a pair from its two components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the Euclidean length `sqrt(x² + y²)`.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Pair {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Pair {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Pair {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Pair {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Pair {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Pair> for f64 {
    type Output = Pair;

    fn mul(self, rhs: Pair) -> Pair {
        rhs * self
    }
}

/// Element-wise product.
impl Mul for Pair {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl MulAssign for Pair {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl Div<f64> for Pair {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Element-wise quotient `self / rhs`.
impl Div for Pair {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// A pair is its own derivative with respect to time.
impl StepIntegrable<f64> for Pair {
    type Derivative = Pair;

    fn step(&self, derivative: Pair, delta: f64) -> Self {
        *self + derivative * delta
    }
}
