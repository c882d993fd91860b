use planar_core::Pair;

/// x' = -y, y' = x: circles around the origin.
pub fn circle(v: Pair, _t: f64) -> Pair {
    Pair::new(-v.y, v.x)
}

/// x' = -5x, y' = 2t: x = x0 e^{-5t}, y = y0 + t².
pub fn decoupled(v: Pair, t: f64) -> Pair {
    Pair::new(-5.0 * v.x, 2.0 * t)
}
