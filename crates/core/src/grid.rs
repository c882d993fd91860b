use crate::{Error, Sample};

/// Largest accepted squared mismatch between the requested end time and the
/// end time reached by whole steps.
const END_TIME_TOLERANCE: f64 = 1e-15;

/// A fixed time discretization: `steps` steps of size `step` from `start`.
///
/// A grid can only be built through [`Grid::by_step`] or [`Grid::by_count`],
/// which guarantee `steps > 0` and a finite, non-zero `step`. The step may be
/// negative, in which case the integration runs backward in time.
///
/// Sample times are always computed as `start + i * step` so that rounding
/// error does not accumulate over long runs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    start: f64,
    step: f64,
    steps: usize,
}

impl Grid {
    /// The largest step count whose `steps + 1` samples fit in a `Vec`.
    pub const MAX_STEPS: usize = isize::MAX as usize / size_of::<Sample>() - 1;

    /// Builds a grid from a start time, step size, and end time.
    ///
    /// The step count is `round((end - start) / step)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if:
    /// - the step count would not be positive (the step points away from
    ///   `end`, or the interval is empty)
    /// - the step count exceeds [`Grid::MAX_STEPS`]
    /// - whole steps do not land on `end`, that is the squared difference
    ///   between `start + step * steps` and `end` exceeds `1e-15`
    pub fn by_step(start: f64, step: f64, end: f64) -> Result<Self, Error> {
        if !start.is_finite() || !step.is_finite() || !end.is_finite() {
            return Err(Error::config("grid bounds and step must be finite"));
        }

        let approximate_steps = ((end - start) / step).round();

        // Also rejects NaN from a zero step over an empty interval.
        if !(approximate_steps >= 1.0) {
            return Err(Error::config("time step has the wrong sign"));
        }

        // Saturates, so huge counts land above the limit.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = approximate_steps as usize;
        if steps > Self::MAX_STEPS {
            return Err(Error::config("too many time steps"));
        }

        let mismatch = start + step * approximate_steps - end;
        if mismatch * mismatch > END_TIME_TOLERANCE {
            return Err(Error::config("time step does not divide the time interval"));
        }

        log::debug!("grid by step: start={start}, step={step}, steps={steps}");

        Ok(Self { start, step, steps })
    }

    /// Builds a grid from a start time, step count, and end time.
    ///
    /// The step size is `(end - start) / steps` and is negative when
    /// `end < start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `steps` is zero or above
    /// [`Grid::MAX_STEPS`], or if the time interval is empty or too wide for
    /// a finite step.
    pub fn by_count(start: f64, steps: usize, end: f64) -> Result<Self, Error> {
        if steps == 0 {
            return Err(Error::config("number of time steps should be positive"));
        }
        if steps > Self::MAX_STEPS {
            return Err(Error::config("too many time steps"));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::config("grid bounds must be finite"));
        }

        #[allow(clippy::cast_precision_loss)]
        let step = (end - start) / steps as f64;
        if !step.is_finite() {
            return Err(Error::config("time interval is too wide"));
        }
        if step == 0.0 {
            return Err(Error::config("time interval is empty"));
        }

        log::debug!("grid by count: start={start}, step={step}, steps={steps}");

        Ok(Self { start, step, steps })
    }

    /// The time of the first sample.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The signed step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The number of steps; a solve records `steps + 1` samples.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The time of sample `index`, `start + index * step`.
    #[must_use]
    pub fn time_at(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let index = index as f64;
        self.start + index * self.step
    }

    /// The time of the last sample.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.time_at(self.steps)
    }
}
