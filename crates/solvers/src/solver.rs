use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use planar_core::{Error, Grid, Integrator, Pair, Rhs, Sample, Trace};

/// A two-dimensional initial value problem and the trace of its last solve.
///
/// `OdeSolver` owns the configuration (initial values, time grid, and a
/// borrowed right-hand side) and the recorded trace. The stepping algorithm is
/// the integrator `I`, so the same configuration surface serves every scheme:
///
/// ```
/// use planar_core::Pair;
/// use planar_solvers::{OdeSolver, Rk4};
///
/// let circle = |v: Pair, _t: f64| Pair::new(-v.y, v.x);
///
/// let mut solver = OdeSolver::new(Rk4);
/// solver.set_initial_values(1.0, 0.0);
/// solver.set_grid_by_count(0.0, 1000, std::f64::consts::TAU)?;
/// solver.set_rhs(&circle);
/// solver.solve()?;
///
/// let xs = solver.x_trace()?;
/// assert!((xs[1000] - 1.0).abs() < 1e-8);
/// # Ok::<(), planar_core::Error>(())
/// ```
///
/// Configuration calls may be repeated; the latest call wins. Each call to
/// [`solve`](OdeSolver::solve) rebuilds the trace from scratch.
pub struct OdeSolver<'f, I> {
    integrator: I,
    initial: Pair,
    grid: Option<Grid>,
    rhs: Option<&'f dyn Rhs>,
    trace: Trace,
}

impl<'f, I: Integrator> OdeSolver<'f, I> {
    /// Creates an unconfigured solver using `integrator` to take steps.
    ///
    /// The initial values default to `(0, 0)`; the grid and right-hand side
    /// are unset.
    #[must_use]
    pub fn new(integrator: I) -> Self {
        Self {
            integrator,
            initial: Pair::default(),
            grid: None,
            rhs: None,
            trace: Trace::new(),
        }
    }

    /// Returns the stepping scheme.
    pub fn integrator(&self) -> &I {
        &self.integrator
    }

    /// Sets the state at the start time.
    pub fn set_initial_values(&mut self, x: f64, y: f64) {
        self.initial = Pair::new(x, y);
    }

    /// Returns the configured initial state.
    pub fn initial_values(&self) -> Pair {
        self.initial
    }

    /// Configures the grid from a start time, step size, and end time.
    ///
    /// See [`Grid::by_step`]. On error the previous grid is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the step points away from
    /// `end` or does not divide the interval into whole steps.
    pub fn set_grid_by_step(&mut self, start: f64, step: f64, end: f64) -> Result<(), Error> {
        self.grid = Some(Grid::by_step(start, step, end)?);
        Ok(())
    }

    /// Configures the grid from a start time, step count, and end time.
    ///
    /// See [`Grid::by_count`]. On error the previous grid is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `steps` is zero or the
    /// interval is empty.
    pub fn set_grid_by_count(&mut self, start: f64, steps: usize, end: f64) -> Result<(), Error> {
        self.grid = Some(Grid::by_count(start, steps, end)?);
        Ok(())
    }

    /// Installs an already validated grid.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = Some(grid);
    }

    /// Returns the configured grid, if any.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Sets the right-hand side, replacing any previous one.
    pub fn set_rhs(&mut self, rhs: &'f dyn Rhs) {
        self.rhs = Some(rhs);
    }

    /// Integrates from the initial values over the configured grid.
    ///
    /// The trace is rebuilt from scratch: sample 0 is the initial state at the
    /// start time, and sample `i` is the state after `i` steps at
    /// `start + i * step`. States accumulate step by step; times do not.
    ///
    /// The previous trace is only replaced once the new one is complete, so a
    /// failed call leaves the last successful result readable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if no grid or no right-hand
    /// side has been set, or if the samples of the grid cannot be allocated.
    pub fn solve(&mut self) -> Result<(), Error> {
        let grid = self.grid.ok_or(Error::PreconditionViolation {
            reason: "the time grid is not configured",
        })?;
        let rhs = self.rhs.ok_or(Error::PreconditionViolation {
            reason: "the right-hand side function is not set",
        })?;

        log::debug!(
            "{} solve: {} steps of {} from t={}",
            self.integrator.name(),
            grid.steps(),
            grid.step(),
            grid.start(),
        );

        let mut trace = Trace::new();
        grid.steps()
            .checked_add(1)
            .and_then(|samples| trace.try_reserve(samples).ok())
            .ok_or(Error::PreconditionViolation {
                reason: "the trace does not fit in memory",
            })?;

        let mut state = self.initial;
        let mut time = grid.start();
        trace.push(time, state);

        for i in 1..=grid.steps() {
            state = self.integrator.advance(rhs, state, time, grid.step());
            time = grid.time_at(i);
            trace.push(time, state);
        }
        self.trace = trace;

        if state.is_finite() {
            log::debug!("{} solve finished at t={time}", self.integrator.name());
        } else {
            log::warn!(
                "{} solve produced a non-finite state at t={time}; the step size may be outside the stability region",
                self.integrator.name(),
            );
        }

        Ok(())
    }

    /// Returns a copy of the sample times of the last solve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if there has been no successful
    /// solve.
    pub fn time_trace(&self) -> Result<Vec<f64>, Error> {
        self.trace.times()
    }

    /// Returns a copy of the x values of the last solve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if there has been no successful
    /// solve.
    pub fn x_trace(&self) -> Result<Vec<f64>, Error> {
        self.trace.xs()
    }

    /// Returns a copy of the y values of the last solve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if there has been no successful
    /// solve.
    pub fn y_trace(&self) -> Result<Vec<f64>, Error> {
        self.trace.ys()
    }

    /// Borrows the samples of the last solve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if there has been no successful
    /// solve.
    pub fn samples(&self) -> Result<&[Sample], Error> {
        self.trace.samples()
    }

    /// Borrows the full trace, which may be empty.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Writes the trace to `path` as tab-separated `time`, `x`, `y` columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if there has been no successful
    /// solve, or [`Error::Io`] if the file cannot be created or written.
    pub fn dump_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();

        // Checked first so a missing solution never creates an empty file.
        self.trace.samples()?;

        let file = File::create(path).map_err(|source| Error::io(path, source))?;
        self.trace
            .write_tsv(BufWriter::new(file))
            .map_err(|err| match err {
                Error::Write(source) => Error::io(path, source),
                other => other,
            })?;

        log::debug!("wrote {} samples to {}", self.trace.len(), path.display());
        Ok(())
    }

    /// Writes the trace to `writer` in the same format as
    /// [`dump_to_file`](OdeSolver::dump_to_file).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if there has been no successful
    /// solve, or [`Error::Write`] if writing fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), Error> {
        self.trace.write_tsv(writer)
    }
}

impl<I: Integrator + Default> Default for OdeSolver<'_, I> {
    fn default() -> Self {
        Self::new(I::default())
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for OdeSolver<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdeSolver")
            .field("integrator", &self.integrator)
            .field("initial", &self.initial)
            .field("grid", &self.grid)
            .field("rhs", &self.rhs.map(|_| "<rhs>"))
            .field("samples", &self.trace.len())
            .finish()
    }
}
