//! Error-versus-step-size studies.
//!
//! A study solves the same problem on successively finer grids, doubling the
//! step count each time, and records the L2 error of each run against the
//! analytic solution. For a scheme of order `p`, halving the step divides the
//! error by about `2^p` once the step is small enough, which
//! [`Study::observed_orders`] makes visible.
//!
//! # Example
//!
//! ```
//! use planar_analysis::{convergence, systems::Circle};
//! use planar_solvers::Midpoint;
//!
//! let config = convergence::Config {
//!     min_steps: 256,
//!     max_steps: 1024,
//!     ..convergence::Config::default()
//! };
//! let study = convergence::run(Midpoint, &Circle, &config)?;
//!
//! assert_eq!(study.rows().len(), 3);
//! for order in study.observed_orders() {
//!     assert!((order - 2.0).abs() < 0.1);
//! }
//! # Ok::<(), planar_analysis::Error>(())
//! ```

mod config;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use planar_core::{Integrator, Rhs, format_significant};
use planar_solvers::OdeSolver;

use crate::{Error, solve_and_l2_error, systems::ExactSolution};

pub use config::Config;

/// Significant digits used when writing error tables.
const DIGITS: usize = 10;

/// One run of a study.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    /// Number of steps over the interval.
    pub steps: usize,

    /// Signed step size of the run.
    pub step_size: f64,

    /// L2 error of the run against the analytic solution.
    pub error: f64,
}

/// The result of a convergence study.
#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    scheme: &'static str,
    order: u32,
    rows: Vec<Row>,
}

impl Study {
    /// The name of the integration scheme.
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        self.scheme
    }

    /// The theoretical order of the scheme.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// The runs, coarsest first.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns `log2(error_i / error_{i+1})` for each pair of consecutive
    /// runs.
    ///
    /// Each value estimates the order of the scheme at that resolution.
    #[must_use]
    pub fn observed_orders(&self) -> Vec<f64> {
        self.rows
            .windows(2)
            .map(|pair| (pair[0].error / pair[1].error).log2())
            .collect()
    }

    /// Writes one `step_size<TAB>error` line per run to `writer`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from the writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for row in &self.rows {
            writeln!(
                writer,
                "{}\t{}",
                format_significant(row.step_size.abs(), DIGITS),
                format_significant(row.error, DIGITS),
            )?;
        }
        writer.flush()
    }

    /// Writes the error table to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_table(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_error)?;
        self.write_to(BufWriter::new(file)).map_err(io_error)?;

        log::debug!(
            "wrote {} {} error rows to {}",
            self.rows.len(),
            self.scheme,
            path.display()
        );
        Ok(())
    }
}

/// Runs a convergence study of `integrator` on `system`.
///
/// Step counts start at `config.min_steps` and double while they do not exceed
/// `config.max_steps`.
///
/// # Errors
///
/// Returns [`Error::InvalidStudy`] if the configuration is invalid, or
/// [`Error::Solver`] if a grid cannot be built for one of the step counts.
pub fn run<I, S>(integrator: I, system: &S, config: &Config) -> Result<Study, Error>
where
    I: Integrator,
    S: Rhs + ExactSolution,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidStudy { reason })?;

    let scheme = integrator.name();
    let order = integrator.order();
    let mut solver = OdeSolver::new(integrator);
    let mut rows = Vec::new();

    let mut steps = config.min_steps;
    while steps <= config.max_steps {
        solver.set_grid_by_count(config.start, steps, config.end)?;
        let error = solve_and_l2_error(&mut solver, system, config.initial)?;
        let step_size = solver.grid().map_or(f64::NAN, planar_core::Grid::step);

        log::debug!("{scheme}: {steps} steps, error {error:e}");
        rows.push(Row {
            steps,
            step_size,
            error,
        });

        match steps.checked_mul(2) {
            Some(next) => steps = next,
            None => break,
        }
    }

    Ok(Study {
        scheme,
        order,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::TAU;

    use approx::assert_relative_eq;
    use planar_core::Pair;
    use planar_solvers::{ForwardEuler, Method, Rk4};

    use crate::systems::{Circle, DecoupledExponentialQuadratic};

    fn small(min_steps: usize, max_steps: usize) -> Config {
        Config {
            min_steps,
            max_steps,
            ..Config::default()
        }
    }

    #[test]
    fn doubles_step_count() {
        let study = run(ForwardEuler, &Circle, &small(3, 48)).unwrap();

        let steps: Vec<usize> = study.rows().iter().map(|row| row.steps).collect();
        assert_eq!(steps, vec![3, 6, 12, 24, 48]);
        assert_eq!(study.scheme(), "forward Euler");
        assert_eq!(study.order(), 1);

        for row in study.rows() {
            #[allow(clippy::cast_precision_loss)]
            let expected = TAU / row.steps as f64;
            assert_relative_eq!(row.step_size, expected);
        }
    }

    #[test]
    fn observed_orders_match_theory() {
        for (method, min_steps) in [
            (Method::ForwardEuler, 1024),
            (Method::Midpoint, 256),
            (Method::Rk4, 128),
        ] {
            let study = run(method, &Circle, &small(min_steps, min_steps * 4)).unwrap();

            let expected = f64::from(study.order());
            for order in study.observed_orders() {
                assert!(
                    (order - expected).abs() < 0.15,
                    "{method}: observed order {order}"
                );
            }
        }
    }

    #[test]
    fn works_with_other_systems() {
        let config = Config {
            start: 0.0,
            end: 1.0,
            min_steps: 100,
            max_steps: 400,
            initial: Pair::new(10.0, 0.0),
        };

        let study = run(Rk4, &DecoupledExponentialQuadratic, &config).unwrap();

        assert_eq!(study.rows().len(), 3);
        assert!(study.rows().iter().all(|row| row.error < 1e-4));
    }

    #[test]
    fn rejects_invalid_config() {
        let err = run(Rk4, &Circle, &small(0, 8)).unwrap_err();
        assert!(matches!(err, Error::InvalidStudy { .. }));

        let err = run(Rk4, &Circle, &small(16, 8)).unwrap_err();
        assert!(matches!(err, Error::InvalidStudy { .. }));
    }

    #[test]
    fn writes_error_table() {
        let study = run(Rk4, &Circle, &small(16, 64)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors_rk4.txt");
        study.write_table(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("0.3926990817\t"));

        for (line, row) in lines.iter().zip(study.rows()) {
            let (step, error) = line.split_once('\t').unwrap();
            assert_relative_eq!(step.parse::<f64>().unwrap(), row.step_size, max_relative = 1e-9);
            assert_relative_eq!(error.parse::<f64>().unwrap(), row.error, max_relative = 1e-9);
        }
    }

    #[test]
    fn write_table_reports_path() {
        let study = run(Rk4, &Circle, &small(16, 16)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("errors.txt");
        let err = study.write_table(&path).unwrap_err();

        match err {
            Error::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
