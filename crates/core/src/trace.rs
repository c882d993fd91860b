use std::{
    collections::TryReserveError,
    io::{self, Write},
};

use crate::{Error, Pair, format_significant};

/// Significant digits used when writing trace files.
const DIGITS: usize = 10;

/// A recorded `(time, state)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub state: Pair,
}

/// The samples recorded by a solve, in step order.
///
/// Index 0 holds the initial condition and index `N` the state after `N`
/// steps. Times and states are stored together, so the time, x, and y
/// projections always have the same length.
///
/// Every read access fails with [`Error::NoSolutionAvailable`] while the trace
/// is empty. The projections return owned copies that are independent of any
/// later solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    samples: Vec<Sample>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample.
    pub fn push(&mut self, time: f64, state: Pair) {
        self.samples.push(Sample { time, state });
    }

    /// Reserves room for at least `additional` more samples.
    ///
    /// # Errors
    ///
    /// Returns the allocation error if the capacity overflows or the
    /// allocator fails.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.samples.try_reserve(additional)
    }

    /// The number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recent sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Returns all samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if the trace is empty.
    pub fn samples(&self) -> Result<&[Sample], Error> {
        if self.samples.is_empty() {
            return Err(Error::NoSolutionAvailable);
        }
        Ok(&self.samples)
    }

    /// Returns a copy of the sample times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if the trace is empty.
    pub fn times(&self) -> Result<Vec<f64>, Error> {
        self.project(|sample| sample.time)
    }

    /// Returns a copy of the x component of every sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if the trace is empty.
    pub fn xs(&self) -> Result<Vec<f64>, Error> {
        self.project(|sample| sample.state.x)
    }

    /// Returns a copy of the y component of every sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if the trace is empty.
    pub fn ys(&self) -> Result<Vec<f64>, Error> {
        self.project(|sample| sample.state.y)
    }

    /// Writes one line per sample: time, x, and y separated by tabs, each
    /// with 10 significant digits. There is no header row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolutionAvailable`] if the trace is empty, or
    /// [`Error::Write`] if the writer fails.
    pub fn write_tsv<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let samples = self.samples()?;
        write_rows(&mut writer, samples).map_err(Error::Write)
    }

    fn project(&self, f: impl Fn(&Sample) -> f64) -> Result<Vec<f64>, Error> {
        Ok(self.samples()?.iter().map(f).collect())
    }
}

fn write_rows<W: Write>(writer: &mut W, samples: &[Sample]) -> io::Result<()> {
    for sample in samples {
        writeln!(
            writer,
            "{}\t{}\t{}",
            format_significant(sample.time, DIGITS),
            format_significant(sample.state.x, DIGITS),
            format_significant(sample.state.y, DIGITS),
        )?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    fn fake_trace() -> Trace {
        let mut trace = Trace::new();
        for i in 0..10 {
            let i = f64::from(i);
            trace.push(0.1 * i, Pair::new(42.0 * i, 4.0));
        }
        trace
    }

    #[test]
    fn empty_trace_has_no_solution() {
        let trace = Trace::new();

        assert!(matches!(trace.times(), Err(Error::NoSolutionAvailable)));
        assert!(matches!(trace.xs(), Err(Error::NoSolutionAvailable)));
        assert!(matches!(trace.ys(), Err(Error::NoSolutionAvailable)));
        assert!(matches!(trace.samples(), Err(Error::NoSolutionAvailable)));
        assert!(matches!(
            trace.write_tsv(Vec::new()),
            Err(Error::NoSolutionAvailable)
        ));
    }

    #[test]
    fn projections_copy_out_samples() {
        let trace = fake_trace();

        let times = trace.times().unwrap();
        assert_eq!(times.len(), 10);
        assert_abs_diff_eq!(times[9], 0.9, epsilon = 1e-15);

        let xs = trace.xs().unwrap();
        assert_abs_diff_eq!(xs[9], 42.0 * 9.0, epsilon = 1e-15);

        let ys = trace.ys().unwrap();
        assert_abs_diff_eq!(ys[5], 4.0, epsilon = 1e-15);
    }

    #[test]
    fn reserve_reports_overflow() {
        let mut trace = fake_trace();
        assert!(trace.try_reserve(16).is_ok());
        assert!(trace.try_reserve(usize::MAX).is_err());
        assert_eq!(trace.len(), 10);
    }

    #[test]
    fn writes_tab_separated_rows() {
        let mut trace = Trace::new();
        trace.push(0.0, Pair::new(1.0, 0.0));
        trace.push(0.5, Pair::new(1.5, 1.0));
        trace.push(std::f64::consts::TAU, Pair::new(-2.5e-7, 12_345_678_901.0));

        let mut buffer = Vec::new();
        trace.write_tsv(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "0\t1\t0\n0.5\t1.5\t1\n6.283185307\t-2.5e-07\t1.23456789e+10\n"
        );
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::StorageFull.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_failure_is_a_write_error() {
        let err = fake_trace().write_tsv(FullDisk).unwrap_err();

        assert!(matches!(err, Error::Write(_)));
        assert_eq!(err.category(), "OdePost");
        assert_eq!(err.to_string(), "failed to write trace");
    }
}
