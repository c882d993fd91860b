use std::f64::consts::TAU;

use planar_core::Pair;

/// Configuration for a convergence study.
///
/// The default integrates one full circuit of the unit circle, `[0, 2π]`
/// from `(1, 0)`, with step counts from 1 up to 2²².
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Config {
    pub start: f64,
    pub end: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub initial: Pair,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: TAU,
            min_steps: 1,
            max_steps: 1 << 22,
            initial: Pair::new(1.0, 0.0),
        }
    }
}

impl Config {
    /// Validates that the interval and step counts describe at least one run.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is empty or non-finite, or if the
    /// step count range is empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err("start and end must be finite");
        }
        if self.start == self.end {
            return Err("interval must not be empty");
        }
        if self.min_steps == 0 {
            return Err("min_steps must be positive");
        }
        if self.max_steps < self.min_steps {
            return Err("max_steps must be at least min_steps");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inconsistent_values() {
        let base = Config::default();

        let empty = Config { end: 0.0, ..base };
        assert!(empty.validate().is_err());

        let infinite = Config {
            end: f64::INFINITY,
            ..base
        };
        assert!(infinite.validate().is_err());

        let no_steps = Config {
            min_steps: 0,
            ..base
        };
        assert!(no_steps.validate().is_err());

        let inverted = Config {
            min_steps: 64,
            max_steps: 32,
            ..base
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn backward_interval_is_valid() {
        let backward = Config {
            start: 1.0,
            end: -1.0,
            ..Config::default()
        };
        assert_eq!(backward.validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            min_steps = 16
            max_steps = 256

            [initial]
            x = 0.0
            y = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.min_steps, 16);
        assert_eq!(config.max_steps, 256);
        assert_eq!(config.initial, Pair::new(0.0, 2.0));
        assert_eq!(config.end, TAU);
    }
}
