//! Shared helpers for the demo programs in `examples/`.
//!
//! Run a demo with `cargo run -p planar-demos --example <name>`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use planar_analysis::convergence;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid study configuration: {0}")]
    Invalid(&'static str),
}

/// Configuration file for the `convergence` demo.
///
/// ```toml
/// methods = ["euler", "rk2", "rk4"]
/// output_dir = "out"
///
/// [study]
/// min_steps = 1
/// max_steps = 4194304
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub methods: Vec<String>,
    pub output_dir: PathBuf,
    pub study: convergence::Config,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            methods: vec!["euler".into(), "rk2".into(), "rk4".into()],
            output_dir: PathBuf::from("."),
            study: convergence::Config::default(),
        }
    }
}

impl DemoConfig {
    /// Loads the configuration from `path`, or returns the default when no
    /// path is given.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or if
    /// the study configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|err| match err {
            ParseError::Toml(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            ParseError::Invalid(reason) => ConfigError::Invalid(reason),
        })
    }

    fn parse(text: &str) -> Result<Self, ParseError> {
        let config: Self = toml::from_str(text).map_err(ParseError::Toml)?;
        config.study.validate().map_err(ParseError::Invalid)?;
        Ok(config)
    }

    /// Returns the path for an output file named `name`.
    #[must_use]
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

enum ParseError {
    Toml(toml::de::Error),
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn missing_path_gives_default() {
        let config = DemoConfig::load(None).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.output_path("errors_rk4.txt"), Path::new("./errors_rk4.txt"));
    }

    #[test]
    fn loads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            methods = ["rk4"]

            [study]
            min_steps = 8
            max_steps = 64
            "#
        )
        .unwrap();

        let config = DemoConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.methods, vec!["rk4".to_string()]);
        assert_eq!(config.study.min_steps, 8);
        assert_eq!(config.study.max_steps, 64);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn rejects_invalid_study() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[study]\nmin_steps = 0").unwrap();

        let err = DemoConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn reports_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "methods = [").unwrap();

        let err = DemoConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
