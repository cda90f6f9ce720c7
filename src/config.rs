//! Run configuration.
//!
//! Defaults, then `TUI_LIFE_*` environment variables, then command-line flags.
//! Environment values that do not parse fall back to the default; bad flags are
//! errors reported before the terminal is touched.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::types::{DEFAULT_DENSITY, DEFAULT_FRAMERATE};

pub const USAGE: &str = "\
Usage: tui-life [OPTIONS]

Options:
  -f, --framerate <FPS>   Target frames per second (default 15)
  -d, --debug             Show frame time, generation and population below the board
      --density <D>       Share of cells alive at start, 0.0 to 1.0 (default 0.1)
      --seed <N>          Seed for the initial board
      --log <PATH>        Write logs to PATH (filter with RUST_LOG)
  -h, --help              Print this help

Environment:
  TUI_LIFE_FRAMERATE, TUI_LIFE_DEBUG, TUI_LIFE_DENSITY, TUI_LIFE_SEED, TUI_LIFE_LOG

Press Ctrl-C to quit.";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("frame rate must be a positive number (got {0})")]
    InvalidFramerate(f64),
    #[error("density must be between 0.0 and 1.0 (got {0})")]
    InvalidDensity(f64),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Run(LifeConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub framerate: f64,
    pub debug: bool,
    pub density: f64,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            framerate: DEFAULT_FRAMERATE,
            debug: false,
            density: DEFAULT_DENSITY,
            seed: None,
            log_path: None,
        }
    }
}

impl LifeConfig {
    /// Defaults overridden by `TUI_LIFE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let framerate = lookup("TUI_LIFE_FRAMERATE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.framerate);

        let debug = lookup("TUI_LIFE_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.debug);

        let density = lookup("TUI_LIFE_DENSITY")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.density);

        let seed = lookup("TUI_LIFE_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("TUI_LIFE_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            framerate,
            debug,
            density,
            seed,
            log_path,
        }
    }

    /// Apply command-line flags (without the program name) on top of `self`.
    pub fn with_args<I>(mut self, args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg, None),
            };

            let mut value = |flag: &str| -> Result<String, ConfigError> {
                inline
                    .clone()
                    .or_else(|| args.next())
                    .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
            };

            match flag.as_str() {
                "-h" | "--help" => return Ok(Invocation::Help),
                "-d" | "--debug" => self.debug = true,
                "-f" | "--framerate" => self.framerate = parse_value(&flag, value(&flag)?)?,
                "--density" => self.density = parse_value(&flag, value(&flag)?)?,
                "--seed" => self.seed = Some(parse_value(&flag, value(&flag)?)?),
                "--log" => self.log_path = Some(PathBuf::from(value(&flag)?)),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        self.validate()?;
        Ok(Invocation::Run(self))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.framerate.is_finite() || self.framerate <= 0.0 {
            return Err(ConfigError::InvalidFramerate(self.framerate));
        }
        // A rate this small gives a period too long for `Duration`.
        if Duration::try_from_secs_f64(1.0 / self.framerate).is_err() {
            return Err(ConfigError::InvalidFramerate(self.framerate));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// Target time per frame (1 / framerate). Saturates for a framerate that
    /// `validate` would reject.
    pub fn frame_period(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.framerate).unwrap_or(Duration::MAX)
    }
}

/// Environment plus process arguments.
pub fn load() -> Result<Invocation, ConfigError> {
    LifeConfig::from_env().with_args(std::env::args().skip(1))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}
