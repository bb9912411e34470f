//! Command-line configuration for the day binaries.

use std::ffi::OsString;
use std::path::PathBuf;

use pico_args::Arguments;

use crate::camel_cards::Mode;

pub const HELP: &str = "\
Usage: 07 [--input <path>] [--mode <standard|joker>] [--table]

Options:
  --input <path>    Read puzzle input from <path> instead of src/inputs/07.txt
  --mode <mode>     Solve only one part: `standard` (part one) or `joker` (part two)
  --table           Also print the full ranking for each solved part
";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub mode: Option<Mode>,
    pub table: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Args(#[from] pico_args::Error),

    #[error("unexpected arguments: {0:?}")]
    UnexpectedArguments(Vec<OsString>),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_args(Arguments::from_env())
    }

    pub fn from_args(mut args: Arguments) -> Result<Self, ConfigError> {
        let config = Self {
            table: args.contains("--table"),
            input: args.opt_value_from_str("--input")?,
            mode: args.opt_value_from_str("--mode")?,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(ConfigError::UnexpectedArguments(remaining));
        }

        Ok(config)
    }

    /// The modes to solve, in part order.
    pub fn modes(&self) -> Vec<Mode> {
        match self.mode {
            Some(mode) => vec![mode],
            None => vec![Mode::Standard, Mode::Joker],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.modes(), [Mode::Standard, Mode::Joker]);
    }

    #[test]
    fn all_flags() {
        let config = parse(&["--table", "--mode", "joker", "--input", "day07.txt"]).unwrap();
        assert_eq!(
            config,
            Config {
                input: Some(PathBuf::from("day07.txt")),
                mode: Some(Mode::Joker),
                table: true,
            }
        );
        assert_eq!(config.modes(), [Mode::Joker]);
    }

    #[test]
    fn bad_mode() {
        assert!(matches!(
            parse(&["--mode", "wild"]),
            Err(ConfigError::Args(_))
        ));
    }

    #[test]
    fn leftover_arguments() {
        assert!(matches!(
            parse(&["--verbose"]),
            Err(ConfigError::UnexpectedArguments(args)) if args == [OsString::from("--verbose")]
        ));
    }
}
