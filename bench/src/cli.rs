//! Command-line arguments.

use std::fmt;
use std::path::PathBuf;

use gridsearch::{ParseStrategyError, Strategy};

use crate::config::BenchConfig;
use crate::level::{Level, ParseLevelError};

pub const USAGE: &str = "\
Usage: gridsearch-bench <level> <search_algorithm> [--rounds N] [--seed N] [--config FILE]

  level             level0, level1, level2, level3
  search_algorithm  bfs, dfs, ucs, ids, a*, random, greedy_bfs, or all";

/// Which strategies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(Strategy),
    All,
}

impl Selection {
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            Selection::One(s) => vec![s],
            Selection::All => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub level: Level,
    pub selection: Selection,
    pub rounds: Option<usize>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse the arguments that follow the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, UsageError> {
        let mut positional = Vec::new();
        let mut rounds = None;
        let mut seed = None;
        let mut config = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rounds" => rounds = Some(parse_value(&arg, args.next())?),
                "--seed" => seed = Some(parse_value(&arg, args.next())?),
                "--config" => {
                    let value = args
                        .next()
                        .ok_or_else(|| UsageError::MissingValue("--config".to_string()))?;
                    config = Some(PathBuf::from(value));
                }
                flag if flag.starts_with("--") => {
                    return Err(UsageError::UnknownFlag(flag.to_string()));
                }
                _ => positional.push(arg),
            }
        }

        let [level, algorithm] = <[String; 2]>::try_from(positional)
            .map_err(|p| UsageError::WrongArgCount(p.len()))?;
        let level = level.parse::<Level>()?;
        let selection = if algorithm.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::One(algorithm.parse::<Strategy>()?)
        };

        Ok(Self {
            level,
            selection,
            rounds,
            seed,
            config,
        })
    }

    /// Let command-line values override `config`.
    pub fn apply(&self, config: &mut BenchConfig) {
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, UsageError> {
    let value = value.ok_or_else(|| UsageError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| UsageError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

/// Malformed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    WrongArgCount(usize),
    UnknownFlag(String),
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    Level(ParseLevelError),
    Strategy(ParseStrategyError),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArgCount(n) => write!(f, "expected 2 arguments, got {n}"),
            Self::UnknownFlag(flag) => write!(f, "unknown flag {flag}"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value for {flag}: {value}"),
            Self::Level(e) => write!(f, "{e}"),
            Self::Strategy(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for UsageError {}

impl From<ParseLevelError> for UsageError {
    fn from(e: ParseLevelError) -> Self {
        Self::Level(e)
    }
}

impl From<ParseStrategyError> for UsageError {
    fn from(e: ParseStrategyError) -> Self {
        Self::Strategy(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, UsageError> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn positional_only() {
        let a = parse(&["level1", "a*"]).unwrap();
        assert_eq!(a.level, Level::Level1);
        assert_eq!(a.selection, Selection::One(Strategy::AStar));
        assert_eq!((a.rounds, a.seed, a.config), (None, None, None));
    }

    #[test]
    fn flags_anywhere() {
        let a = parse(&["--seed", "9", "level3", "--rounds", "4", "all"]).unwrap();
        assert_eq!(a.selection, Selection::All);
        assert_eq!(a.selection.strategies().len(), 7);
        assert_eq!(a.rounds, Some(4));
        assert_eq!(a.seed, Some(9));
    }

    #[test]
    fn overrides_config() {
        let a = parse(&["level0", "bfs", "--rounds", "3", "--config", "bench.toml"]).unwrap();
        assert_eq!(a.config, Some(PathBuf::from("bench.toml")));
        let mut config = BenchConfig::default();
        a.apply(&mut config);
        assert_eq!(config.rounds, 3);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn errors() {
        assert_eq!(parse(&["level0"]), Err(UsageError::WrongArgCount(1)));
        assert_eq!(
            parse(&["level0", "bfs", "--fast"]),
            Err(UsageError::UnknownFlag("--fast".into()))
        );
        assert_eq!(
            parse(&["level0", "bfs", "--seed"]),
            Err(UsageError::MissingValue("--seed".into()))
        );
        assert_eq!(
            parse(&["level0", "bfs", "--rounds", "x"]),
            Err(UsageError::InvalidValue {
                flag: "--rounds".into(),
                value: "x".into()
            })
        );
        assert!(matches!(parse(&["level7", "bfs"]), Err(UsageError::Level(_))));
        assert!(matches!(parse(&["level0", "bogo"]), Err(UsageError::Strategy(_))));
    }
}
