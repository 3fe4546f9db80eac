//! gridsearch-bench runs search strategies headlessly on random obstacle
//! layouts and reports how each one fares.

pub mod cli;
pub mod config;
pub mod level;
pub mod session;

pub use cli::{Args, Selection, USAGE, UsageError};
pub use config::{BenchConfig, ConfigError};
pub use level::{Layout, Level, ParseLevelError};
pub use session::{Session, StopReason, Summary};
