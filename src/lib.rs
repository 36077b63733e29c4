#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{calculator::add, shell::run_stdio, shell::Shell};
pub use domain::model::{Operand, Outcome};
pub use utils::error::{Result, SumError};
