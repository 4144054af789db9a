//! Constants and runtime configuration.

pub mod config;
pub mod constants;

pub use config::{Cli, Config};
pub use constants::*;
