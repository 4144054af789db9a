//! Runtime configuration parsed from the command line.

use super::constants::{DEFAULT_FPS, MAX_FPS, MIN_FPS};
use crate::build_info::VERSION_LINE;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Flappy Bird for the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "flappy", version = VERSION_LINE, about)]
pub struct Cli {
    /// Directory holding flappy.png and the .wav sound cues
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Target frame rate
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Disable sound
    #[arg(long)]
    pub mute: bool,

    /// Seed for the obstacle generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start in fullscreen (letterboxed) mode
    #[arg(long)]
    pub fullscreen: bool,

    /// Where to write the log (default: ~/.flappy/flappy.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated settings the game runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub fps: u32,
    pub mute: bool,
    pub seed: Option<u64>,
    pub fullscreen: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            assets_dir: cli.assets,
            fps: cli.fps.clamp(MIN_FPS, MAX_FPS),
            mute: cli.mute,
            seed: cli.seed,
            fullscreen: cli.fullscreen,
            log_file: cli.log_file,
        }
    }

    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            fps: DEFAULT_FPS,
            mute: false,
            seed: None,
            fullscreen: false,
            log_file: None,
        }
    }
}
