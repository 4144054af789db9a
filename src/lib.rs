//! Flappy - a Flappy-Bird style arcade game for the terminal.
//!
//! This module exposes the game logic for testing and external use.

pub mod assets;
pub mod audio;
pub mod build_info;
pub mod core;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use assets::{AssetError, Assets, Sprite};
pub use audio::{AudioCue, CuePlayer};
pub use crate::core::Config;
pub use game::{Difficulty, Game, GameEvent, GameInput, GameState, Settings};
