//! Game simulation: entities, difficulty table and the state machine.
//!
//! Everything here is pure in-memory state driven one frame at a time; the
//! terminal, audio and asset layers only observe it.

pub mod geometry;
pub mod obstacle;
pub mod player;
pub mod scenery;
pub mod settings;
pub mod state;

pub use geometry::{Point, Rect};
pub use obstacle::Obstacle;
pub use player::Player;
pub use scenery::{Background, Ground};
pub use settings::{Difficulty, DifficultyPreset, SettingField, Settings, Step};
pub use state::{Game, GameEvent, GameInput, GameState, Session, StepOutcome};
