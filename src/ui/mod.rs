pub mod control;
pub mod flappy_scene;
pub mod game_common;
pub mod viewport;

use crate::assets::Sprite;
use crate::game::Game;
use ratatui::Frame;
use viewport::Viewport;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, game: &Game, sprite: &Sprite, viewport: &mut Viewport) {
    flappy_scene::render_game(frame, game, sprite, viewport);
}
