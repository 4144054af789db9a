//! The per-frame game-state machine.
//!
//! Each state owns the entities it needs. A [`Session`] is built fresh every
//! time play starts and is carried through `Playing -> Falling -> GameOver`
//! so the final scene can still be drawn; nothing survives into the next run.

use super::geometry::Point;
use super::obstacle::Obstacle;
use super::player::Player;
use super::scenery::{Background, Ground};
use super::settings::{Difficulty, DifficultyPreset, Settings};
use crate::core::constants::{
    BASE_WIDTH, FIRST_PIPE_X, GROUND_LINE, GROUND_MENU_SPEED, PIPE_DESPAWN_X, PIPE_SPAWN_DISTANCE,
};
use crate::ui::control::{Action, ControlPanel};
use rand::Rng;
use std::collections::VecDeque;

/// Something the outside world should react to (sound cues).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Flap,
    Score,
    Hit,
    Die,
}

/// Logical input, already mapped into canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    /// Space: flap while playing, restart on the game-over screen.
    Confirm,
    PointerMoved(Point),
    /// Primary-button press.
    PointerDown(Point),
    Hotkey(char),
}

/// One play-through: created on start, discarded on restart.
#[derive(Debug, Clone)]
pub struct Session {
    pub difficulty: Difficulty,
    pub preset: DifficultyPreset,
    pub player: Player,
    /// Ordered by x, front = oldest/leftmost.
    pub obstacles: VecDeque<Obstacle>,
    pub score: u32,
}

/// Result of one playing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Collided,
    Landed,
}

impl Session {
    pub fn new<R: Rng>(
        difficulty: Difficulty,
        preset: DifficultyPreset,
        sprite_size: (f64, f64),
        rng: &mut R,
    ) -> Self {
        let mut obstacles = VecDeque::new();
        obstacles.push_back(Obstacle::spawn(FIRST_PIPE_X, &preset, rng));
        Self {
            difficulty,
            preset,
            player: Player::new(&preset, sprite_size.0, sprite_size.1),
            obstacles,
            score: 0,
        }
    }

    /// Obstacle half of a playing frame: spawn, scroll, collide, score, recycle,
    /// then clamp the player to the top and test the ground line.
    pub fn advance_obstacles<R: Rng>(
        &mut self,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) -> StepOutcome {
        let needs_spawn = self
            .obstacles
            .back()
            .map_or(true, |last| last.x < BASE_WIDTH - PIPE_SPAWN_DISTANCE);
        if needs_spawn {
            self.obstacles
                .push_back(Obstacle::spawn(BASE_WIDTH, &self.preset, rng));
        }

        let hitbox = self.player.hitbox();
        let mut collided = false;
        for obstacle in &mut self.obstacles {
            obstacle.update();
            if !collided && obstacle.collides(&hitbox) {
                collided = true;
                events.push(GameEvent::Hit);
            }
            if obstacle.try_pass(self.player.x) {
                self.score += 1;
                events.push(GameEvent::Score);
            }
        }

        if self
            .obstacles
            .front()
            .is_some_and(|first| first.x < PIPE_DESPAWN_X)
        {
            self.obstacles.pop_front();
        }

        if self.player.y < 0.0 {
            self.player.y = 0.0;
        }

        if self.player.y >= GROUND_LINE {
            StepOutcome::Landed
        } else if collided {
            StepOutcome::Collided
        } else {
            StepOutcome::Continue
        }
    }
}

/// Exactly one is active at a time.
#[derive(Debug, Clone)]
pub enum GameState {
    Menu { player: Player },
    CustomSettings,
    Playing(Session),
    Falling(Session),
    GameOver(Session),
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Menu { .. } => "MENU",
            Self::CustomSettings => "CUSTOM_SETTINGS",
            Self::Playing(_) => "PLAYING",
            Self::Falling(_) => "FALLING",
            Self::GameOver(_) => "GAME_OVER",
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Playing(s) | Self::Falling(s) | Self::GameOver(s) => Some(s),
            Self::Menu { .. } | Self::CustomSettings => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Self::Playing(s) | Self::Falling(s) | Self::GameOver(s) => Some(s),
            Self::Menu { .. } | Self::CustomSettings => None,
        }
    }
}

/// Orchestrates scenery, controls and the active state.
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    difficulty: Difficulty,
    state: GameState,
    background: Background,
    ground: Ground,
    pointer: Option<Point>,
    main_menu: ControlPanel,
    custom_menu: ControlPanel,
    game_over_menu: ControlPanel,
    sprite_size: (f64, f64),
    best_score: u32,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new<R: Rng>(settings: Settings, sprite_size: (f64, f64), rng: &mut R) -> Self {
        Self {
            settings,
            difficulty: Difficulty::Medium,
            state: GameState::Menu {
                player: Player::for_menu(sprite_size.0, sprite_size.1),
            },
            background: Background::generate(rng),
            ground: Ground::default(),
            pointer: None,
            main_menu: ControlPanel::main_menu(),
            custom_menu: ControlPanel::custom_settings(),
            game_over_menu: ControlPanel::game_over(),
            sprite_size,
            best_score: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Difficulty of the current (or most recent) session.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.state.session().map_or(0, |s| s.score)
    }

    /// Highest score reached in this process run.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Controls for the current state, if it has any.
    pub fn active_panel(&self) -> Option<&ControlPanel> {
        match self.state {
            GameState::Menu { .. } => Some(&self.main_menu),
            GameState::CustomSettings => Some(&self.custom_menu),
            GameState::GameOver(_) => Some(&self.game_over_menu),
            GameState::Playing(_) | GameState::Falling(_) => None,
        }
    }

    fn active_panel_mut(&mut self) -> Option<&mut ControlPanel> {
        match self.state {
            GameState::Menu { .. } => Some(&mut self.main_menu),
            GameState::CustomSettings => Some(&mut self.custom_menu),
            GameState::GameOver(_) => Some(&mut self.game_over_menu),
            GameState::Playing(_) | GameState::Falling(_) => None,
        }
    }

    /// Events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn handle_input<R: Rng>(&mut self, input: GameInput, rng: &mut R) {
        match input {
            GameInput::PointerMoved(point) => self.pointer = Some(point),
            GameInput::PointerDown(point) => {
                self.pointer = Some(point);
                let action = self.active_panel_mut().and_then(|panel| panel.click(point));
                if let Some(action) = action {
                    self.apply_action(action, rng);
                }
            }
            GameInput::Hotkey(key) => {
                let action = self.active_panel().and_then(|panel| panel.hotkey(key));
                if let Some(action) = action {
                    self.apply_action(action, rng);
                }
            }
            GameInput::Confirm => match &mut self.state {
                GameState::Playing(session) => {
                    session.player.flap();
                    self.events.push(GameEvent::Flap);
                }
                GameState::GameOver(_) => self.start(self.difficulty, rng),
                GameState::Menu { .. } | GameState::CustomSettings | GameState::Falling(_) => {}
            },
        }
    }

    /// Apply a control action; actions that make no sense in the current state are ignored.
    pub fn apply_action<R: Rng>(&mut self, action: Action, rng: &mut R) {
        let in_menu = matches!(self.state, GameState::Menu { .. });
        let in_custom = matches!(self.state, GameState::CustomSettings);
        let in_game_over = matches!(self.state, GameState::GameOver(_));

        match action {
            Action::Play(difficulty) if in_menu => self.start(difficulty, rng),
            Action::OpenCustom if in_menu => self.set_state(GameState::CustomSettings),
            Action::Adjust(field, step) if in_custom => {
                if self.settings.adjust(field, step) {
                    log::debug!(
                        "custom {} -> {}",
                        field.label(),
                        self.settings.display_value(field)
                    );
                }
            }
            Action::PlayCustom if in_custom => self.start(Difficulty::Custom, rng),
            Action::Back if in_custom => self.enter_menu(),
            Action::Restart if in_game_over => self.start(self.difficulty, rng),
            Action::Menu if in_game_over => self.enter_menu(),
            _ => {}
        }
    }

    /// Advance one frame.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        let pointer = self.pointer;
        match &mut self.state {
            GameState::Menu { player } => {
                self.background.update();
                self.ground.advance(GROUND_MENU_SPEED);
                player.update_menu();
                self.main_menu.update(pointer);
            }
            GameState::CustomSettings => self.custom_menu.update(pointer),
            GameState::Playing(session) => {
                self.background.update();
                session.player.update();
                self.ground.update();
                match session.advance_obstacles(rng, &mut self.events) {
                    StepOutcome::Continue => {}
                    StepOutcome::Collided => self.enter_falling(),
                    StepOutcome::Landed => self.enter_game_over(),
                }
            }
            GameState::Falling(session) => {
                session.player.update_falling();
                if session.player.y >= GROUND_LINE {
                    self.enter_game_over();
                }
            }
            GameState::GameOver(_) => self.game_over_menu.update(pointer),
        }
    }

    fn start<R: Rng>(&mut self, difficulty: Difficulty, rng: &mut R) {
        let preset = self.settings.preset(difficulty);
        self.difficulty = difficulty;
        self.ground.speed = preset.speed();
        log::info!(
            "starting {} session (gap {}, speed {}, gravity {:.2})",
            difficulty.name(),
            preset.gap_size,
            preset.scroll_speed,
            preset.gravity()
        );
        let session = Session::new(difficulty, preset, self.sprite_size, rng);
        self.set_state(GameState::Playing(session));
    }

    fn enter_menu(&mut self) {
        let player = Player::for_menu(self.sprite_size.0, self.sprite_size.1);
        self.set_state(GameState::Menu { player });
    }

    fn enter_falling(&mut self) {
        let previous = std::mem::replace(&mut self.state, GameState::CustomSettings);
        self.state = match previous {
            GameState::Playing(session) => GameState::Falling(session),
            other => other,
        };
        log::debug!("state -> {}", self.state.name());
    }

    fn enter_game_over(&mut self) {
        let previous = std::mem::replace(&mut self.state, GameState::CustomSettings);
        self.state = match previous {
            GameState::Playing(session) | GameState::Falling(session) => {
                GameState::GameOver(session)
            }
            other => other,
        };
        if let Some(session) = self.state.session_mut() {
            // Snap to the ground line so the final frame rests on it.
            session.player.y = session.player.y.min(GROUND_LINE);
            let score = session.score;
            if score > self.best_score {
                self.best_score = score;
            }
            log::info!(
                "game over on {} with score {} (best {})",
                self.difficulty.name(),
                score,
                self.best_score
            );
        }
        self.events.push(GameEvent::Die);
        log::debug!("state -> {}", self.state.name());
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("state {} -> {}", self.state.name(), state.name());
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::PLAYER_X;
    use crate::game::settings::{SettingField, Step};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SPRITE: (f64, f64) = (50.0, 36.0);

    fn new_game() -> (Game, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let game = Game::new(Settings::default(), SPRITE, &mut rng);
        (game, rng)
    }

    fn playing(game: &mut Game) -> &mut Session {
        match &mut game.state {
            GameState::Playing(session) => session,
            other => panic!("expected PLAYING, got {}", other.name()),
        }
    }

    #[test]
    fn test_starts_in_menu() {
        let (game, _) = new_game();
        assert_eq!(game.state().name(), "MENU");
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_menu_play_resets_session() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Hard), &mut rng);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        let session = playing(&mut game);
        assert_eq!(session.score, 0);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.obstacles[0].x, FIRST_PIPE_X);
        assert_eq!(session.player.velocity, 0.0);
        assert_eq!(session.player.y, 300.0);
    }

    #[test]
    fn test_medium_first_frame_scenario() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        game.tick(&mut rng);
        let session = playing(&mut game);
        assert!((session.player.velocity - 0.45).abs() < 1e-12);
        assert!((session.player.y - 300.45).abs() < 1e-12);
    }

    #[test]
    fn test_flap_emits_event_only_while_playing() {
        let (mut game, mut rng) = new_game();
        game.handle_input(GameInput::Confirm, &mut rng);
        assert!(game.take_events().is_empty());
        assert_eq!(game.state().name(), "MENU");

        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        game.handle_input(GameInput::Confirm, &mut rng);
        assert_eq!(game.take_events(), vec![GameEvent::Flap]);
        assert!((playing(&mut game).player.velocity - (-7.5)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawn_after_threshold() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        let session = playing(&mut game);
        session.obstacles[0].x = BASE_WIDTH - PIPE_SPAWN_DISTANCE - 1.0;
        session.obstacles[0].gap_top = 250.0;
        let mut events = Vec::new();
        session.advance_obstacles(&mut rng, &mut events);
        assert_eq!(session.obstacles.len(), 2);
        assert!(session.obstacles[0].x <= session.obstacles[1].x);
        assert_eq!(session.obstacles[1].x, BASE_WIDTH - 4.0);
    }

    #[test]
    fn test_offscreen_obstacle_recycled() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        let session = playing(&mut game);
        session.obstacles[0].x = PIPE_DESPAWN_X + 2.0;
        session.obstacles[0].passed = true;
        let mut events = Vec::new();
        session.advance_obstacles(&mut rng, &mut events);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.obstacles[0].x, BASE_WIDTH - 4.0);
    }

    #[test]
    fn test_score_once_per_obstacle() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        let session = playing(&mut game);
        // Player mid-gap so the pass cannot also collide.
        session.obstacles[0].x = PLAYER_X + 6.0;
        session.obstacles[0].gap_top = session.player.y - 80.0;
        let mut events = Vec::new();
        session.advance_obstacles(&mut rng, &mut events);
        assert_eq!(session.score, 0);
        session.advance_obstacles(&mut rng, &mut events);
        assert_eq!(session.score, 1);
        session.advance_obstacles(&mut rng, &mut events);
        assert_eq!(session.score, 1);
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::Score).count(),
            1
        );
    }

    #[test]
    fn test_collision_enters_falling_once() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        {
            let session = playing(&mut game);
            session.obstacles[0].x = PLAYER_X - 10.0;
            session.obstacles[0].gap_top = 500.0;
            session.obstacles[0].passed = true;
        }
        game.tick(&mut rng);
        assert_eq!(game.state().name(), "FALLING");
        assert_eq!(game.take_events(), vec![GameEvent::Hit]);

        let frozen_x = game.state().session().map(|s| s.obstacles[0].x);
        for _ in 0..5 {
            game.tick(&mut rng);
        }
        assert_eq!(game.state().session().map(|s| s.obstacles[0].x), frozen_x);
        assert!(!game.take_events().contains(&GameEvent::Hit));
    }

    #[test]
    fn test_falling_ignores_flap() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        let session = playing(&mut game).clone();
        game.state = GameState::Falling(session);
        game.handle_input(GameInput::Confirm, &mut rng);
        assert!(game.take_events().is_empty());
        assert_eq!(game.state().name(), "FALLING");
    }

    #[test]
    fn test_falling_reaches_ground_same_frame() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        let mut session = playing(&mut game).clone();
        session.player.y = GROUND_LINE - 1.0;
        session.player.velocity = 5.0;
        game.state = GameState::Falling(session);
        game.tick(&mut rng);
        assert_eq!(game.state().name(), "GAME_OVER");
        assert_eq!(game.take_events(), vec![GameEvent::Die]);

        let y = game.state().session().map(|s| s.player.y);
        for _ in 0..10 {
            game.tick(&mut rng);
        }
        assert_eq!(game.state().session().map(|s| s.player.y), y);
    }

    #[test]
    fn test_ground_while_playing_goes_straight_to_game_over() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        playing(&mut game).player.y = GROUND_LINE;
        game.tick(&mut rng);
        assert_eq!(game.state().name(), "GAME_OVER");
    }

    #[test]
    fn test_top_clamp() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Medium), &mut rng);
        {
            let session = playing(&mut game);
            session.player.y = 2.0;
            session.player.velocity = -7.5;
        }
        game.tick(&mut rng);
        assert_eq!(playing(&mut game).player.y, 0.0);
    }

    #[test]
    fn test_restart_reuses_difficulty() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::Play(Difficulty::Easy), &mut rng);
        playing(&mut game).score = 4;
        playing(&mut game).player.y = GROUND_LINE;
        game.tick(&mut rng);
        assert_eq!(game.best_score(), 4);

        game.handle_input(GameInput::Confirm, &mut rng);
        assert_eq!(game.difficulty(), Difficulty::Easy);
        assert_eq!(playing(&mut game).score, 0);
        assert_eq!(playing(&mut game).preset, DifficultyPreset::EASY);
    }

    #[test]
    fn test_custom_flow() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::OpenCustom, &mut rng);
        assert_eq!(game.state().name(), "CUSTOM_SETTINGS");
        game.apply_action(Action::Adjust(SettingField::Speed, Step::Increase), &mut rng);
        game.apply_action(Action::PlayCustom, &mut rng);
        assert_eq!(game.difficulty(), Difficulty::Custom);
        assert_eq!(playing(&mut game).preset.scroll_speed, 5);
        assert_eq!(game.ground().speed, 5.0);
    }

    #[test]
    fn test_back_and_menu_actions() {
        let (mut game, mut rng) = new_game();
        game.apply_action(Action::OpenCustom, &mut rng);
        game.apply_action(Action::Back, &mut rng);
        assert_eq!(game.state().name(), "MENU");

        // Restart is not a menu action
        game.apply_action(Action::Restart, &mut rng);
        assert_eq!(game.state().name(), "MENU");
    }

    #[test]
    fn test_pointer_click_and_hotkey() {
        let (mut game, mut rng) = new_game();
        game.handle_input(GameInput::PointerDown(Point::new(200.0, 460.0)), &mut rng);
        assert_eq!(game.state().name(), "CUSTOM_SETTINGS");
        game.handle_input(GameInput::Hotkey('b'), &mut rng);
        assert_eq!(game.state().name(), "MENU");
        game.handle_input(GameInput::Hotkey('h'), &mut rng);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.state().name(), "PLAYING");
    }

    #[test]
    fn test_menu_animates_scenery() {
        let (mut game, mut rng) = new_game();
        game.tick(&mut rng);
        assert_eq!(game.background().offset, -0.5);
        assert_eq!(game.ground().offset, -GROUND_MENU_SPEED);
    }
}
