//! Custom difficulty editing through hotkeys and pointer clicks.

use flappy::game::{Difficulty, Game, GameInput, Point, SettingField, Settings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn open_custom() -> (Game, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut game = Game::new(Settings::default(), (50.0, 36.0), &mut rng);
    game.handle_input(GameInput::Hotkey('c'), &mut rng);
    assert_eq!(game.state().name(), "CUSTOM_SETTINGS");
    (game, rng)
}

fn press(game: &mut Game, rng: &mut ChaCha8Rng, key: char, times: usize) {
    for _ in 0..times {
        game.handle_input(GameInput::Hotkey(key), rng);
    }
}

#[test]
fn test_twenty_speed_decrements_stop_at_one() {
    let (mut game, mut rng) = open_custom();
    assert_eq!(game.settings().custom().scroll_speed, 4);
    press(&mut game, &mut rng, '1', 20);
    assert_eq!(game.settings().custom().scroll_speed, 1);
    press(&mut game, &mut rng, '2', 1);
    assert_eq!(game.settings().custom().scroll_speed, 2);
}

#[test]
fn test_every_field_saturates_at_both_ends() {
    let (mut game, mut rng) = open_custom();
    let keys = [
        (SettingField::Speed, '1', '2'),
        (SettingField::Gap, '3', '4'),
        (SettingField::Gravity, '5', '6'),
    ];
    for (field, dec, inc) in keys {
        let (min, max, _) = field.bounds();
        press(&mut game, &mut rng, inc, 100);
        let value = |game: &Game| match field {
            SettingField::Speed => game.settings().custom().scroll_speed,
            SettingField::Gap => game.settings().custom().gap_size,
            SettingField::Gravity => game.settings().custom().gravity_centi,
        };
        assert_eq!(value(&game), max, "{} max", field.label());
        press(&mut game, &mut rng, dec, 100);
        assert_eq!(value(&game), min, "{} min", field.label());
    }
    assert_eq!(game.settings().display_value(SettingField::Gravity), "0.10");
}

#[test]
fn test_clicking_plus_adjusts_value() {
    let (mut game, mut rng) = open_custom();
    game.handle_input(GameInput::PointerDown(Point::new(260.0, 250.0)), &mut rng);
    assert_eq!(game.settings().custom().gap_size, 180);
    game.handle_input(GameInput::PointerDown(Point::new(140.0, 350.0)), &mut rng);
    assert_eq!(game.settings().custom().gravity_centi, 40);
}

#[test]
fn test_play_custom_uses_edited_preset() {
    let (mut game, mut rng) = open_custom();
    press(&mut game, &mut rng, '2', 2);
    press(&mut game, &mut rng, '3', 3);
    press(&mut game, &mut rng, 'p', 1);

    assert_eq!(game.state().name(), "PLAYING");
    assert_eq!(game.difficulty(), Difficulty::Custom);
    let session = game.state().session().unwrap();
    assert_eq!(session.preset.scroll_speed, 6);
    assert_eq!(session.preset.gap_size, 140);
    assert_eq!(session.obstacles[0].gap, 140.0);
    assert_eq!(game.ground().speed, 6.0);
}

#[test]
fn test_session_keeps_its_copy_of_the_preset() {
    let (mut game, mut rng) = open_custom();
    press(&mut game, &mut rng, 'p', 1);
    while game.state().name() != "GAME_OVER" {
        game.tick(&mut rng);
    }
    game.handle_input(GameInput::Hotkey('m'), &mut rng);
    game.handle_input(GameInput::Hotkey('c'), &mut rng);
    press(&mut game, &mut rng, '2', 5);
    assert_eq!(game.settings().custom().scroll_speed, 9);

    // Edits survive leaving the screen
    press(&mut game, &mut rng, 'b', 1);
    assert_eq!(game.state().name(), "MENU");
    game.handle_input(GameInput::Hotkey('c'), &mut rng);
    assert_eq!(game.settings().custom().scroll_speed, 9);
}

#[test]
fn test_custom_edits_do_not_touch_presets() {
    let (mut game, mut rng) = open_custom();
    press(&mut game, &mut rng, '4', 5);
    press(&mut game, &mut rng, 'b', 1);
    press(&mut game, &mut rng, 'm', 1);
    let session = game.state().session().unwrap();
    assert_eq!(session.difficulty, Difficulty::Medium);
    assert_eq!(session.preset.gap_size, 170);
}

#[test]
fn test_flap_key_is_ignored_on_settings_screen() {
    let (mut game, mut rng) = open_custom();
    game.handle_input(GameInput::Confirm, &mut rng);
    game.tick(&mut rng);
    assert_eq!(game.state().name(), "CUSTOM_SETTINGS");
    assert!(game.take_events().is_empty());
}
