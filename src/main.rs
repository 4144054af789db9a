use clap::Parser;
use crossterm::event;
use flappy::audio::{open_player, AudioCue, CuePlayer};
use flappy::core::{Cli, Config};
use flappy::game::{Game, GameInput, Settings};
use flappy::input::{map_event, InputEvent};
use flappy::ui::draw_ui;
use flappy::ui::viewport::Viewport;
use flappy::utils::logging;
use flappy::utils::terminal::{self, Term};
use flappy::{build_info, Assets};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::time::Instant;

fn main() -> io::Result<()> {
    let config = Config::from_cli(Cli::parse());

    // The game still runs if the log file cannot be opened
    match logging::init(config.log_file.as_deref()) {
        Ok(path) => log::info!(
            "flappy {} logging to {}",
            build_info::VERSION_LINE,
            path.display()
        ),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    log::debug!("{:?}", config);

    let assets = Assets::load(&config.assets_dir);
    let player = open_player(assets.sounds.clone(), config.mute);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(Settings::default(), assets.sprite.size(), &mut rng);
    let mut viewport = Viewport::new(config.fullscreen);

    // Setup terminal
    let mut terminal = terminal::setup()?;

    let result = run(
        &mut terminal,
        &config,
        &assets,
        player.as_ref(),
        &mut game,
        &mut viewport,
        &mut rng,
    );

    // Restore terminal
    let restored = terminal::restore(Some(&mut terminal));

    match &result {
        Ok(()) => log::info!("exiting, best score {}", game.best_score()),
        Err(e) => log::error!("terminal error: {}", e),
    }
    result.and(restored)
}

fn run(
    terminal: &mut Term,
    config: &Config,
    assets: &Assets,
    player: &dyn CuePlayer,
    game: &mut Game,
    viewport: &mut Viewport,
    rng: &mut StdRng,
) -> io::Result<()> {
    let frame_duration = config.frame_duration();

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(std::time::Duration::ZERO)? {
            let Some(input) = map_event(&event::read()?) else {
                continue;
            };
            match input {
                InputEvent::Quit => return Ok(()),
                InputEvent::ToggleFullscreen => {
                    viewport.toggle_fullscreen();
                    log::debug!("fullscreen {}", viewport.fullscreen);
                }
                InputEvent::ExitFullscreen => viewport.exit_fullscreen(),
                InputEvent::Confirm => game.handle_input(GameInput::Confirm, rng),
                InputEvent::Hotkey(key) => game.handle_input(GameInput::Hotkey(key), rng),
                InputEvent::PointerMoved { col, row } => {
                    if let Some(point) = viewport.to_logical(col, row) {
                        game.handle_input(GameInput::PointerMoved(point), rng);
                    }
                }
                InputEvent::PointerDown { col, row } => {
                    if let Some(point) = viewport.to_logical(col, row) {
                        game.handle_input(GameInput::PointerDown(point), rng);
                    }
                }
            }
        }

        // Update
        game.tick(rng);
        for event in game.take_events() {
            player.play(AudioCue::from(event));
        }

        // Render
        terminal.draw(|frame| draw_ui(frame, game, &assets.sprite, viewport))?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }
}
