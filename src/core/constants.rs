// Logical canvas (all simulation coordinates live in this space)
pub const BASE_WIDTH: f64 = 400.0;
pub const BASE_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 50.0;

// Frame pacing
pub const DEFAULT_FPS: u32 = 60;
pub const MIN_FPS: u32 = 10;
pub const MAX_FPS: u32 = 240;

// Player
pub const PLAYER_X: f64 = 50.0;
pub const PLAYER_SPRITE_WIDTH: u32 = 50;
pub const PLACEHOLDER_SPRITE_HEIGHT: u32 = 36;
pub const MAX_FALL_SPEED: f64 = 15.0;
pub const RISING_ANGLE: f64 = 20.0;
pub const MAX_DIVE_ANGLE: f64 = -90.0;
pub const DIVE_RATE: f64 = 3.0;
pub const FALLING_DIVE_RATE: f64 = 5.0;
/// Player dies once its centre reaches this line.
pub const GROUND_LINE: f64 = BASE_HEIGHT - GROUND_HEIGHT - 10.0;

// Menu hover animation
pub const HOVER_BASELINE: f64 = BASE_HEIGHT / 2.0 - 80.0;
pub const HOVER_AMPLITUDE: f64 = 10.0;
pub const HOVER_TIMER_STEP: f64 = 0.05;

// Hitbox is shrunk by these totals on each axis (half per side)
pub const HITBOX_SHRINK_X: f64 = 32.0;
pub const HITBOX_SHRINK_Y: f64 = 20.0;

// Obstacles
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_CAP_HEIGHT: f64 = 30.0;
/// Horizontal inset of the pipe body relative to its cap.
pub const PIPE_BODY_INSET: f64 = 4.0;
pub const PIPE_MIN_HEIGHT: u32 = 80;
/// Space kept between the lower barrier's top edge and the ground.
pub const PIPE_BOTTOM_MARGIN: f64 = 50.0;
pub const FIRST_PIPE_X: f64 = BASE_WIDTH + 100.0;
/// A new pipe spawns once the rearmost one is this far left of the right edge.
pub const PIPE_SPAWN_DISTANCE: f64 = 200.0;
pub const PIPE_DESPAWN_X: f64 = -100.0;

// Scenery
pub const BACKGROUND_SPEED: f64 = 0.5;
pub const GROUND_MENU_SPEED: f64 = 2.0;
pub const GROUND_STRIPE_SPACING: f64 = 20.0;
pub const STAR_COUNT: usize = 30;

// Control elements
pub const CONTROL_HOVER_SCALE: f64 = 1.15;
pub const CONTROL_EASING: f64 = 0.2;

// Terminal mapping: one cell stands in for a block of logical units
pub const CELL_WIDTH_UNITS: f64 = 10.0;
pub const CELL_HEIGHT_UNITS: f64 = 20.0;
pub const MIN_CANVAS_COLS: u16 = 16;
pub const MIN_CANVAS_ROWS: u16 = 12;
