//! Draws the logical 400x600 scene onto a ratatui canvas.
//!
//! All positions here are logical (y down); the canvas y axis points up, so
//! everything goes through [`flip`] before it reaches the painter.

use crate::assets::Sprite;
use crate::core::constants::{
    BASE_HEIGHT, BASE_WIDTH, GROUND_HEIGHT, GROUND_STRIPE_SPACING, PIPE_BODY_INSET,
    PIPE_CAP_HEIGHT, PIPE_WIDTH,
};
use crate::game::scenery::MOON_RADIUS;
use crate::game::{Background, Game, GameState, Ground, Obstacle, Player, Rect, SettingField};
use crate::ui::control::{ControlElement, ControlPanel};
use crate::ui::game_common::{render_status_bar, render_too_small, status_for};
use crate::ui::viewport::Viewport;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Context, Line as CanvasLine, Painter, Shape},
    Frame,
};

const SKY: Color = Color::Rgb(20, 20, 40);
const MOON: Color = Color::Rgb(200, 200, 220);
const BUILDING: Color = Color::Rgb(10, 10, 25);
const WINDOW: Color = Color::Rgb(255, 255, 100);
const STAR: Color = Color::Rgb(255, 255, 255);
const PIPE_DARK: Color = Color::Rgb(0, 168, 0);
const PIPE_LIGHT: Color = Color::Rgb(80, 208, 0);
const PIPE_SHADOW: Color = Color::Rgb(0, 80, 0);
const GROUND: Color = Color::Rgb(50, 50, 50);
const GROUND_TOP: Color = Color::Rgb(0, 255, 150);
const GROUND_HATCH: Color = Color::Rgb(30, 30, 30);
const BUTTON: Color = Color::Rgb(225, 225, 225);
const BUTTON_HOVER: Color = Color::Rgb(255, 255, 255);
const BUTTON_SHADOW: Color = Color::Rgb(0, 0, 0);
const TEXT_DARK: Color = Color::Rgb(40, 40, 40);
const GAME_OVER_RED: Color = Color::Rgb(255, 80, 80);
const PANEL: Color = Color::Rgb(12, 12, 24);

/// Logical y to canvas y.
fn flip(y: f64) -> f64 {
    BASE_HEIGHT - y
}

/// Solid axis-aligned rectangle, clipped to the canvas.
struct FilledRect {
    rect: Rect,
    color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter) {
        let left = self.rect.x.max(0.0);
        let right = self.rect.right().min(BASE_WIDTH);
        let top = self.rect.y.max(0.0);
        let bottom = self.rect.bottom().min(BASE_HEIGHT);
        if left >= right || top >= bottom {
            return;
        }
        // Shave a hair off the far edges so a rect ending on a cell boundary
        // does not bleed into the next cell.
        let far_x = (right - 1e-6).max(left);
        let far_y = (bottom - 1e-6).max(top);
        let (Some((x0, y0)), Some((x1, y1))) = (
            painter.get_point(left, flip(top)),
            painter.get_point(far_x, flip(far_y)),
        ) else {
            return;
        };
        for x in x0.min(x1)..=x0.max(x1) {
            for y in y0.min(y1)..=y0.max(y1) {
                painter.paint(x, y, self.color);
            }
        }
    }
}

/// Solid circle, sampled on a fine logical grid.
struct Disc {
    x: f64,
    y: f64,
    radius: f64,
    color: Color,
}

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter) {
        let step = 2.0;
        let mut dy = -self.radius;
        while dy <= self.radius {
            let mut dx = -self.radius;
            while dx <= self.radius {
                if dx * dx + dy * dy <= self.radius * self.radius {
                    if let Some((px, py)) = painter.get_point(self.x + dx, flip(self.y + dy)) {
                        painter.paint(px, py, self.color);
                    }
                }
                dx += step;
            }
            dy += step;
        }
    }
}

/// The player sprite rotated about its centre.
struct SpriteShape<'a> {
    sprite: &'a Sprite,
    cx: f64,
    cy: f64,
    /// Degrees, positive = nose up.
    angle: f64,
}

impl Shape for SpriteShape<'_> {
    fn draw(&self, painter: &mut Painter) {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let half_w = f64::from(self.sprite.width()) / 2.0;
        let half_h = f64::from(self.sprite.height()) / 2.0;
        for sy in 0..self.sprite.height() {
            for sx in 0..self.sprite.width() {
                let Some(color) = self.sprite.pixel(sx, sy) else {
                    continue;
                };
                let dx = f64::from(sx) + 0.5 - half_w;
                let dy = f64::from(sy) + 0.5 - half_h;
                // Counter-clockwise on screen (y down)
                let rx = dx * cos + dy * sin;
                let ry = -dx * sin + dy * cos;
                if let Some((px, py)) = painter.get_point(self.cx + rx, flip(self.cy + ry)) {
                    painter.paint(px, py, color);
                }
            }
        }
    }
}

fn fill(ctx: &mut Context, rect: Rect, color: Color) {
    ctx.draw(&FilledRect { rect, color });
}

/// Print text centred on `cx`, with its row containing logical `y`.
fn print_centered(
    ctx: &mut Context,
    text: String,
    cx: f64,
    y: f64,
    style: Style,
    units_per_col: f64,
) {
    let width = text.chars().count() as f64 * units_per_col;
    let x = (cx - width / 2.0).clamp(0.0, BASE_WIDTH);
    ctx.print(x, flip(y), Line::from(Span::styled(text, style)));
}

/// Render the whole frame: canvas, then the status bar beneath it.
pub fn render_game(frame: &mut Frame, game: &Game, sprite: &Sprite, viewport: &mut Viewport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(frame.size());

    let canvas_area = viewport.update(chunks[0]);
    if !viewport.is_drawable() {
        render_too_small(frame, chunks[0]);
    } else {
        let units_per_col = viewport.units_per_col();
        let canvas = Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(SKY)
            .x_bounds([0.0, BASE_WIDTH])
            .y_bounds([0.0, BASE_HEIGHT])
            .paint(|ctx| draw_scene(ctx, game, sprite, units_per_col));
        frame.render_widget(canvas, canvas_area);
    }

    let (text, color, controls) = status_for(game);
    render_status_bar(frame, chunks[1], &text, color, &controls);
}

fn draw_scene(ctx: &mut Context, game: &Game, sprite: &Sprite, units_per_col: f64) {
    draw_background(ctx, game.background());

    match game.state() {
        GameState::Menu { player } => {
            draw_ground(ctx, game.ground());
            draw_player(ctx, sprite, player);
            ctx.layer();
            print_centered(
                ctx,
                "FLAPPY BIRD".to_string(),
                BASE_WIDTH / 2.0,
                100.0,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                units_per_col,
            );
            if let Some(panel) = game.active_panel() {
                draw_panel(ctx, panel, units_per_col);
            }
        }
        GameState::CustomSettings => {
            draw_ground(ctx, game.ground());
            ctx.layer();
            print_centered(
                ctx,
                "CUSTOM SETTINGS".to_string(),
                BASE_WIDTH / 2.0,
                40.0,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                units_per_col,
            );
            for field in SettingField::ALL {
                let y = ControlPanel::setting_row_y(field);
                ctx.print(
                    20.0,
                    flip(y - 25.0),
                    Line::from(Span::styled(
                        field.label(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )),
                );
                print_centered(
                    ctx,
                    game.settings().display_value(field),
                    BASE_WIDTH / 2.0,
                    y,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    units_per_col,
                );
            }
            if let Some(panel) = game.active_panel() {
                draw_panel(ctx, panel, units_per_col);
            }
        }
        GameState::Playing(session) => {
            draw_obstacles(ctx, session.obstacles.iter());
            draw_player(ctx, sprite, &session.player);
            draw_ground(ctx, game.ground());
            ctx.layer();
            print_centered(
                ctx,
                session.score.to_string(),
                BASE_WIDTH / 2.0,
                50.0,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                units_per_col,
            );
        }
        GameState::Falling(session) => {
            draw_obstacles(ctx, session.obstacles.iter());
            draw_ground(ctx, game.ground());
            draw_player(ctx, sprite, &session.player);
        }
        GameState::GameOver(session) => {
            draw_obstacles(ctx, session.obstacles.iter());
            draw_ground(ctx, game.ground());
            draw_player(ctx, sprite, &session.player);
            fill(ctx, Rect::new(60.0, 120.0, 280.0, 310.0), PANEL);
            ctx.layer();
            print_centered(
                ctx,
                "GAME OVER".to_string(),
                BASE_WIDTH / 2.0,
                150.0,
                Style::default().fg(GAME_OVER_RED).add_modifier(Modifier::BOLD),
                units_per_col,
            );
            print_centered(
                ctx,
                format!("Score: {}", session.score),
                BASE_WIDTH / 2.0,
                220.0,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                units_per_col,
            );
            print_centered(
                ctx,
                format!("Best: {}", game.best_score()),
                BASE_WIDTH / 2.0,
                260.0,
                Style::default().fg(Color::Gray),
                units_per_col,
            );
            if let Some(panel) = game.active_panel() {
                draw_panel(ctx, panel, units_per_col);
            }
        }
    }
}

fn draw_background(ctx: &mut Context, background: &Background) {
    for offset in background.copies() {
        ctx.draw(&Disc {
            x: background.moon.x + offset,
            y: background.moon.y,
            radius: MOON_RADIUS,
            color: MOON,
        });
        for star in &background.stars {
            fill(ctx, Rect::new(star.x + offset, star.y, 2.0, 2.0), STAR);
        }
        for building in &background.buildings {
            let rect = Rect {
                x: building.rect.x + offset,
                ..building.rect
            };
            fill(ctx, rect, BUILDING);
            for window in &building.windows {
                fill(ctx, Rect { x: window.x + offset, ..*window }, WINDOW);
            }
        }
    }
}

fn draw_ground(ctx: &mut Context, ground: &Ground) {
    fill(ctx, Rect::new(0.0, ground.y, BASE_WIDTH, GROUND_HEIGHT), GROUND);
    for x in ground.stripes() {
        ctx.draw(&CanvasLine {
            x1: x,
            y1: flip(ground.y),
            x2: x - GROUND_STRIPE_SPACING / 2.0,
            y2: flip(BASE_HEIGHT),
            color: GROUND_HATCH,
        });
    }
    fill(ctx, Rect::new(0.0, ground.y, BASE_WIDTH, 5.0), GROUND_TOP);
}

fn draw_obstacles<'a>(ctx: &mut Context, obstacles: impl Iterator<Item = &'a Obstacle>) {
    let floor = BASE_HEIGHT - GROUND_HEIGHT;
    for obstacle in obstacles {
        // Upper barrier: body from the top, cap at the gap edge
        draw_pipe_body(ctx, obstacle.x, 0.0, obstacle.gap_top - PIPE_CAP_HEIGHT);
        draw_pipe_cap(ctx, obstacle.x, obstacle.gap_top - PIPE_CAP_HEIGHT);

        // Lower barrier: cap at the gap edge, body down to the ground
        let top = obstacle.gap_bottom();
        draw_pipe_body(ctx, obstacle.x, top + PIPE_CAP_HEIGHT, floor - top - PIPE_CAP_HEIGHT);
        draw_pipe_cap(ctx, obstacle.x, top);
    }
}

fn draw_pipe_body(ctx: &mut Context, x: f64, y: f64, height: f64) {
    if height <= 0.0 {
        return;
    }
    let body = Rect::new(x + PIPE_BODY_INSET, y, PIPE_WIDTH - 2.0 * PIPE_BODY_INSET, height);
    fill(ctx, body, PIPE_DARK);
    fill(ctx, Rect::new(body.x + 4.0, y, 8.0, height), PIPE_LIGHT);
    fill(ctx, Rect::new(body.right() - 10.0, y, 6.0, height), PIPE_SHADOW);
}

fn draw_pipe_cap(ctx: &mut Context, x: f64, y: f64) {
    fill(ctx, Rect::new(x, y, PIPE_WIDTH, PIPE_CAP_HEIGHT), PIPE_DARK);
    fill(ctx, Rect::new(x + 4.0, y, 8.0, PIPE_CAP_HEIGHT), PIPE_LIGHT);
    fill(ctx, Rect::new(x + 16.0, y, 4.0, PIPE_CAP_HEIGHT), PIPE_LIGHT);
    fill(ctx, Rect::new(x + PIPE_WIDTH - 10.0, y, 6.0, PIPE_CAP_HEIGHT), PIPE_SHADOW);
}

fn draw_player(ctx: &mut Context, sprite: &Sprite, player: &Player) {
    let center = player.bounds().center();
    ctx.draw(&SpriteShape {
        sprite,
        cx: center.x,
        cy: center.y,
        angle: player.angle,
    });
}

fn draw_panel(ctx: &mut Context, panel: &ControlPanel, units_per_col: f64) {
    for control in &panel.controls {
        draw_control(ctx, control, units_per_col);
    }
}

fn draw_control(ctx: &mut Context, control: &ControlElement, units_per_col: f64) {
    let rect = control.drawn_rect();
    fill(ctx, Rect { y: rect.y + 4.0, ..rect }, BUTTON_SHADOW);
    let color = if control.hovered { BUTTON_HOVER } else { BUTTON };
    fill(ctx, rect, color);
    let center = rect.center();
    let label = match control.hotkey {
        Some(key) if control.label.len() > 1 => format!("{} ({})", control.label, key),
        _ => control.label.to_string(),
    };
    print_centered(
        ctx,
        label,
        center.x,
        center.y,
        Style::default().fg(TEXT_DARK).add_modifier(Modifier::BOLD),
        units_per_col,
    );
}
