//! The player-controlled bird and its three update rules.

use super::geometry::{Point, Rect};
use super::settings::DifficultyPreset;
use crate::core::constants::{
    BASE_HEIGHT, DIVE_RATE, FALLING_DIVE_RATE, HITBOX_SHRINK_X, HITBOX_SHRINK_Y, HOVER_AMPLITUDE,
    HOVER_BASELINE, HOVER_TIMER_STEP, MAX_DIVE_ANGLE, MAX_FALL_SPEED, PLAYER_X, RISING_ANGLE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Fixed horizontal centre.
    pub x: f64,
    /// Vertical centre (grows downward).
    pub y: f64,
    /// Vertical velocity per frame (negative = rising).
    pub velocity: f64,
    /// Tilt in degrees, positive = nose up.
    pub angle: f64,
    /// Sprite size, which also determines the hitbox.
    pub width: f64,
    pub height: f64,
    gravity: f64,
    flap_impulse: f64,
    hover_timer: f64,
}

impl Player {
    /// A fresh player at mid-screen, at rest.
    pub fn new(preset: &DifficultyPreset, width: f64, height: f64) -> Self {
        Self {
            x: PLAYER_X,
            y: BASE_HEIGHT / 2.0,
            velocity: 0.0,
            angle: 0.0,
            width,
            height,
            gravity: preset.gravity(),
            flap_impulse: preset.flap_impulse,
            hover_timer: 0.0,
        }
    }

    /// A player used only for the menu's idle animation.
    pub fn for_menu(width: f64, height: f64) -> Self {
        let mut player = Self::new(&DifficultyPreset::MEDIUM, width, height);
        player.y = HOVER_BASELINE;
        player
    }

    /// Set velocity to the flap impulse.
    pub fn flap(&mut self) {
        self.velocity = self.flap_impulse;
    }

    /// Normal in-play physics step.
    pub fn update(&mut self) {
        self.integrate();
        if self.velocity < 0.0 {
            self.angle = RISING_ANGLE;
        } else {
            self.angle = (self.angle - DIVE_RATE).max(MAX_DIVE_ANGLE);
        }
    }

    /// Post-collision step: same gravity, faster nose-dive, no control.
    pub fn update_falling(&mut self) {
        self.integrate();
        self.angle = (self.angle - FALLING_DIVE_RATE).max(MAX_DIVE_ANGLE);
    }

    /// Idle bobbing used on the main menu.
    pub fn update_menu(&mut self) {
        self.hover_timer += HOVER_TIMER_STEP;
        self.y = HOVER_BASELINE + self.hover_timer.sin() * HOVER_AMPLITUDE;
        self.angle = 0.0;
    }

    fn integrate(&mut self) {
        self.velocity = (self.velocity + self.gravity).min(MAX_FALL_SPEED);
        self.y += self.velocity;
    }

    /// Sprite bounds, centred on the rounded position.
    pub fn bounds(&self) -> Rect {
        Rect::from_center(Point::new(self.x, self.y.trunc()), self.width, self.height)
    }

    /// Shrunken collision box.
    pub fn hitbox(&self) -> Rect {
        self.bounds().inflate(-HITBOX_SHRINK_X, -HITBOX_SHRINK_Y)
    }
}
