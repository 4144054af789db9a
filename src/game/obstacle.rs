//! Pipe pairs: an upper and a lower barrier separated by a gap.

use super::geometry::Rect;
use super::settings::DifficultyPreset;
use crate::core::constants::{
    BASE_HEIGHT, GROUND_HEIGHT, PIPE_BODY_INSET, PIPE_BOTTOM_MARGIN, PIPE_MIN_HEIGHT, PIPE_WIDTH,
};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge of the cap.
    pub x: f64,
    /// Height of the upper barrier; the gap starts here.
    pub gap_top: f64,
    pub gap: f64,
    pub speed: f64,
    /// Set once the player has been credited for this obstacle.
    pub passed: bool,
}

/// Largest upper-barrier height that still leaves the whole gap above the ground.
pub fn max_gap_top(gap_size: u32) -> u32 {
    let max = BASE_HEIGHT - GROUND_HEIGHT - f64::from(gap_size) - PIPE_BOTTOM_MARGIN;
    (max.max(0.0) as u32).max(PIPE_MIN_HEIGHT)
}

impl Obstacle {
    /// Spawn at `x` with a uniformly random upper-barrier height.
    pub fn spawn<R: Rng>(x: f64, preset: &DifficultyPreset, rng: &mut R) -> Self {
        let gap_top = rng.gen_range(PIPE_MIN_HEIGHT..=max_gap_top(preset.gap_size));
        Self {
            x,
            gap_top: f64::from(gap_top),
            gap: preset.gap(),
            speed: preset.speed(),
            passed: false,
        }
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    /// Top of the lower barrier.
    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap
    }

    /// Collision area of the upper barrier (body width, cap excluded).
    pub fn upper_rect(&self) -> Rect {
        Rect::new(
            self.x + PIPE_BODY_INSET,
            0.0,
            PIPE_WIDTH - 2.0 * PIPE_BODY_INSET,
            self.gap_top,
        )
    }

    /// Collision area of the lower barrier, extended past the bottom of the screen.
    pub fn lower_rect(&self) -> Rect {
        Rect::new(
            self.x + PIPE_BODY_INSET,
            self.gap_bottom(),
            PIPE_WIDTH - 2.0 * PIPE_BODY_INSET,
            BASE_HEIGHT,
        )
    }

    pub fn collides(&self, hitbox: &Rect) -> bool {
        hitbox.intersects(&self.upper_rect()) || hitbox.intersects(&self.lower_rect())
    }

    /// Credit the player once the obstacle's x falls behind `player_x`.
    /// Returns true only on the frame the obstacle is first passed.
    pub fn try_pass(&mut self, player_x: f64) -> bool {
        if !self.passed && self.x < player_x {
            self.passed = true;
            return true;
        }
        false
    }
}
