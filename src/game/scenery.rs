//! Decorative scrolling layers: the night skyline and the ground strip.

use crate::core::constants::{
    BACKGROUND_SPEED, BASE_HEIGHT, BASE_WIDTH, GROUND_HEIGHT, GROUND_STRIPE_SPACING, STAR_COUNT,
};
use super::geometry::{Point, Rect};
use rand::Rng;

/// One skyline building and its lit windows.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub rect: Rect,
    pub windows: Vec<Rect>,
}

/// A horizontally looping skyline, generated once per run.
#[derive(Debug, Clone)]
pub struct Background {
    /// Scroll offset in `(-BASE_WIDTH, 0]`.
    pub offset: f64,
    pub moon: Point,
    pub stars: Vec<Point>,
    pub buildings: Vec<Building>,
}

pub const MOON_RADIUS: f64 = 40.0;

impl Background {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let half = (BASE_HEIGHT / 2.0) as u32;
        let stars = (0..STAR_COUNT)
            .map(|_| {
                Point::new(
                    f64::from(rng.gen_range(0..=BASE_WIDTH as u32)),
                    f64::from(rng.gen_range(0..=half)),
                )
            })
            .collect();

        let horizon = BASE_HEIGHT - GROUND_HEIGHT;
        let mut buildings = Vec::new();
        let mut x = 0.0;
        while x < BASE_WIDTH {
            let w = f64::from(rng.gen_range(30..=80u32));
            let h = f64::from(rng.gen_range(100..=300u32));
            let rect = Rect::new(x, horizon - h, w, h + GROUND_HEIGHT);

            let mut windows = Vec::new();
            let mut win_y = rect.y + 10.0;
            while win_y < rect.y + h {
                if rng.gen_bool(0.5) {
                    let win_x = x + f64::from(rng.gen_range(5..=(w as u32 - 10)));
                    windows.push(Rect::new(win_x, win_y, 5.0, 10.0));
                }
                win_y += 20.0;
            }

            buildings.push(Building { rect, windows });
            x += w;
        }

        Self {
            offset: 0.0,
            moon: Point::new(300.0, 100.0),
            stars,
            buildings,
        }
    }

    pub fn update(&mut self) {
        self.offset -= BACKGROUND_SPEED;
        if self.offset <= -BASE_WIDTH {
            self.offset = 0.0;
        }
    }

    /// Horizontal positions of the two copies drawn side by side.
    pub fn copies(&self) -> [f64; 2] {
        [self.offset, self.offset + BASE_WIDTH]
    }
}

/// The ground strip with hatch marks that scroll with the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    /// Top edge.
    pub y: f64,
    /// Hatch offset in `(-GROUND_STRIPE_SPACING, 0]`.
    pub offset: f64,
    /// Scroll per frame while playing.
    pub speed: f64,
}

impl Default for Ground {
    fn default() -> Self {
        Self {
            y: BASE_HEIGHT - GROUND_HEIGHT,
            offset: 0.0,
            speed: 3.0,
        }
    }
}

impl Ground {
    pub fn update(&mut self) {
        self.advance(self.speed);
    }

    pub fn advance(&mut self, speed: f64) {
        self.offset -= speed;
        if self.offset <= -GROUND_STRIPE_SPACING {
            self.offset = 0.0;
        }
    }

    /// Top x of each hatch mark currently visible.
    pub fn stripes(&self) -> impl Iterator<Item = f64> + '_ {
        let count = ((BASE_WIDTH + GROUND_STRIPE_SPACING) / GROUND_STRIPE_SPACING) as usize;
        (0..=count).map(move |i| self.offset + i as f64 * GROUND_STRIPE_SPACING)
    }
}
