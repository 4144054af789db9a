//! Letterboxing the logical canvas into the terminal, and mapping pointer
//! cells back to canvas coordinates.

use crate::core::constants::{
    BASE_HEIGHT, BASE_WIDTH, CELL_HEIGHT_UNITS, CELL_WIDTH_UNITS, MIN_CANVAS_COLS, MIN_CANVAS_ROWS,
};
use crate::game::geometry::Point;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub fullscreen: bool,
    /// Cells the canvas occupied on the last draw.
    pub canvas: Rect,
}

impl Viewport {
    pub fn new(fullscreen: bool) -> Self {
        Self {
            fullscreen,
            canvas: Rect::default(),
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    /// Scale factor from logical units to the terminal's "pixel" units.
    /// Windowed mode never magnifies; fullscreen fills the terminal.
    pub fn scale(&self, area: Rect) -> f64 {
        let fit_x = f64::from(area.width) * CELL_WIDTH_UNITS / BASE_WIDTH;
        let fit_y = f64::from(area.height) * CELL_HEIGHT_UNITS / BASE_HEIGHT;
        let fit = fit_x.min(fit_y);
        if self.fullscreen {
            fit
        } else {
            fit.min(1.0)
        }
    }

    /// Centered, aspect-preserving canvas rectangle inside `area`.
    pub fn layout(&self, area: Rect) -> Rect {
        let scale = self.scale(area);
        let width = ((BASE_WIDTH * scale / CELL_WIDTH_UNITS) as u16).min(area.width);
        let height = ((BASE_HEIGHT * scale / CELL_HEIGHT_UNITS) as u16).min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Recompute and remember the canvas rectangle for this frame.
    pub fn update(&mut self, area: Rect) -> Rect {
        self.canvas = self.layout(area);
        self.canvas
    }

    pub fn is_drawable(&self) -> bool {
        self.canvas.width >= MIN_CANVAS_COLS && self.canvas.height >= MIN_CANVAS_ROWS
    }

    /// Logical coordinates of the centre of a terminal cell. Cells outside the
    /// canvas map outside `[0, BASE_WIDTH) x [0, BASE_HEIGHT)`.
    pub fn to_logical(&self, col: u16, row: u16) -> Option<Point> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return None;
        }
        let units_x = BASE_WIDTH / f64::from(self.canvas.width);
        let units_y = BASE_HEIGHT / f64::from(self.canvas.height);
        let dx = f64::from(col) - f64::from(self.canvas.x) + 0.5;
        let dy = f64::from(row) - f64::from(self.canvas.y) + 0.5;
        Some(Point::new(dx * units_x, dy * units_y))
    }

    /// Logical width covered by one terminal column (for centering text).
    pub fn units_per_col(&self) -> f64 {
        if self.canvas.width == 0 {
            CELL_WIDTH_UNITS
        } else {
            BASE_WIDTH / f64::from(self.canvas.width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn test_windowed_uses_native_size() {
        let mut viewport = Viewport::new(false);
        let canvas = viewport.update(area(120, 50));
        assert_eq!((canvas.width, canvas.height), (40, 30));
        assert_eq!((canvas.x, canvas.y), (40, 10));
        assert!(viewport.is_drawable());
    }

    #[test]
    fn test_fullscreen_fills_height() {
        let mut viewport = Viewport::new(true);
        let canvas = viewport.update(area(200, 60));
        assert_eq!((canvas.width, canvas.height), (80, 60));
        assert_eq!(canvas.x, 60);
        assert_eq!(canvas.y, 0);
    }

    #[test]
    fn test_windowed_shrinks_in_small_terminal() {
        let mut viewport = Viewport::new(false);
        let canvas = viewport.update(area(80, 15));
        assert_eq!((canvas.width, canvas.height), (20, 15));
    }

    #[test]
    fn test_toggle() {
        let mut viewport = Viewport::new(false);
        viewport.toggle_fullscreen();
        assert!(viewport.fullscreen);
        viewport.exit_fullscreen();
        assert!(!viewport.fullscreen);
        viewport.exit_fullscreen();
        assert!(!viewport.fullscreen);
    }

    #[test]
    fn test_pointer_maps_to_cell_centre() {
        let mut viewport = Viewport::new(false);
        viewport.update(area(120, 50));
        let top_left = viewport.to_logical(40, 10).unwrap();
        assert_eq!(top_left, Point::new(5.0, 10.0));
        let centre = viewport.to_logical(60, 25).unwrap();
        assert_eq!(centre, Point::new(205.0, 310.0));
        let outside = viewport.to_logical(0, 0).unwrap();
        assert!(outside.x < 0.0 && outside.y < 0.0);
    }

    #[test]
    fn test_too_small() {
        let mut viewport = Viewport::new(true);
        viewport.update(area(10, 5));
        assert!(!viewport.is_drawable());
    }

    #[test]
    fn test_unlaid_viewport_has_no_mapping() {
        assert_eq!(Viewport::new(false).to_logical(1, 1), None);
    }
}
