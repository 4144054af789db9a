//! Axis-aligned rectangles in logical canvas units (y grows downward).

/// A point on the logical canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grow (positive) or shrink (negative) by the given totals, keeping the centre.
    /// Shrinking never produces a negative size.
    pub fn inflate(&self, dx: f64, dy: f64) -> Self {
        Self::from_center(
            self.center(),
            (self.width + dx).max(0.0),
            (self.height + dy).max(0.0),
        )
    }

    /// Scale about the centre.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_center(self.center(), self.width * factor, self.height * factor)
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True when the interiors overlap; rectangles that only share an edge do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_keeps_center() {
        let rect = Rect::new(25.0, 282.0, 50.0, 36.0);
        let hitbox = rect.inflate(-32.0, -20.0);
        assert_eq!(hitbox.center(), rect.center());
        assert!((hitbox.width - 18.0).abs() < f64::EPSILON);
        assert!((hitbox.height - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inflate_never_negative() {
        let hitbox = Rect::new(0.0, 0.0, 10.0, 10.0).inflate(-40.0, -40.0);
        assert_eq!(hitbox.width, 0.0);
        assert_eq!(hitbox.height, 0.0);
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(29.9, 29.9)));
        assert!(!rect.contains(Point::new(30.0, 15.0)));
        assert!(!rect.contains(Point::new(15.0, 9.9)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_scaled_about_center() {
        let rect = Rect::new(100.0, 100.0, 100.0, 40.0).scaled(1.5);
        assert_eq!(rect.center(), Point::new(150.0, 120.0));
        assert!((rect.width - 150.0).abs() < f64::EPSILON);
    }
}
