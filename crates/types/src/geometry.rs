//! Axis-aligned geometry in logical screen pixels.
//!
//! `Rect` stores its top-left corner and size. Anchor setters (`set_center`,
//! `set_mid_bottom`, `set_mid_top`) move the rect without resizing it.

/// A 2D point in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (top-left origin, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size centered on `center`.
    pub fn centered(center: Point, w: f32, h: f32) -> Self {
        let mut r = Self::new(0.0, 0.0, w, h);
        r.set_center(center.x, center.y);
        r
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    pub fn set_center(&mut self, cx: f32, cy: f32) {
        self.x = cx - self.w / 2.0;
        self.y = cy - self.h / 2.0;
    }

    pub fn set_center_x(&mut self, cx: f32) {
        self.x = cx - self.w / 2.0;
    }

    /// Place the midpoint of the bottom edge at `(cx, bottom)`.
    pub fn set_mid_bottom(&mut self, cx: f32, bottom: f32) {
        self.x = cx - self.w / 2.0;
        self.y = bottom - self.h;
    }

    /// Place the midpoint of the top edge at `(cx, top)`.
    pub fn set_mid_top(&mut self, cx: f32, top: f32) {
        self.x = cx - self.w / 2.0;
        self.y = top;
    }

    /// Strict overlap test: rects that only share an edge do not intersect,
    /// and empty rects never intersect anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_keep_size() {
        let mut r = Rect::new(0.0, 0.0, 52.0, 400.0);
        r.set_mid_bottom(400.0, 225.0);
        assert_eq!(r.bottom(), 225.0);
        assert_eq!(r.center_x(), 400.0);
        assert_eq!(r.w, 52.0);
        assert_eq!(r.h, 400.0);

        r.set_mid_top(400.0, 375.0);
        assert_eq!(r.top(), 375.0);
        assert_eq!(r.center_x(), 400.0);
    }

    #[test]
    fn centered_rect_center_matches_point() {
        let r = Rect::centered(Point::new(100.0, 300.0), 34.0, 24.0);
        assert_eq!(r.center(), Point::new(100.0, 300.0));
        assert_eq!(r.left(), 83.0);
        assert_eq!(r.top(), 288.0);
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn empty_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let empty = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn contains_point_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(0.0, 0.0));
        assert!(r.contains_point(9.9, 9.9));
        assert!(!r.contains_point(10.0, 5.0));
    }
}
