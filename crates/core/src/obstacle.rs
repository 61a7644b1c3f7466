//! Obstacle module - a scrolling barrier pair with a vertical gap
//!
//! Both rects share the obstacle sprite's size and horizontal center. The gap
//! between `upper.bottom` and `lower.top` is exactly `metrics.gap` pixels.

use crate::rng::GapSource;
use crate::types::{Rect, GAP_MARGIN, PIPE_SPEED};
use crate::WorldMetrics;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    upper: Rect,
    lower: Rect,
    gap_center_y: f32,
    passed: bool,
}

impl Obstacle {
    /// Create an obstacle at the right screen edge with a random gap.
    ///
    /// The gap center is drawn from `[GAP_MARGIN, screen_height - GAP_MARGIN - gap]`.
    pub fn new<G: GapSource + ?Sized>(metrics: &WorldMetrics, rng: &mut G) -> Self {
        let (low, high) = gap_bounds(metrics);
        let gap_center_y = rng.gap_center(low, high);
        Self::with_gap_center(metrics, gap_center_y)
    }

    /// Create an obstacle at the right screen edge with a known gap center.
    pub fn with_gap_center(metrics: &WorldMetrics, gap_center_y: i32) -> Self {
        let half_gap = (metrics.gap / 2) as f32;
        let gap_center = gap_center_y as f32;
        let spawn_x = metrics.screen_width;

        let mut upper = Rect::new(0.0, 0.0, metrics.obstacle_width, metrics.obstacle_height);
        let mut lower = upper;
        upper.set_mid_bottom(spawn_x, gap_center - half_gap);
        lower.set_mid_top(spawn_x, gap_center + half_gap);

        Self {
            upper,
            lower,
            gap_center_y: gap_center,
            passed: false,
        }
    }

    /// Scroll left by the fixed pipe speed.
    pub fn update(&mut self) {
        self.upper.x -= PIPE_SPEED;
        self.lower.x -= PIPE_SPEED;
    }

    /// True once the obstacle has fully left the screen on the left.
    pub fn offscreen(&self) -> bool {
        self.upper.right() < 0.0
    }

    /// Move both rects so their shared horizontal center is `cx`.
    pub fn set_center_x(&mut self, cx: f32) {
        self.upper.set_center_x(cx);
        self.lower.set_center_x(cx);
    }

    pub(crate) fn mark_passed(&mut self) {
        self.passed = true;
    }

    pub fn upper(&self) -> Rect {
        self.upper
    }

    pub fn lower(&self) -> Rect {
        self.lower
    }

    pub fn gap_center_y(&self) -> f32 {
        self.gap_center_y
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn intersects(&self, rect: &Rect) -> bool {
        rect.intersects(&self.upper) || rect.intersects(&self.lower)
    }
}

/// Inclusive gap-center range for the given screen and gap size.
pub fn gap_bounds(metrics: &WorldMetrics) -> (i32, i32) {
    let low = GAP_MARGIN as i32;
    let high = metrics.screen_height as i32 - GAP_MARGIN as i32 - metrics.gap as i32;
    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedGap, SimpleRng};

    fn metrics() -> WorldMetrics {
        WorldMetrics::new(34.0, 24.0, 3, 52.0, 400.0)
    }

    #[test]
    fn test_reference_gap_bounds() {
        assert_eq!(gap_bounds(&metrics()), (100, 350));
    }

    #[test]
    fn test_gap_is_exactly_gap_height() {
        let m = metrics();
        let mut rng = SimpleRng::new(42);
        for _ in 0..500 {
            let o = Obstacle::new(&m, &mut rng);
            assert_eq!(o.lower().top() - o.upper().bottom(), 150.0);
            assert!(o.gap_center_y() >= 100.0 && o.gap_center_y() <= 450.0);
        }
    }

    #[test]
    fn test_rects_anchor_at_right_edge() {
        let m = metrics();
        let o = Obstacle::with_gap_center(&m, 300);
        assert_eq!(o.upper().center_x(), 400.0);
        assert_eq!(o.lower().center_x(), 400.0);
        assert_eq!(o.upper().bottom(), 225.0);
        assert_eq!(o.lower().top(), 375.0);
        assert_eq!(o.upper().w, 52.0);
        assert_eq!(o.lower().h, 400.0);
        assert!(!o.passed());
    }

    #[test]
    fn test_injected_source_pins_gap() {
        let m = metrics();
        let o = Obstacle::new(&m, &mut FixedGap(200));
        assert_eq!(o.gap_center_y(), 200.0);
    }

    #[test]
    fn test_update_moves_both_rects_in_lockstep() {
        let m = metrics();
        let mut o = Obstacle::with_gap_center(&m, 300);
        for _ in 0..10 {
            o.update();
        }
        assert_eq!(o.upper().center_x(), 370.0);
        assert_eq!(o.lower().center_x(), 370.0);
        assert_eq!(o.upper().bottom(), 225.0);
    }

    #[test]
    fn test_offscreen_only_past_left_edge() {
        let m = metrics();
        let mut o = Obstacle::with_gap_center(&m, 300);
        // right edge exactly at 0 is still on screen
        o.set_center_x(-26.0);
        assert_eq!(o.upper().right(), 0.0);
        assert!(!o.offscreen());

        o.set_center_x(-31.0);
        assert_eq!(o.upper().right(), -5.0);
        assert!(o.offscreen());
    }
}
