//! RNG module - seeded gap placement
//!
//! Obstacle construction draws its gap position from a [`GapSource`] instead of
//! ambient global randomness, so tests can pin the gap and replays can reuse a
//! seed. [`SimpleRng`] is the default source: a small LCG that is deterministic
//! across platforms.

/// Source of vertical gap positions for new obstacles.
pub trait GapSource {
    /// Return a value uniformly distributed in `[low, high]` (inclusive).
    ///
    /// Implementations must return `low` when `high < low`.
    fn gap_center(&mut self, low: i32, high: i32) -> i32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG are weak; use the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GapSource for SimpleRng {
    fn gap_center(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high - low) as u32 + 1;
        low + self.next_range(span) as i32
    }
}

/// Always returns the same gap center (clamped into range). Handy for tests
/// and scripted demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGap(pub i32);

impl GapSource for FixedGap {
    fn gap_center(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.0.clamp(low, high)
    }
}
