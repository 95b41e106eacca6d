use glam::Vec2;

/// Axis-aligned rectangle in viewport coordinates, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.size * 0.5
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.half_extent()
    }
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Clamp `p` into `[lo, hi]` per axis. An inverted interval (viewport smaller
/// than the content plus padding) collapses to the single point `lo`.
#[inline]
pub fn clamp_point(p: Vec2, lo: Vec2, hi: Vec2) -> Vec2 {
    let hi = hi.max(lo);
    p.clamp(lo, hi)
}
