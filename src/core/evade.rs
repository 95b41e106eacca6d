use super::constants::{EDGE_PADDING, NO_LERP, PUSH_OVERSHOOT, RUN_AWAY_DISTANCE};
use super::geometry::{clamp_point, distance, Rect};
use glam::Vec2;

/// Tuning for the dismissive control's pointer repulsion.
#[derive(Clone, Copy, Debug)]
pub struct EvadeParams {
    /// Pointer distance to the control center that triggers repulsion.
    pub trigger_distance: f32,
    /// Extra push past the trigger radius.
    pub overshoot: f32,
    /// Minimum gap kept between the control and the viewport edges.
    pub edge_padding: f32,
    /// Per-frame interpolation factor toward the target, in (0, 1].
    pub smoothing: f32,
}

impl Default for EvadeParams {
    fn default() -> Self {
        Self {
            trigger_distance: RUN_AWAY_DISTANCE,
            overshoot: PUSH_OVERSHOOT,
            edge_padding: EDGE_PADDING,
            smoothing: NO_LERP,
        }
    }
}

/// Pointer-repulsion state for the dismissive control.
///
/// Positions are viewport-space top-left coordinates. The controller only
/// computes; the caller reads `current_top_left` each frame and renders it
/// however it likes, so none of this needs a live layout to test.
#[derive(Clone, Debug)]
pub struct EvadeController {
    pub params: EvadeParams,
    pointer: Vec2,
    half_extent: Vec2,
    current: Vec2,
    target: Vec2,
    initialized: bool,
    floating: bool,
}

impl EvadeController {
    pub fn new(params: EvadeParams) -> Self {
        Self {
            params,
            pointer: Vec2::ZERO,
            half_extent: Vec2::ZERO,
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            initialized: false,
            floating: false,
        }
    }

    /// Feed a pointer position while the choice view is active. `rect` is the
    /// control's current rendered rectangle, `viewport` the window size in
    /// the same coordinates.
    pub fn pointer_moved(&mut self, pointer: Vec2, rect: Rect, viewport: Vec2) {
        self.pointer = pointer;
        if !self.initialized {
            self.capture(rect);
        }

        let center = self.current + self.half_extent;
        let dist = distance(pointer, center);
        if dist >= self.params.trigger_distance {
            return;
        }

        let push = (self.params.trigger_distance - dist) + self.params.overshoot;
        let candidate_center = center + away_direction(pointer, center) * push;

        if !self.floating {
            // Leave document flow without a visual jump: adopt the rendered
            // position as both current and target before retargeting.
            self.current = rect.pos;
            self.target = rect.pos;
            self.floating = true;
        }

        let lo = Vec2::splat(self.params.edge_padding);
        let hi = viewport - rect.size - lo;
        self.target = clamp_point(candidate_center - self.half_extent, lo, hi);
    }

    /// One render-loop step of the smoothing interpolation.
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.params.smoothing;
    }

    #[inline]
    pub fn current_top_left(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn target_top_left(&self) -> Vec2 {
        self.target
    }

    /// Whether the control has left its normal layout position.
    #[inline]
    pub fn is_floating(&self) -> bool {
        self.floating
    }

    fn capture(&mut self, rect: Rect) {
        self.half_extent = rect.half_extent();
        self.current = rect.pos;
        self.target = rect.pos;
        self.initialized = true;
    }
}

/// Unit vector pointing from the pointer toward the control center. A
/// coincident pointer has no direction of its own; it pushes along (-1, 0).
fn away_direction(pointer: Vec2, center: Vec2) -> Vec2 {
    let delta = center - pointer;
    if delta.length_squared() > 0.0 {
        delta.normalize()
    } else {
        Vec2::new(-1.0, 0.0)
    }
}
