use super::constants::{NEAR_NO_DISTANCE, YES_GROW_MAX, YES_GROW_MIN};

/// Tuning for the affirmative control's proximity growth.
#[derive(Clone, Copy, Debug)]
pub struct GrowParams {
    /// Pointer-to-dismissive-center distance at which growth starts.
    pub near_distance: f32,
    /// Resting scale.
    pub min_scale: f32,
    /// Scale at distance zero.
    pub max_scale: f32,
}

impl Default for GrowParams {
    fn default() -> Self {
        Self {
            near_distance: NEAR_NO_DISTANCE,
            min_scale: YES_GROW_MIN,
            max_scale: YES_GROW_MAX,
        }
    }
}

/// Growth factor for the affirmative control: `min_scale` at or beyond
/// `near_distance`, rising linearly to `max_scale` as the distance reaches
/// zero.
pub fn yes_scale(dist: f32, params: &GrowParams) -> f32 {
    if dist < params.near_distance {
        let t = 1.0 - dist / params.near_distance;
        params.min_scale + (params.max_scale - params.min_scale) * t
    } else {
        params.min_scale
    }
}
