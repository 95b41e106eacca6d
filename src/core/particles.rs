use super::constants::{
    BURST_COUNT_MIN, BURST_COUNT_SPAN, BURST_REGION_X_MIN, BURST_REGION_X_SPAN,
    BURST_REGION_Y_MIN, BURST_REGION_Y_SPAN, BURST_SPEED_MIN, BURST_SPEED_SPAN,
    FIREWORKS_PALETTE, PARTICLE_DECAY_MIN, PARTICLE_DECAY_SPAN, PARTICLE_GRAVITY,
    PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN,
};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One celebration spark. Lives until `life` decays to zero.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub decay: f32,
    pub radius: f32,
    pub color: &'static str,
}

/// Celebration lifecycle. Bursts are only produced while `Bursting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Bursting,
    Draining,
    Cleared,
}

#[derive(Clone, Debug)]
pub struct FireworksParams {
    pub palette: &'static [&'static str],
    pub burst_count_min: usize,
    pub burst_count_span: usize,
    pub speed_min: f32,
    pub speed_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub decay_min: f32,
    pub decay_span: f32,
    pub gravity: f32,
}

impl Default for FireworksParams {
    fn default() -> Self {
        Self {
            palette: &FIREWORKS_PALETTE,
            burst_count_min: BURST_COUNT_MIN,
            burst_count_span: BURST_COUNT_SPAN,
            speed_min: BURST_SPEED_MIN,
            speed_span: BURST_SPEED_SPAN,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_span: PARTICLE_RADIUS_SPAN,
            decay_min: PARTICLE_DECAY_MIN,
            decay_span: PARTICLE_DECAY_SPAN,
            gravity: PARTICLE_GRAVITY,
        }
    }
}

/// Particle state for the acceptance celebration. The engine owns spawning
/// and per-frame physics; burst timing and drawing live with the caller.
pub struct FireworksEngine {
    pub particles: Vec<Particle>,
    pub params: FireworksParams,
    rng: StdRng,
    phase: Phase,
}

impl FireworksEngine {
    pub fn new(params: FireworksParams, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            params,
            rng: StdRng::seed_from_u64(seed),
            phase: Phase::Idle,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn begin_bursting(&mut self) {
        self.phase = Phase::Bursting;
    }

    /// The burst window is over; existing particles keep draining.
    pub fn finish_bursting(&mut self) {
        if self.phase == Phase::Bursting {
            self.phase = Phase::Draining;
        }
    }

    /// Forced end of the celebration: drop every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.phase = Phase::Cleared;
    }

    /// Pick a burst origin inside the central region of the viewport.
    pub fn random_burst_center(&mut self, viewport: Vec2) -> Vec2 {
        let x = viewport.x * (BURST_REGION_X_MIN + self.rng.gen::<f32>() * BURST_REGION_X_SPAN);
        let y = viewport.y * (BURST_REGION_Y_MIN + self.rng.gen::<f32>() * BURST_REGION_Y_SPAN);
        Vec2::new(x, y)
    }

    /// Spawn one radial burst at `center`: a full circle of particles with
    /// per-particle angular jitter, random speed, color, radius, and fade.
    pub fn burst_at(&mut self, center: Vec2) {
        if self.phase != Phase::Bursting {
            return;
        }
        let count = self.params.burst_count_min + self.rng.gen_range(0..self.params.burst_count_span);
        for i in 0..count {
            let angle = (TAU * i as f32) / count as f32 + self.rng.gen::<f32>();
            let speed = self.params.speed_min + self.rng.gen::<f32>() * self.params.speed_span;
            let color = self.params.palette[self.rng.gen_range(0..self.params.palette.len())];
            self.particles.push(Particle {
                pos: center,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: 1.0,
                decay: self.params.decay_min + self.rng.gen::<f32>() * self.params.decay_span,
                radius: self.params.radius_min + self.rng.gen::<f32>() * self.params.radius_span,
                color,
            });
        }
    }

    /// Advance every particle one frame and drop the expired ones. Returns
    /// whether any remain.
    pub fn step(&mut self) -> bool {
        let gravity = self.params.gravity;
        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel.y += gravity;
            p.life -= p.decay;
            p.life > 0.0
        });
        !self.particles.is_empty()
    }
}
