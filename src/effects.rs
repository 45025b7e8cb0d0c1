//! Particle and floating-text effects.
//!
//! Runs on the animation clock, independently of the game clock. The game
//! logic only feeds it [`Spawn`] requests; nothing here is read back by the
//! simulation.

use glam::Vec2;
use rand::Rng;

use crate::entities::{Particle, Rgb, Spawn, TextAnimation};

// ── Tuning ────────────────────────────────────────────────────────────────────

/// Each velocity component is drawn from `-PARTICLE_SPEED..=PARTICLE_SPEED`.
pub const PARTICLE_SPEED: f32 = 3.0;
pub const PARTICLE_LIFE: u32 = 20;
pub const PARTICLE_MIN_SIZE: f32 = 2.0;
pub const PARTICLE_MAX_SIZE: f32 = 4.0;
/// Added to the vertical velocity every frame (screen y grows downward).
pub const GRAVITY: f32 = 0.2;
pub const SIZE_DECAY: f32 = 0.98;

pub const TEXT_VELOCITY: f32 = -2.0;
pub const TEXT_LIFE: u32 = 30;
pub const TEXT_BASE_SIZE: f32 = 16.0;

// ── Effect system ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct EffectSystem {
    particles: Vec<Particle>,
    texts: Vec<TextAnimation>,
}

impl EffectSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn texts(&self) -> &[TextAnimation] {
        &self.texts
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.texts.is_empty()
    }

    pub fn spawn_particle_burst(&mut self, rng: &mut impl Rng, at: Vec2, color: Rgb, count: usize) {
        self.particles.extend((0..count).map(|_| Particle {
            pos: at,
            vel: Vec2::new(
                rng.gen_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
                rng.gen_range(-PARTICLE_SPEED..=PARTICLE_SPEED),
            ),
            life: PARTICLE_LIFE,
            color,
            size: rng.gen_range(PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE),
        }));
    }

    pub fn spawn_floating_text(&mut self, text: impl Into<String>, at: Vec2, color: Rgb) {
        self.texts.push(TextAnimation {
            text: text.into(),
            pos: at,
            vy: TEXT_VELOCITY,
            life: TEXT_LIFE,
            color,
            base_size: TEXT_BASE_SIZE,
        });
    }

    pub fn apply(&mut self, rng: &mut impl Rng, spawn: Spawn) {
        match spawn {
            Spawn::Burst { at, color, count } => self.spawn_particle_burst(rng, at, color, count),
            Spawn::Text { text, at, color } => self.spawn_floating_text(text, at, color),
        }
    }

    /// One animation frame. Every effect moves on its own; they never interact.
    pub fn advance(&mut self) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.vel.y += GRAVITY;
            p.life = p.life.saturating_sub(1);
            p.size *= SIZE_DECAY;
        }
        self.particles.retain(|p| p.life > 0);

        for t in self.texts.iter_mut() {
            t.pos.y += t.vy;
            t.life = t.life.saturating_sub(1);
        }
        self.texts.retain(|t| t.life > 0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.texts.clear();
    }
}

impl TextAnimation {
    /// Current font size: shrinks linearly as the label fades out.
    pub fn current_size(&self) -> f32 {
        self.base_size * self.life as f32 / TEXT_LIFE as f32
    }
}

// ── Pulse / shimmer phases ────────────────────────────────────────────────────

/// Oscillators derived from the animation-frame counter, consumed by the
/// renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationPhases {
    /// 0.5..=1.0
    pub food_pulse: f32,
    /// 0.7..=1.0
    pub snake_shimmer: f32,
    /// 0.6..=1.0
    pub power_up_pulse: f32,
    /// The snake's eyes are closed on this frame.
    pub blink: bool,
    pub frame: u64,
}

impl AnimationPhases {
    pub fn at(frame: u64) -> Self {
        let f = frame as f32;
        Self {
            food_pulse: (f * 0.2).sin().abs() * 0.5 + 0.5,
            snake_shimmer: (f * 0.1).sin().abs() * 0.3 + 0.7,
            power_up_pulse: (f * 0.3).sin().abs() * 0.4 + 0.6,
            blink: frame % 60 > 55,
            frame,
        }
    }

    /// Per-segment shimmer for body segment `index`.
    pub fn body_shimmer(&self, index: usize) -> f32 {
        (self.frame as f32 * 0.1 + index as f32 * 0.3).sin().abs() * 0.2 + 0.8
    }

    /// Fast flicker used for the head while invincible.
    pub fn invincible_flicker(&self) -> f32 {
        (self.frame as f32 * 0.5).sin().abs()
    }
}
