//! Liquid splash droplets.
//!
//! Each droplet loops through `Idle → Armed → Animating → Armed …`. Launches
//! are scheduled as absolute clock timestamps rather than timers, so the
//! whole system is driven by [`LiquidParticleSystem::update`] alone and can be
//! fast-forwarded in tests.

use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// Vertical arc factor for a launch progress in `[0, 1]`.
///
/// Zero at both ends and 1 at `progress = 0.5`.
#[inline]
pub fn rise_fall(progress: f32) -> f32 {
    (progress.clamp(0.0, 1.0) * PI).sin().max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LiquidPhase {
    Idle,
    /// Waiting for the clock to reach `at`.
    Armed { at: f32 },
    Animating { start: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropletTint {
    Gold,
    DarkGold,
}

impl DropletTint {
    pub fn rgb(self) -> [f32; 3] {
        match self {
            DropletTint::Gold => hex_to_rgb(GOLD_HEX),
            DropletTint::DarkGold => hex_to_rgb(DARK_GOLD_HEX),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiquidPose {
    pub position: Vec3,
    pub scale: f32,
}

#[derive(Clone, Debug)]
pub struct LiquidParticle {
    /// Home position on the XZ plane.
    pub home: Vec2,
    /// Progress per second of a launch arc.
    pub speed: f32,
    /// Offset from the batch launch time.
    pub delay_sec: f32,
    pub phase: f32,
    pub amplitude: f32,
    /// Sphere radius.
    pub size: f32,
    pub tint: DropletTint,
    pub state: LiquidPhase,
    pub pose: LiquidPose,
}

impl LiquidParticle {
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, LiquidPhase::Animating { .. })
    }
}

/// Pool of splash droplets with a one-way capacity.
pub struct LiquidParticleSystem {
    particles: Vec<LiquidParticle>,
    capacity: usize,
    rng: StdRng,
}

impl LiquidParticleSystem {
    /// Create `count` droplets with randomized parameters. Droplet `i` is
    /// delayed by `i * stagger_ms` within a batch launch.
    pub fn new(count: usize, stagger_ms: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = LIQUID_HOME_SPAN * 0.5;
        let particles = (0..count)
            .map(|i| {
                let size = LIQUID_SIZE_MIN + rng.gen::<f32>() * LIQUID_SIZE_SPAN;
                let home = Vec2::new(
                    rng.gen::<f32>() * LIQUID_HOME_SPAN - half,
                    rng.gen::<f32>() * LIQUID_HOME_SPAN - half,
                );
                LiquidParticle {
                    home,
                    speed: LIQUID_SPEED_MIN + rng.gen::<f32>() * LIQUID_SPEED_SPAN,
                    delay_sec: i as f32 * stagger_ms / 1000.0,
                    phase: rng.gen::<f32>() * TAU,
                    amplitude: LIQUID_AMPLITUDE_MIN + rng.gen::<f32>() * LIQUID_AMPLITUDE_SPAN,
                    size,
                    tint: if i % 2 == 0 {
                        DropletTint::Gold
                    } else {
                        DropletTint::DarkGold
                    },
                    state: LiquidPhase::Idle,
                    pose: LiquidPose {
                        position: Vec3::new(home.x, LIQUID_HIDDEN_Y, home.y),
                        scale: 1.0,
                    },
                }
            })
            .collect();
        Self {
            particles,
            capacity: count,
            rng,
        }
    }

    /// Reset every droplet to the launch line and schedule the staggered
    /// eruption after the lead-in.
    pub fn begin(&mut self, now: f32) {
        for p in &mut self.particles {
            p.pose.position.y = LIQUID_BASE_Y;
            p.pose.scale = 1.0;
            p.state = LiquidPhase::Idle;
        }
        let launch = now + LIQUID_LEAD_IN_SEC;
        for i in 0..self.particles.len() {
            let at = launch + self.particles[i].delay_sec;
            self.arm(i, at);
        }
        log::info!(
            "[liquid] launching {} droplets at t={:.2}s",
            self.particles.len(),
            launch
        );
    }

    /// Schedule droplet `index` to start animating once the clock reaches `at`.
    pub fn arm(&mut self, index: usize, at: f32) {
        if let Some(p) = self.particles.get_mut(index) {
            p.state = LiquidPhase::Armed { at };
        }
    }

    pub fn update(&mut self, elapsed: f32) {
        for p in &mut self.particles {
            let start = match p.state {
                LiquidPhase::Idle => continue,
                LiquidPhase::Armed { at } if elapsed < at => continue,
                LiquidPhase::Armed { at } => {
                    p.state = LiquidPhase::Animating { start: at };
                    at
                }
                LiquidPhase::Animating { start } => start,
            };
            let t = elapsed - start;
            if t < 0.0 {
                continue;
            }
            let progress = (t * p.speed).clamp(0.0, 1.0);
            if progress < 1.0 {
                let arc = rise_fall(progress);
                let wobble = elapsed + p.phase;
                p.pose.position = Vec3::new(
                    p.home.x + wobble.sin() * p.amplitude,
                    LIQUID_BASE_Y + arc * LIQUID_RISE_HEIGHT,
                    p.home.y + wobble.cos() * p.amplitude,
                );
                p.pose.scale = 1.0 + arc * LIQUID_APEX_SWELL;
            } else {
                let jitter = self.rng.gen::<f32>() * LIQUID_REARM_JITTER_SEC;
                p.state = LiquidPhase::Armed {
                    at: elapsed + jitter,
                };
            }
        }
    }

    /// Permanently shrink the pool to at most `cap` droplets, dropping the
    /// tail. Returns how many droplets were removed.
    pub fn truncate(&mut self, cap: usize) -> usize {
        self.capacity = self.capacity.min(cap);
        let before = self.particles.len();
        self.particles.truncate(self.capacity);
        before - self.particles.len()
    }

    #[inline]
    pub fn particles(&self) -> &[LiquidParticle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn animating_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_animating()).count()
    }
}
