//! Ambient particle shell revolving around the vertical axis.

use crate::constants::*;
use crate::quality::PerformanceProfile;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

#[derive(Clone, Copy, Debug)]
pub struct BackgroundParticle {
    /// Position at `elapsed = 0`; never mutated.
    pub origin: Vec3,
    /// Radians per second around +Y.
    pub angular_speed: f32,
}

impl BackgroundParticle {
    /// Rendered position at `elapsed`. Pure rotation of the original x/z.
    #[inline]
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        let (s, c) = (elapsed * self.angular_speed).sin_cos();
        Vec3::new(
            self.origin.x * c - self.origin.z * s,
            self.origin.y,
            self.origin.x * s + self.origin.z * c,
        )
    }
}

/// Point cloud plus its derived render positions.
pub struct ParticleField {
    particles: Vec<BackgroundParticle>,
    positions: Vec<Vec3>,
    point_size: f32,
}

impl ParticleField {
    /// Scatter `count` points on a shell with `radius ∈ radius_range` and
    /// random angular speed in `speed_range`.
    pub fn create<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        radius_range: Range<f32>,
        speed_range: Range<f32>,
        point_size: f32,
    ) -> Self {
        let particles: Vec<BackgroundParticle> = (0..count)
            .map(|_| {
                let radius = radius_range.start
                    + rng.gen::<f32>() * (radius_range.end - radius_range.start);
                let theta = rng.gen::<f32>() * TAU;
                // acos(2u - 1) keeps the shell from bunching at the poles
                let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
                let origin = Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                );
                let angular_speed = speed_range.start
                    + rng.gen::<f32>() * (speed_range.end - speed_range.start);
                BackgroundParticle {
                    origin,
                    angular_speed,
                }
            })
            .collect();
        let positions = particles.iter().map(|p| p.origin).collect();
        Self {
            particles,
            positions,
            point_size,
        }
    }

    /// Shell sized for the given performance profile.
    pub fn for_profile<R: Rng + ?Sized>(rng: &mut R, profile: PerformanceProfile) -> Self {
        let (count, size) = match profile {
            PerformanceProfile::Standard => (BACKGROUND_COUNT, BACKGROUND_POINT_SIZE),
            PerformanceProfile::Low => (BACKGROUND_COUNT / 2, BACKGROUND_POINT_SIZE_LOW),
        };
        Self::create(
            rng,
            count,
            BACKGROUND_RADIUS_MIN..BACKGROUND_RADIUS_MIN + BACKGROUND_RADIUS_SPAN,
            BACKGROUND_SPEED_MIN..BACKGROUND_SPEED_MAX,
            size,
        )
    }

    pub fn update(&mut self, elapsed: f32) {
        for (out, p) in self.positions.iter_mut().zip(&self.particles) {
            *out = p.position_at(elapsed);
        }
    }

    #[inline]
    pub fn particles(&self) -> &[BackgroundParticle] {
        &self.particles
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
