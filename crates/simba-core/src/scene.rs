//! Intro scene context.
//!
//! Owns every piece of per-frame state of the intro animation and advances
//! it in a fixed order: clock, tweens, can spin, background, liquid, quality.
//! Nothing here touches a GPU or the DOM; the web frontend reads the result
//! after each [`SceneContext::frame`] and draws it.

use crate::background::ParticleField;
use crate::clock::{Clock, Tick};
use crate::constants::*;
use crate::gpu::{push_background, push_intro_can, push_liquid, BlobShadow, DrawList, SceneUniforms};
use crate::lighting::{intro_rig, LightRig};
use crate::liquid::LiquidParticleSystem;
use crate::quality::{PerformanceProfile, QualityController, QualityEvent, RenderSettings};
use crate::state::{Camera, Viewport};
use crate::theme::{apply_theme, Theme, ThemeParams};
use crate::tween::{Change, Easing, TweenEngine, TweenError, TweenId, TweenSpec, Tweenable};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tunables for building the intro scene.
#[derive(Clone, Debug)]
pub struct IntroConfig {
    pub profile: PerformanceProfile,
    pub liquid_count: usize,
    pub liquid_stagger_ms: f32,
    pub seed: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self::for_profile(PerformanceProfile::Standard, 42)
    }
}

impl IntroConfig {
    pub fn for_profile(profile: PerformanceProfile, seed: u64) -> Self {
        let (liquid_count, liquid_stagger_ms) = match profile {
            PerformanceProfile::Standard => (LIQUID_COUNT, LIQUID_STAGGER_MS),
            PerformanceProfile::Low => (LIQUID_COUNT_LOW, LIQUID_STAGGER_MS_LOW),
        };
        Self {
            profile,
            liquid_count,
            liquid_stagger_ms,
            seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanState {
    pub position: Vec3,
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for CanState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, CAN_START_Y, 0.0),
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Animatable fields of the intro scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneProp {
    CanX,
    CanY,
    CanZ,
    CanYaw,
    CanScale,
}

/// Scene objects a tween may write to.
#[derive(Clone, Debug, Default)]
pub struct SceneObjects {
    pub can: CanState,
}

impl Tweenable for SceneObjects {
    type Key = SceneProp;

    fn get(&self, key: SceneProp) -> Option<f32> {
        Some(match key {
            SceneProp::CanX => self.can.position.x,
            SceneProp::CanY => self.can.position.y,
            SceneProp::CanZ => self.can.position.z,
            SceneProp::CanYaw => self.can.rotation.y,
            SceneProp::CanScale => self.can.scale,
        })
    }

    fn set(&mut self, key: SceneProp, value: f32) {
        match key {
            SceneProp::CanX => self.can.position.x = value,
            SceneProp::CanY => self.can.position.y = value,
            SceneProp::CanZ => self.can.position.z = value,
            SceneProp::CanYaw => self.can.rotation.y = value,
            SceneProp::CanScale => self.can.scale = value,
        }
    }
}

/// What happened during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub tick: Tick,
    pub quality: Option<QualityEvent>,
}

pub struct SceneContext {
    clock: Clock,
    pub background: ParticleField,
    pub liquid: LiquidParticleSystem,
    pub tweens: TweenEngine<SceneProp>,
    pub objects: SceneObjects,
    pub camera: Camera,
    quality: QualityController,
    profile: PerformanceProfile,
    theme: Theme,
    params: ThemeParams,
    viewport: Viewport,
    intro_started: bool,
}

impl SceneContext {
    pub fn new(config: IntroConfig, theme: Theme) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let background = ParticleField::for_profile(&mut rng, config.profile);
        let liquid =
            LiquidParticleSystem::new(config.liquid_count, config.liquid_stagger_ms, rng.gen());
        log::info!(
            "[scene] profile={:?} background={} liquid={}",
            config.profile,
            background.len(),
            liquid.len()
        );
        Self {
            clock: Clock::new(),
            background,
            liquid,
            tweens: TweenEngine::new(),
            objects: SceneObjects::default(),
            camera: Camera::new(
                Vec3::new(0.0, 0.0, CAMERA_Z),
                Vec3::ZERO,
                INTRO_FOVY_DEG,
                CAMERA_NEAR,
                CAMERA_FAR,
            ),
            quality: QualityController::new(config.profile),
            profile: config.profile,
            theme,
            params: apply_theme(theme),
            viewport: Viewport::default(),
            intro_started: false,
        }
    }

    /// Start the liquid eruption and schedule the can rise. Repeated calls
    /// are ignored.
    pub fn on_loading_complete(&mut self) -> Result<(), TweenError> {
        if self.intro_started {
            return Ok(());
        }
        self.intro_started = true;
        let now = self.clock.elapsed();
        self.liquid.begin(now);
        self.rise_can(now)?;
        Ok(())
    }

    fn rise_can(&mut self, now: f32) -> Result<TweenId, TweenError> {
        let spec = TweenSpec::new(
            vec![(SceneProp::CanY, Change::To(CAN_REST_Y))],
            CAN_RISE_DURATION_SEC,
        )
        .eased(Easing::QuadOut)
        .delayed(CAN_RISE_DELAY_SEC);
        self.tweens.animate(&mut self.objects, spec, now)
    }

    /// Advance one presented frame using wall-clock time.
    pub fn frame(&mut self) -> FrameReport {
        let tick = self.clock.tick();
        self.step(tick)
    }

    /// Advance one frame by an explicit delta.
    pub fn frame_with(&mut self, delta: f32) -> FrameReport {
        let tick = self.clock.advance(delta);
        self.step(tick)
    }

    fn step(&mut self, tick: Tick) -> FrameReport {
        let elapsed = tick.elapsed;
        self.tweens.step(elapsed, &mut self.objects);
        self.objects.can.rotation.y += CAN_SPIN_RAD_PER_SEC * tick.delta;
        self.background.update(elapsed);
        self.liquid.update(elapsed);
        let quality = self.quality.sample(elapsed);
        if let Some(QualityEvent::Degraded { .. }) = quality {
            self.reduce_liquid_particles();
        }
        FrameReport { tick, quality }
    }

    /// Drop liquid droplets beyond the degraded cap. Idempotent.
    pub fn reduce_liquid_particles(&mut self) -> usize {
        let removed = self.liquid.truncate(DEGRADED_LIQUID_CAP);
        if removed > 0 {
            log::info!(
                "[quality] removed {} liquid droplets, {} remain",
                removed,
                self.liquid.len()
            );
        }
        removed
    }

    /// Write the theme's parameter table onto the scene.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.params = apply_theme(theme);
    }

    /// Re-derive aspect and pixel sizes from new CSS dimensions.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        let max_ratio = self.render_settings().max_pixel_ratio;
        self.viewport = Viewport::new(width, height, device_pixel_ratio, max_ratio);
        self.camera.aspect = self.viewport.aspect();
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings::resolve(&self.params, self.quality.state(), self.profile)
    }

    pub fn lights(&self) -> LightRig {
        intro_rig(&self.params)
    }

    /// Rebuild this frame's instances from the live pools.
    pub fn draw_list(&self, list: &mut DrawList) {
        list.clear();
        push_intro_can(list, &self.objects.can);
        push_liquid(list, &self.liquid);
        push_background(list, &self.background);
    }

    pub fn uniforms(&self) -> SceneUniforms {
        let shadow = if self.render_settings().shadows {
            BlobShadow::under_can(&self.objects.can)
        } else {
            None
        };
        SceneUniforms::new(
            &self.camera,
            &self.lights(),
            self.params.fog_color,
            self.params.fog_density,
            shadow,
        )
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[inline]
    pub fn theme_params(&self) -> &ThemeParams {
        &self.params
    }

    #[inline]
    pub fn quality(&self) -> &QualityController {
        &self.quality
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    #[inline]
    pub fn intro_started(&self) -> bool {
        self.intro_started
    }
}
