//! Frame-rate driven quality downgrade.
//!
//! The controller is a one-way valve: once degraded it never upgrades again,
//! even if the frame rate recovers.

use crate::constants::*;

/// Device class detected once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PerformanceProfile {
    #[default]
    Standard,
    Low,
}

impl PerformanceProfile {
    /// Mobile user agents and displays below 2x density are treated as low end.
    pub fn detect(user_agent: &str, device_pixel_ratio: f64) -> Self {
        const MOBILE_MARKERS: [&str; 8] = [
            "Android",
            "webOS",
            "iPhone",
            "iPad",
            "iPod",
            "BlackBerry",
            "IEMobile",
            "Opera Mini",
        ];
        let ua = user_agent.to_ascii_lowercase();
        let mobile = MOBILE_MARKERS
            .iter()
            .any(|m| ua.contains(&m.to_ascii_lowercase()));
        if mobile || device_pixel_ratio < 2.0 {
            PerformanceProfile::Low
        } else {
            PerformanceProfile::Standard
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QualityState {
    #[default]
    Normal,
    Degraded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityEvent {
    /// Emitted exactly once, on the Normal → Degraded transition.
    Degraded { fps: u32 },
}

/// Rolling one-second frame counter.
#[derive(Clone, Debug, Default)]
pub struct FpsMeter {
    frame_count: u32,
    window_start: f32,
    fps: Option<u32>,
}

impl FpsMeter {
    /// Count a frame at `elapsed`. Returns the finished window's frame count
    /// when a window boundary is crossed.
    pub fn record(&mut self, elapsed: f32) -> Option<u32> {
        self.frame_count += 1;
        if elapsed - self.window_start >= FPS_WINDOW_SEC {
            let fps = self.frame_count;
            self.fps = Some(fps);
            self.frame_count = 0;
            self.window_start = elapsed;
            return Some(fps);
        }
        None
    }

    /// Last completed window, if any.
    #[inline]
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }
}

pub struct QualityController {
    state: QualityState,
    meter: FpsMeter,
    threshold: u32,
}

impl QualityController {
    /// Low-end devices start degraded, so the valve never fires for them.
    /// Their render settings only lose shadows; see [`RenderSettings::resolve`].
    pub fn new(profile: PerformanceProfile) -> Self {
        Self {
            state: match profile {
                PerformanceProfile::Standard => QualityState::Normal,
                PerformanceProfile::Low => QualityState::Degraded,
            },
            meter: FpsMeter::default(),
            threshold: FPS_DEGRADE_THRESHOLD,
        }
    }

    /// Record one frame and evaluate the transition rule at window ends.
    pub fn sample(&mut self, elapsed: f32) -> Option<QualityEvent> {
        let fps = self.meter.record(elapsed)?;
        if fps < self.threshold && self.state == QualityState::Normal {
            self.state = QualityState::Degraded;
            log::warn!("[quality] {} fps below {}; degrading", fps, self.threshold);
            return Some(QualityEvent::Degraded { fps });
        }
        None
    }

    #[inline]
    pub fn state(&self) -> QualityState {
        self.state
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.state == QualityState::Degraded
    }

    #[inline]
    pub fn fps(&self) -> Option<u32> {
        self.meter.fps()
    }
}

/// Effective renderer configuration after theme and quality are combined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    pub shadows: bool,
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub bloom_threshold: f32,
    pub exposure: f32,
    /// Cap applied to the device pixel ratio.
    pub max_pixel_ratio: f32,
    pub fxaa: bool,
}

impl RenderSettings {
    pub fn resolve(
        theme: &crate::theme::ThemeParams,
        state: QualityState,
        profile: PerformanceProfile,
    ) -> Self {
        let degraded = state == QualityState::Degraded;
        // Low devices start degraded without a runtime transition: shadows
        // stay off but bloom keeps the theme values.
        let bloom_cut = degraded && profile == PerformanceProfile::Standard;
        let (bloom_strength, bloom_radius) = if bloom_cut {
            (DEGRADED_BLOOM_STRENGTH, DEGRADED_BLOOM_RADIUS)
        } else {
            (theme.bloom_strength, theme.bloom_radius)
        };
        Self {
            shadows: !degraded,
            bloom_strength,
            bloom_radius,
            bloom_threshold: BLOOM_THRESHOLD,
            exposure: theme.exposure,
            max_pixel_ratio: match profile {
                PerformanceProfile::Standard => f32::INFINITY,
                PerformanceProfile::Low => 1.0,
            },
            fxaa: true,
        }
    }
}
