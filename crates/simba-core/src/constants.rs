use glam::Vec3;

// Shared visual tuning constants used by the intro scene and the can viewer.

// Palette (sRGB hex)
pub const GOLD_HEX: u32 = 0xD4AF37;
pub const DARK_GOLD_HEX: u32 = 0x8A6E2F;
pub const DARK_BACKGROUND_HEX: u32 = 0x0F0E0C;
pub const LIGHT_BACKGROUND_HEX: u32 = 0xF5F5F5;
pub const FLOOR_HEX: u32 = 0x110F0E;
pub const CAN_BODY_HEX: u32 = 0x111111;

// Background particle shell
pub const BACKGROUND_COUNT: usize = 1000;
pub const BACKGROUND_RADIUS_MIN: f32 = 20.0;
pub const BACKGROUND_RADIUS_SPAN: f32 = 30.0;
pub const BACKGROUND_SPEED_MIN: f32 = 0.01;
pub const BACKGROUND_SPEED_MAX: f32 = 0.04;
pub const BACKGROUND_POINT_SIZE: f32 = 0.05;
pub const BACKGROUND_POINT_SIZE_LOW: f32 = 0.08; // compensates the halved count
pub const BACKGROUND_OPACITY: f32 = 0.3;

// Liquid splash
pub const LIQUID_COUNT: usize = 200;
pub const LIQUID_COUNT_LOW: usize = 100;
pub const LIQUID_STAGGER_MS: f32 = 10.0;
pub const LIQUID_STAGGER_MS_LOW: f32 = 20.0;
pub const LIQUID_LEAD_IN_SEC: f32 = 1.0; // pause between reset and first launch
pub const LIQUID_HOME_SPAN: f32 = 3.0; // home x/z drawn from [-span/2, span/2]
pub const LIQUID_SPEED_MIN: f32 = 0.1;
pub const LIQUID_SPEED_SPAN: f32 = 0.2;
pub const LIQUID_AMPLITUDE_MIN: f32 = 0.1;
pub const LIQUID_AMPLITUDE_SPAN: f32 = 0.3;
pub const LIQUID_SIZE_MIN: f32 = 0.05;
pub const LIQUID_SIZE_SPAN: f32 = 0.15;
pub const LIQUID_BASE_Y: f32 = -5.0;
pub const LIQUID_HIDDEN_Y: f32 = -10.0; // below the camera frustum
pub const LIQUID_RISE_HEIGHT: f32 = 8.0;
pub const LIQUID_APEX_SWELL: f32 = 0.5; // extra scale at the top of the arc
pub const LIQUID_REARM_JITTER_SEC: f32 = 2.0;
pub const LIQUID_EMISSIVE: f32 = 0.3;

// Quality
pub const FPS_WINDOW_SEC: f32 = 1.0;
pub const FPS_DEGRADE_THRESHOLD: u32 = 30;
pub const DEGRADED_LIQUID_CAP: usize = 100;
pub const DEGRADED_BLOOM_STRENGTH: f32 = 0.6;
pub const DEGRADED_BLOOM_RADIUS: f32 = 0.2;
pub const BLOOM_THRESHOLD: f32 = 0.7;

// Can (intro)
pub const CAN_RADIUS: f32 = 0.5;
pub const CAN_HEIGHT: f32 = 2.0;
pub const CAN_START_Y: f32 = -10.0;
pub const CAN_REST_Y: f32 = -1.0;
pub const CAN_RISE_DELAY_SEC: f32 = 3.0;
pub const CAN_RISE_DURATION_SEC: f32 = 2.0;
pub const CAN_SPIN_RAD_PER_SEC: f32 = 0.3; // 0.005 rad per 60 Hz frame
pub const FLOOR_Y: f32 = -3.0;
pub const FLOOR_SIZE: f32 = 100.0;

// Camera
pub const INTRO_FOVY_DEG: f32 = 75.0;
pub const VIEWER_FOVY_DEG: f32 = 45.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Lights (intro)
pub const KEY_LIGHT_POS: Vec3 = Vec3::new(5.0, 10.0, 7.0);
pub const RIM_GOLD_POS: Vec3 = Vec3::new(-5.0, 2.0, -3.0);
pub const RIM_DARK_GOLD_POS: Vec3 = Vec3::new(5.0, 2.0, -3.0);
pub const RIM_LIGHT_RANGE: f32 = 20.0;
pub const SPOT_POS: Vec3 = Vec3::new(0.0, 10.0, 5.0);
pub const SPOT_RANGE: f32 = 30.0;
pub const AMBIENT_HEX: u32 = 0x222222;
pub const FOG_DENSITY: f32 = 0.002;

// Product viewer
pub const VIEWER_CAN_RADIUS: f32 = 0.8;
pub const VIEWER_CAN_HEIGHT: f32 = 2.5;
pub const VIEWER_BASE_YAW: f32 = std::f32::consts::FRAC_PI_4;
pub const VIEWER_TILT: f32 = 0.2;
pub const VIEWER_FLOAT: f32 = 0.1;
pub const VIEWER_SECTION_SCALE: f32 = 0.2;
pub const VIEWER_MOUSE_GAIN: f32 = 0.01;
pub const VIEWER_MOUSE_PULL: f32 = 0.1;
pub const VIEWER_MOUSE_EASE: f32 = 0.05;
pub const VIEWER_AUTO_ROTATE_SPEED: f32 = 0.5; // one orbit every 120 s
/// Share of the pending drag rotation applied per frame.
pub const VIEWER_ORBIT_DAMPING: f32 = 0.05;
/// Keeps the orbit camera off the poles.
pub const VIEWER_POLAR_MARGIN: f32 = 0.01;
/// Shifts the label artwork so its centre faces the front of the can.
pub const VIEWER_LABEL_U_OFFSET: f32 = 0.25;
/// 0x333333 emissive at intensity 0.2, modulated by the label.
pub const VIEWER_LABEL_EMISSIVE: f32 = 0.04;
pub const VIEWER_LABEL_URL: &str = "img/WhatsApp Image 2025-03-11 at 11.24.46 AM.jpeg";
pub const CONDENSATION_COUNT: usize = 80;
pub const CONDENSATION_TRAILS: usize = 15;
pub const CONDENSATION_RADIUS: f32 = 0.82;
pub const CONDENSATION_DROPLET_SIZE: f32 = 0.02;

#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
