pub mod background;
pub mod clock;
pub mod constants;
pub mod gpu;
pub mod lighting;
pub mod liquid;
pub mod loading;
pub mod mesh;
pub mod nav;
pub mod quality;
pub mod scene;
pub mod shop;
pub mod state;
pub mod theme;
pub mod tween;
pub mod viewer;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use background::*;
pub use clock::*;
pub use gpu::*;
pub use liquid::*;
pub use quality::*;
pub use scene::*;
pub use state::*;
pub use theme::*;
pub use tween::*;
