pub mod actors;
pub mod blit;
pub mod camera;
pub mod fx;
pub mod hud;
pub mod painter;
pub mod scene;
pub mod terrain;

pub use blit::Gpu;
pub use camera::Camera;
pub use painter::{Frame, Painter};
pub use scene::SceneRenderer;
