pub mod backend;
pub mod camera;
pub mod case;
pub mod constants;
pub mod drag;
pub mod error;
pub mod export;
pub mod mesh;
pub mod orbit;
pub mod params;
pub mod picking;
pub mod relief;
pub mod scene;
pub mod shading;
pub mod texture;

pub use camera::*;
pub use case::*;
pub use constants::*;
pub use drag::*;
pub use error::*;
pub use orbit::*;
pub use params::*;
pub use picking::*;
pub use relief::*;
pub use scene::*;
pub use shading::*;
pub use texture::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
