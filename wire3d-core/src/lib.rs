/// wire3d Core Library - Scene model and geometry pipeline
///
/// This library provides the backend-independent core of the wireframe
/// viewer: shape geometry, scene state, the rotate/translate/project
/// pipeline with planar shadow casting, and painter's-order rendering
/// against a pluggable rasterizer.

pub mod geometry;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Color, Edge, Face, GeometryError, Shape};
pub use projection::{Camera, ScreenPoint};
pub use render::{render_scene, render_shape, Rasterizer};
pub use scene::{Scene, ROTATION_STEP, TRANSLATION_STEP};
pub use transform::{project_shape, rotate_point, Axis, Pose, ProjectedShape, GROUND_Y};
