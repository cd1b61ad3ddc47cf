/// Pose state and the per-frame transform pipeline
use nalgebra::{Point3, Vector3};

use crate::geometry::Shape;
use crate::projection::{Camera, ScreenPoint};

/// Height of the ground plane shadows are flattened onto, below all shape
/// geometry by construction
pub const GROUND_Y: f64 = -1.5;

/// One of the three world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A shape's world position and per-axis rotation (radians)
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub position: Vector3<f64>,
    pub rotation: Vector3<f64>,
}

impl Pose {
    pub fn new(position: Vector3<f64>) -> Self {
        Self {
            position,
            rotation: Vector3::zeros(),
        }
    }

    /// Rotate by a delta (in radians) about one axis
    pub fn rotate(&mut self, axis: Axis, delta: f64) {
        match axis {
            Axis::X => self.rotation.x += delta,
            Axis::Y => self.rotation.y += delta,
            Axis::Z => self.rotation.z += delta,
        }
    }

    /// Translate by a delta along one world axis
    pub fn translate(&mut self, axis: Axis, delta: f64) {
        match axis {
            Axis::X => self.position.x += delta,
            Axis::Y => self.position.y += delta,
            Axis::Z => self.position.z += delta,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vector3::zeros())
    }
}

/// Rotate a point about Z, then Y, then X
///
/// The order is load-bearing: each axis rotation feeds the next, giving the
/// composite Rx * Ry * Rz. Tests pin it down.
pub fn rotate_point(point: &Point3<f64>, rx: f64, ry: f64, rz: f64) -> Point3<f64> {
    let (sin_z, cos_z) = rz.sin_cos();
    let x1 = point.x * cos_z - point.y * sin_z;
    let y1 = point.x * sin_z + point.y * cos_z;
    let z1 = point.z;

    let (sin_y, cos_y) = ry.sin_cos();
    let x2 = x1 * cos_y + z1 * sin_y;
    let y2 = y1;
    let z2 = -x1 * sin_y + z1 * cos_y;

    let (sin_x, cos_x) = rx.sin_cos();
    let x3 = x2;
    let y3 = y2 * cos_x - z2 * sin_x;
    let z3 = y2 * sin_x + z2 * cos_x;

    Point3::new(x3, y3, z3)
}

/// The screen-space result of projecting one shape for one frame
///
/// Both arrays are indexed by vertex; `None` marks a vertex clipped by the
/// near plane. Recomputed every frame since the pose may change every frame.
pub struct ProjectedShape {
    pub screen: Vec<Option<ScreenPoint>>,
    pub shadow: Vec<Option<ScreenPoint>>,
}

/// Run the rotate -> translate -> project pipeline over a shape's vertices,
/// plus the parallel shadow pass that flattens each world point onto the
/// ground plane before projecting
pub fn project_shape(shape: &Shape, camera: &Camera) -> ProjectedShape {
    let rot = shape.pose.rotation;
    let mut screen = Vec::with_capacity(shape.vertices.len());
    let mut shadow = Vec::with_capacity(shape.vertices.len());

    for vertex in &shape.vertices {
        let rotated = rotate_point(vertex, rot.x, rot.y, rot.z);
        let world = rotated + shape.pose.position;
        screen.push(camera.project(&world));

        let shadow_world = Point3::new(world.x, GROUND_Y, world.z);
        shadow.push(camera.project(&shadow_world));
    }

    ProjectedShape { screen, shadow }
}
