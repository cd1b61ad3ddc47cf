/// Scene state: the shape list, active-shape selection, and the automatic
/// spin policy
use crate::geometry::Shape;
use crate::transform::Axis;

/// Rotation applied per keypress, in radians
pub const ROTATION_STEP: f64 = 0.03;
/// Translation applied per keypress, in world units
pub const TRANSLATION_STEP: f64 = 0.1;

// Spin deltas applied to the designated shape each frame while it is not
// being controlled
const SPIN_X: f64 = 0.005;
const SPIN_Y: f64 = 0.01;

/// An ordered collection of shapes with one active (user-controlled) shape
///
/// Shapes accumulate for the session; the active index is only meaningful
/// while the scene is non-empty, and every mutator bound-checks it. All
/// operations on an empty scene are no-ops.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    active: usize,
    spinning: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape and make it the active one
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.active = self.shapes.len() - 1;
    }

    /// Mark the most recently pushed shape as the one the automatic policy
    /// keeps spinning
    pub fn spin_last(&mut self) {
        if !self.shapes.is_empty() {
            self.spinning = Some(self.shapes.len() - 1);
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn active_index(&self) -> Option<usize> {
        (!self.shapes.is_empty()).then_some(self.active)
    }

    pub fn active_shape(&self) -> Option<&Shape> {
        self.shapes.get(self.active)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active_shape().map(|shape| shape.name.as_str())
    }

    /// Advance the active selection, wrapping at the end of the list
    pub fn select_next(&mut self) {
        if !self.shapes.is_empty() {
            self.active = (self.active + 1) % self.shapes.len();
        }
    }

    /// Rotate the active shape about one axis by a delta in radians
    pub fn rotate_active(&mut self, axis: Axis, delta: f64) {
        if let Some(shape) = self.shapes.get_mut(self.active) {
            shape.pose.rotate(axis, delta);
        }
    }

    /// Translate the active shape along one world axis
    pub fn translate_active(&mut self, axis: Axis, delta: f64) {
        if let Some(shape) = self.shapes.get_mut(self.active) {
            shape.pose.translate(axis, delta);
        }
    }

    /// Apply the automatic spin to the designated shape, once per frame
    ///
    /// The deltas are fixed and independent of which shape is active; the
    /// spin pauses only while the spinning shape is itself under control.
    pub fn apply_spin(&mut self) {
        let Some(index) = self.spinning else {
            return;
        };
        if self.shapes.is_empty() || index == self.active {
            return;
        }
        if let Some(shape) = self.shapes.get_mut(index) {
            shape.pose.rotate(Axis::X, SPIN_X);
            shape.pose.rotate(Axis::Y, SPIN_Y);
        }
    }
}
