/// Camera and perspective projection
use nalgebra::Point3;

/// A projected vertex in integer screen coordinates (origin top-left,
/// Y growing downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Camera configuration for perspective projection
///
/// The camera sits at the origin looking down +Z. Points with depth less
/// than `near` are clipped; there is no far plane and no side clipping.
pub struct Camera {
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub width: u32,
    pub height: u32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            fov: std::f64::consts::FRAC_PI_2, // 90 degrees
            aspect: height as f64 / width as f64,
            near: 0.1,
            width,
            height,
        }
    }

    /// Project a 3D world point to screen space
    ///
    /// Returns `None` when the point lies in front of the near plane
    /// (z < near); z == near still projects. Screen coordinates truncate
    /// toward zero, so callers get the same integers on every platform.
    pub fn project(&self, point: &Point3<f64>) -> Option<ScreenPoint> {
        if point.z < self.near {
            return None;
        }

        let f = 1.0 / (self.fov / 2.0).tan();
        let x_proj = point.x * f * self.aspect / point.z;
        let y_proj = point.y * f / point.z;

        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;

        // Y is inverted: camera space grows upward, screen space downward
        let screen_x = (x_proj * half_w + half_w) as i32;
        let screen_y = (-y_proj * half_h + half_h) as i32;

        Some(ScreenPoint::new(screen_x, screen_y))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
