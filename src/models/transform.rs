use serde::{Deserialize, Serialize};

/// Affine zoom transform: scale `k`, then translation `(x, y)`.
///
/// A point `p` in chart space is drawn at `p * k + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.k + self.x
    }

    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.k + self.y
    }

    pub fn invert_x(&self, x: f64) -> f64 {
        (x - self.x) / self.k
    }

    pub fn invert_y(&self, y: f64) -> f64 {
        (y - self.y) / self.k
    }

    /// Translate by `(dx, dy)` expressed in chart space.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            k: self.k,
            x: self.x + self.k * dx,
            y: self.y + self.k * dy,
        }
    }

    /// SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!("translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
