use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Plain 2D vector in world units (x right, y down, like a canvas)
///
/// All operations return new values; nothing here mutates in place except `+=`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `k`
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean norm
    pub fn magnitude(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. The zero vector is returned unchanged,
    /// so callers never see a NaN from a division by zero.
    pub fn normalize(self) -> Self {
        let len = self.magnitude();
        if len != 0.0 {
            self.scale(1.0 / len)
        } else {
            self
        }
    }

    /// Clamp each axis independently into `[-max, max]`.
    /// This is not a length clamp: (5, 5) limited to 4 becomes (4, 4).
    pub fn limit_axes(self, max: f32) -> Self {
        Self::new(self.x.max(-max).min(max), self.y.max(-max).min(max))
    }

    /// Same direction, length `m`
    pub fn set_magnitude(self, m: f32) -> Self {
        self.normalize().scale(m)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, k: f32) -> Self {
        self.scale(k)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, k: f32) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
