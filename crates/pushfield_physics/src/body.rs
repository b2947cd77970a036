use pushfield_core::{Palette, Vector2, RADIUS_SCALE};

use crate::field::ForceField;

/// A point mass with a rendering radius
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vector2,
    pub velocity: Vector2,
    /// Force accumulated since the last `integrate`
    pub acceleration: Vector2,
    mass: f32,
    radius: f32,
    pub color: Palette,
}

impl Body {
    /// New body at rest. Radius is derived from mass once and never changes.
    pub fn new(mass: f32, position: Vector2, color: Palette) -> Self {
        debug_assert!(
            mass.is_finite() && mass > 0.0,
            "body mass must be finite and > 0, got {mass}"
        );
        debug_assert!(
            position.is_finite(),
            "body position must be finite, got {position:?}"
        );
        Self {
            position,
            velocity: Vector2::ZERO,
            acceleration: Vector2::ZERO,
            mass,
            radius: mass.sqrt() * RADIUS_SCALE,
            color,
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Accumulate `force` into acceleration.
    ///
    /// The force is not divided by mass: a heavy body and a light body receive the same
    /// acceleration from the same push. Mass only shows up through friction.
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration += force;
    }

    /// Push against the direction of travel with magnitude `mu * mass`.
    /// A body at rest gets a zero force (normalize leaves zero alone).
    pub fn apply_friction(&mut self, mu: f32) {
        let friction = -self.velocity.normalize() * (mu * self.mass);
        self.apply_force(friction);
    }

    /// Explicit Euler step. Acceleration is cleared before the velocity cap.
    pub fn integrate(&mut self, max_axis_speed: f32) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        self.acceleration = Vector2::ZERO;
        self.velocity = self.velocity.limit_axes(max_axis_speed);
    }

    /// Point containment: the body's radius plays no part
    pub fn is_in_field(&self, field: &ForceField) -> bool {
        field.contains(self.position)
    }

    /// Whether `point` lies strictly inside this body's disc
    pub fn contains_point(&self, point: Vector2) -> bool {
        (point - self.position).length_squared() < self.radius * self.radius
    }
}
