use pushfield_core::Vector2;

use crate::body::Body;

/// Circular repulsive zone. Follows the pointer; radius and strength are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceField {
    position: Vector2,
    radius: f32,
    strength: f32,
}

impl ForceField {
    pub fn new(position: Vector2, radius: f32, strength: f32) -> Self {
        debug_assert!(
            position.is_finite(),
            "field position must be finite, got {position:?}"
        );
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "field radius must be finite and > 0, got {radius}"
        );
        debug_assert!(strength.is_finite(), "field strength must be finite, got {strength}");
        Self {
            position,
            radius,
            strength,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Move the field. Any finite position is accepted, including off-world ones.
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Strict containment: a point exactly on the boundary is outside
    pub fn contains(&self, point: Vector2) -> bool {
        (point - self.position).length_squared() < self.radius * self.radius
    }

    /// Force this field exerts on `body`, and whether the body is inside.
    ///
    /// Strength falls off linearly from `strength` at the center to 0 at the edge and the
    /// force points away from the center. A body sitting exactly on the center gets no
    /// force at all, because the direction of a zero offset is itself zero.
    pub fn force_on(&self, body: &Body) -> (Vector2, bool) {
        if !body.is_in_field(self) {
            return (Vector2::ZERO, false);
        }

        let offset = body.position - self.position;
        let distance = offset.magnitude();
        // Points from the body toward the center
        let dir = -offset.normalize();
        let strength = self.strength - (distance / self.radius) * self.strength;

        (dir * -strength, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushfield_core::Palette;

    fn field() -> ForceField {
        ForceField::new(Vector2::new(300.0, 300.0), 100.0, 0.5)
    }

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(2.0, Vector2::new(x, y), Palette::Body)
    }

    #[test]
    fn test_dead_center_has_no_force() {
        let (force, inside) = field().force_on(&body_at(300.0, 300.0));
        assert!(inside);
        assert_eq!(force, Vector2::ZERO);
    }

    #[test]
    fn test_boundary_is_outside() {
        let f = field();
        let b = body_at(400.0, 300.0);
        assert!(!b.is_in_field(&f));
        let (force, inside) = f.force_on(&b);
        assert!(!inside);
        assert_eq!(force, Vector2::ZERO);
    }

    #[test]
    fn test_half_radius_pushes_outward() {
        let (force, inside) = field().force_on(&body_at(350.0, 300.0));
        assert!(inside);
        assert!((force.x - 0.25).abs() < 1e-6);
        assert!(force.y.abs() < 1e-6);
    }

    #[test]
    fn test_push_is_radial_and_decays() {
        let f = field();
        let (near, _) = f.force_on(&body_at(300.0, 290.0));
        let (far, _) = f.force_on(&body_at(300.0, 220.0));
        // Above the center (smaller y) means pushed further up
        assert!(near.y < 0.0 && far.y < 0.0);
        assert!(near.x.abs() < 1e-6 && far.x.abs() < 1e-6);
        assert!(near.magnitude() > far.magnitude());
        assert!((near.magnitude() - 0.45).abs() < 1e-5);
        assert!((far.magnitude() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_membership_matches_squared_distance() {
        let f = field();
        let points = [
            (300.0, 300.0),
            (370.0, 370.0),
            (371.0, 371.0),
            (200.0, 300.0),
            (-5.0, 0.0),
        ];
        for (x, y) in points {
            let dx: f32 = x - 300.0;
            let dy: f32 = y - 300.0;
            let expected = dx * dx + dy * dy < 100.0 * 100.0;
            assert_eq!(body_at(x, y).is_in_field(&f), expected, "({x}, {y})");
        }
    }

    #[test]
    fn test_set_position_moves_membership() {
        let mut f = field();
        let b = body_at(10.0, 10.0);
        assert!(!b.is_in_field(&f));
        f.set_position(Vector2::new(-20.0, 0.0));
        assert!(b.is_in_field(&f));
        assert_eq!(f.radius(), 100.0);
        assert_eq!(f.strength(), 0.5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "field position must be finite")]
    fn test_nan_field_position_rejected() {
        ForceField::new(Vector2::new(f32::NAN, 0.0), 100.0, 0.5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "field radius must be finite and > 0")]
    fn test_zero_field_radius_rejected() {
        ForceField::new(Vector2::new(300.0, 300.0), 0.0, 0.5);
    }
}
