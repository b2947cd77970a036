use bevy::prelude::*;
use pushfield_core::{BodyView, FieldView, Frame, PointerState, SimConfig, Vector2};
use pushfield_physics::{procgen, Body, ForceField};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The whole scenario: a fixed population and the one push field, tracked as a Bevy Resource
#[derive(Resource)]
pub struct Simulation {
    /// Population, in spawn order. The count never changes.
    pub bodies: Vec<Body>,
    pub field: ForceField,
    pub config: SimConfig,
    /// Ticks run since spawn
    ticks: u64,
}

impl Simulation {
    pub fn new(config: SimConfig, bodies: Vec<Body>) -> Self {
        let field = ForceField::new(
            config.field_position,
            config.field_radius,
            config.field_strength,
        );
        Self {
            bodies,
            field,
            config,
            ticks: 0,
        }
    }

    /// Spawn a random population from `config.seed`
    pub fn spawn(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let bodies = procgen::spawn_bodies(&config, &mut rng);
        Self::new(config, bodies)
    }

    /// Throw the population away and spawn a fresh one from `seed`
    pub fn respawn(&mut self, seed: u64) {
        self.config.seed = seed;
        *self = Self::spawn(self.config.clone());
        info!("Respawned {} bodies (seed {})", self.bodies.len(), seed);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance every body by one tick.
    ///
    /// The field jumps to the pointer first, then each body gets field force (when inside),
    /// friction, and an integration step. Bodies don't interact, so order is irrelevant
    /// to the physics; the returned frame keeps spawn order anyway.
    pub fn step(&mut self, pointer: &PointerState) -> Frame {
        self.field.set_position(pointer.position());
        let mu = self.config.friction;
        let max_speed = self.config.max_axis_speed;

        let mut views = Vec::with_capacity(self.bodies.len());
        for body in &mut self.bodies {
            let (force, in_field) = self.field.force_on(body);
            if in_field {
                body.apply_force(force);
            }
            body.apply_friction(mu);
            body.integrate(max_speed);

            views.push(BodyView {
                position: body.position,
                radius: body.radius(),
                color: body.color,
                in_field,
            });
        }

        self.ticks += 1;
        Frame {
            tick: self.ticks,
            bodies: views,
            field: Some(self.field_view()),
            pointer: pointer.position(),
        }
    }

    /// Current state as a frame without advancing it
    pub fn snapshot(&self, pointer: &PointerState) -> Frame {
        let bodies = self
            .bodies
            .iter()
            .map(|body| BodyView {
                position: body.position,
                radius: body.radius(),
                color: body.color,
                in_field: body.is_in_field(&self.field),
            })
            .collect();
        Frame {
            tick: self.ticks,
            bodies,
            field: Some(self.field_view()),
            pointer: pointer.position(),
        }
    }

    pub fn field_view(&self) -> FieldView {
        FieldView {
            position: self.field.position(),
            radius: self.field.radius(),
        }
    }

    /// Index of the first body whose disc contains `point`
    pub fn body_at(&self, point: Vector2) -> Option<usize> {
        self.bodies.iter().position(|b| b.contains_point(point))
    }

    /// Mean speed over the population (HUD/report statistic)
    pub fn mean_speed(&self) -> f32 {
        if self.bodies.is_empty() {
            return 0.0;
        }
        let total: f32 = self.bodies.iter().map(|b| b.velocity.magnitude()).sum();
        total / self.bodies.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pushfield_core::Palette;

    fn still_body(x: f32, y: f32) -> Body {
        Body::new(1.0, Vector2::new(x, y), Palette::Body)
    }

    #[test]
    fn test_spawn_population() {
        let sim = Simulation::spawn(SimConfig::default());
        assert_eq!(sim.bodies.len(), 200);
        assert_eq!(sim.ticks(), 0);
        assert_eq!(sim.field.position(), Vector2::new(300.0, 300.0));
    }

    #[test]
    fn test_step_moves_field_to_pointer() {
        let mut sim = Simulation::new(SimConfig::default(), vec![still_body(10.0, 10.0)]);
        let pointer = PointerState { x: -40.0, y: 700.0, pressed: true };
        let frame = sim.step(&pointer);

        assert_eq!(sim.field.position(), Vector2::new(-40.0, 700.0));
        assert_eq!(frame.pointer, Vector2::new(-40.0, 700.0));
        assert_eq!(frame.field.map(|f| f.position), Some(Vector2::new(-40.0, 700.0)));
        assert_eq!(frame.tick, 1);
    }

    #[test]
    fn test_step_pushes_only_bodies_inside() {
        let bodies = vec![still_body(350.0, 300.0), still_body(500.0, 300.0)];
        let mut sim = Simulation::new(SimConfig::default(), bodies);
        let frame = sim.step(&PointerState::at(Vector2::new(300.0, 300.0)));

        assert!(frame.bodies[0].in_field);
        assert!(!frame.bodies[1].in_field);
        assert_eq!(frame.in_field_count(), 1);

        // Pushed by 0.25 this tick; friction sees zero velocity so adds nothing
        assert!((sim.bodies[0].velocity.x - 0.25).abs() < 1e-6);
        assert!((frame.bodies[0].position.x - 350.25).abs() < 1e-4);
        assert_eq!(sim.bodies[1].velocity, Vector2::ZERO);
        assert_eq!(frame.bodies[1].position, Vector2::new(500.0, 300.0));
    }

    #[test]
    fn test_far_pointer_leaves_resting_bodies_alone() {
        let bodies = vec![still_body(100.0, 100.0), still_body(450.0, 320.0)];
        let mut sim = Simulation::new(SimConfig::default(), bodies.clone());
        for _ in 0..50 {
            sim.step(&PointerState::at(Vector2::new(-5000.0, -5000.0)));
        }
        assert_eq!(sim.bodies, bodies);
        assert_eq!(sim.ticks(), 50);
    }

    #[test]
    fn test_friction_brings_body_to_near_rest() {
        let mut body = still_body(100.0, 100.0);
        body.velocity = Vector2::new(1.0, 0.0);
        let mut sim = Simulation::new(SimConfig::default(), vec![body]);
        let away = PointerState::at(Vector2::new(-1000.0, -1000.0));

        // 0.01 per tick off a speed of 1
        for _ in 0..99 {
            sim.step(&away);
        }
        assert!(sim.bodies[0].velocity.x > 0.0);
        assert!(sim.bodies[0].velocity.x < 0.02);
    }

    #[test]
    fn test_velocity_stays_capped_under_field() {
        let mut sim = Simulation::spawn(SimConfig::default());
        for i in 0..300 {
            let t = i as f32 * 0.05;
            let pointer = PointerState::at(Vector2::new(
                300.0 + 150.0 * t.cos(),
                300.0 + 150.0 * t.sin(),
            ));
            let frame = sim.step(&pointer);
            assert_eq!(frame.bodies.len(), 200);
        }
        for b in &sim.bodies {
            assert!(b.velocity.x.abs() <= 4.0 && b.velocity.y.abs() <= 4.0);
            assert!(b.position.is_finite());
        }
    }

    #[test]
    fn test_frame_reports_body_state() {
        let body = Body::new(4.0, Vector2::new(1.0, 2.0), Palette::Body);
        let mut sim = Simulation::new(SimConfig::default(), vec![body]);
        let frame = sim.step(&PointerState::default());
        let view = frame.bodies[0];
        assert_eq!(view.color, Palette::Body);
        assert!((view.radius - 20.0).abs() < 1e-6);
        // Pointer at the origin, body 2.2 away: inside the field and pushed away from it
        assert!(view.in_field);
        assert!(view.position.x > 1.0 && view.position.y > 2.0);
    }

    #[test]
    fn test_body_at() {
        let bodies = vec![still_body(100.0, 100.0), still_body(104.0, 100.0)];
        let sim = Simulation::new(SimConfig::default(), bodies);
        // Both discs contain (102, 100); first in spawn order wins
        assert_eq!(sim.body_at(Vector2::new(102.0, 100.0)), Some(0));
        assert_eq!(sim.body_at(Vector2::new(112.0, 100.0)), Some(1));
        assert_eq!(sim.body_at(Vector2::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_respawn_keeps_population_size() {
        let mut sim = Simulation::spawn(SimConfig::default());
        let before = sim.bodies.clone();
        sim.step(&PointerState::default());
        sim.respawn(43);
        assert_eq!(sim.bodies.len(), before.len());
        assert_ne!(sim.bodies, before);
        assert_eq!(sim.ticks(), 0);
        assert_eq!(sim.config.seed, 43);
    }

    #[test]
    fn test_snapshot_after_respawn() {
        let mut sim = Simulation::spawn(SimConfig::default());
        sim.step(&PointerState::at(Vector2::new(120.0, 80.0)));
        sim.respawn(7);

        let pointer = PointerState::at(Vector2::new(250.0, 310.0));
        let frame = sim.snapshot(&pointer);
        assert_eq!(frame.tick, 0);
        assert_eq!(frame.bodies.len(), 200);
        assert_eq!(frame.pointer, Vector2::new(250.0, 310.0));
        assert_eq!(frame.field, Some(sim.field_view()));
        for (view, body) in frame.bodies.iter().zip(&sim.bodies) {
            assert_eq!(view.position, body.position);
            assert_eq!(view.in_field, body.is_in_field(&sim.field));
        }
        // Nothing moved
        assert_eq!(sim.ticks(), 0);
    }
}
