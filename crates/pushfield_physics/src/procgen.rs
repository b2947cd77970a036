use pushfield_core::{Palette, SimConfig, Vector2};
use rand::Rng;

use crate::body::Body;

/// Generate the starting population: random position inside the world, random mass,
/// and a random initial kick sitting in the acceleration for the first tick.
pub fn spawn_bodies(config: &SimConfig, rng: &mut impl Rng) -> Vec<Body> {
    (0..config.body_count)
        .map(|_| spawn_body(config, rng))
        .collect()
}

fn spawn_body(config: &SimConfig, rng: &mut impl Rng) -> Body {
    let position = Vector2::new(
        rng.gen_range(0.0..config.world_width),
        rng.gen_range(0.0..config.world_height),
    );
    let impulse = Vector2::new(
        rng.gen_range(-config.max_impulse..=config.max_impulse),
        rng.gen_range(-config.max_impulse..=config.max_impulse),
    );
    let mass = rng.gen_range(config.mass_min..=config.mass_max);

    let mut body = Body::new(mass, position, Palette::Body);
    body.apply_force(impulse);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_respects_ranges() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let bodies = spawn_bodies(&config, &mut rng);

        assert_eq!(bodies.len(), config.body_count);
        for b in &bodies {
            assert!((0.0..config.world_width).contains(&b.position.x));
            assert!((0.0..config.world_height).contains(&b.position.y));
            assert!((config.mass_min..=config.mass_max).contains(&b.mass()));
            assert!(b.acceleration.x.abs() <= config.max_impulse);
            assert!(b.acceleration.y.abs() <= config.max_impulse);
            assert_eq!(b.velocity, Vector2::ZERO);
            assert!((b.radius() - b.mass().sqrt() * 10.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let config = SimConfig::default();
        let a = spawn_bodies(&config, &mut ChaCha8Rng::seed_from_u64(9));
        let b = spawn_bodies(&config, &mut ChaCha8Rng::seed_from_u64(9));
        let c = spawn_bodies(&config, &mut ChaCha8Rng::seed_from_u64(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_fixed_mass_range() {
        let config = SimConfig {
            mass_min: 2.0,
            mass_max: 2.0,
            body_count: 5,
            ..SimConfig::default()
        };
        let bodies = spawn_bodies(&config, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(bodies.iter().all(|b| b.mass() == 2.0));
    }
}
