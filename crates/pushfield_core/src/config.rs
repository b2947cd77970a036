use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::vector::Vector2;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// World width in logical pixels
    pub world_width: f32,
    /// World height in logical pixels
    pub world_height: f32,
    /// Number of bodies (fixed for the simulation's lifetime)
    pub body_count: usize,
    /// Friction coefficient
    pub friction: f32,
    /// Where the field starts before the first pointer sample
    pub field_position: Vector2,
    pub field_radius: f32,
    /// Push strength at the field center, decaying linearly to 0 at the edge
    pub field_strength: f32,
    pub mass_min: f32,
    pub mass_max: f32,
    /// Initial impulse per axis is drawn from [-max_impulse, max_impulse]
    pub max_impulse: f32,
    /// Per-axis velocity cap
    pub max_axis_speed: f32,
    /// Logical ticks per second
    pub tick_rate: f64,
    /// Random seed for deterministic spawning
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            body_count: BODY_COUNT,
            friction: MU,
            field_position: Vector2::new(FIELD_X, FIELD_Y),
            field_radius: FIELD_RADIUS,
            field_strength: FIELD_STRENGTH,
            mass_min: MASS_MIN,
            mass_max: MASS_MAX,
            max_impulse: IMPULSE_MAX,
            max_axis_speed: MAX_AXIS_SPEED,
            tick_rate: TICK_RATE,
            seed: SEED,
        }
    }
}

impl SimConfig {
    /// Read a JSON config file. Fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let data = fs::read_to_string(path)
            .map_err(|e| format!("Read error ({}): {e}", path.display()))?;
        let config: Self =
            serde_json::from_str(&data).map_err(|e| format!("Parse error: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would put NaN or nonsense into the simulation
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("friction", self.friction),
            ("field_radius", self.field_radius),
            ("field_strength", self.field_strength),
            ("mass_min", self.mass_min),
            ("mass_max", self.mass_max),
            ("max_impulse", self.max_impulse),
            ("max_axis_speed", self.max_axis_speed),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }
        if !self.field_position.is_finite() {
            return Err(format!("field_position must be finite, got {:?}", self.field_position));
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(format!(
                "world extents must be positive, got {}x{}",
                self.world_width, self.world_height
            ));
        }
        if self.field_radius <= 0.0 {
            return Err(format!("field_radius must be positive, got {}", self.field_radius));
        }
        if self.mass_min <= 0.0 || self.mass_max < self.mass_min {
            return Err(format!(
                "mass range must satisfy 0 < min <= max, got {}..{}",
                self.mass_min, self.mass_max
            ));
        }
        if self.max_impulse < 0.0 || self.max_axis_speed < 0.0 || self.friction < 0.0 {
            return Err("max_impulse, max_axis_speed and friction must not be negative".to_string());
        }
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(format!("tick_rate must be positive, got {}", self.tick_rate));
        }
        Ok(())
    }

    /// Milliseconds between logical ticks
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.tick_rate
    }
}
