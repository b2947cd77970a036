// Defaults for the single push-field scenario.
// Units: 1 world unit = 1 logical pixel, time in ticks unless stated otherwise.

/// World extents
pub const WORLD_WIDTH: f32 = 600.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Number of bodies spawned at start; never changes afterwards
pub const BODY_COUNT: usize = 200;

/// Friction coefficient (force magnitude = MU * mass)
pub const MU: f32 = 0.01;

/// Push field defaults
pub const FIELD_X: f32 = 300.0;
pub const FIELD_Y: f32 = 300.0;
pub const FIELD_RADIUS: f32 = 100.0;
pub const FIELD_STRENGTH: f32 = 0.5;

/// Initial per-body mass range
pub const MASS_MIN: f32 = 1.0;
pub const MASS_MAX: f32 = 3.0;

/// Initial impulse range per axis is [-IMPULSE_MAX, IMPULSE_MAX]
pub const IMPULSE_MAX: f32 = 2.0;

/// Body radius = sqrt(mass) * RADIUS_SCALE
pub const RADIUS_SCALE: f32 = 10.0;

/// Velocity cap, applied per axis after integration
pub const MAX_AXIS_SPEED: f32 = 4.0;

/// Logical simulation ticks per second
pub const TICK_RATE: f64 = 60.0;

/// Default RNG seed for the initial population
pub const SEED: u64 = 42;

/// Length of the field direction indicator drawn for in-field bodies
pub const DIRECTION_MARKER_LEN: f32 = 10.0;

/// Radius of the pointer marker
pub const POINTER_MARKER_RADIUS: f32 = 2.0;
