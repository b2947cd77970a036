use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use pushfield_core::Vector2;
use pushfield_sim::simulation::Simulation;

/// Marker for the one 2D camera looking at the world
#[derive(Component)]
pub struct SceneCamera;

/// Spawn an orthographic camera that always shows exactly the world rectangle,
/// whatever the window size
pub fn spawn_camera(mut commands: Commands, sim: Res<Simulation>) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: sim.config.world_width,
                height: sim.config.world_height,
            },
            ..OrthographicProjection::default_2d()
        },
        SceneCamera,
    ));
}

/// World space (origin top-left, y down) to Bevy space (origin centered, y up)
pub fn world_to_scene(p: Vector2, world: Vec2) -> Vec2 {
    Vec2::new(p.x - world.x * 0.5, world.y * 0.5 - p.y)
}

/// Inverse of `world_to_scene`
pub fn scene_to_world(p: Vec2, world: Vec2) -> Vector2 {
    Vector2::new(p.x + world.x * 0.5, world.y * 0.5 - p.y)
}
