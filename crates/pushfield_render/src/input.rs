use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use pushfield_sim::pipeline::PointerInput;
use pushfield_sim::simulation::Simulation;

use super::camera::{scene_to_world, SceneCamera};

/// Sample the cursor into `PointerInput`.
/// When the cursor leaves the window the last position is kept, like a canvas
/// that only sees move events while hovered.
pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    buttons: Res<ButtonInput<MouseButton>>,
    sim: Res<Simulation>,
    mut pointer: ResMut<PointerInput>,
) {
    pointer.0.pressed = buttons.pressed(MouseButton::Left);

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(scene) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let world = Vec2::new(sim.config.world_width, sim.config.world_height);
    let p = scene_to_world(scene, world);
    pointer.0.x = p.x;
    pointer.0.y = p.y;
}
