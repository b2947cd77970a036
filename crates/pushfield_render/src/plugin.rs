use bevy::prelude::*;
use pushfield_sim::pipeline::SimSet;

use super::bodies;
use super::camera;
use super::input;
use super::ui;

/// Main render plugin: camera, pointer sampling, drawing and HUD
pub struct PushFieldRenderPlugin;

impl Plugin for PushFieldRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(Startup, (camera::spawn_camera, ui::spawn_hud))
            .add_systems(
                Update,
                (
                    input::track_pointer.in_set(SimSet::Input),
                    ui::control_system.before(SimSet::Tick),
                    bodies::draw_frame.after(SimSet::Tick),
                    ui::update_hud.after(SimSet::Tick),
                ),
            );
    }
}
