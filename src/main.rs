use bevy::prelude::*;
use pushfield_core::{PointerState, SimConfig};
use pushfield_render::plugin::PushFieldRenderPlugin;
use pushfield_sim::pipeline::{PointerInput, SimulationPlugin};
use pushfield_sim::scheduler::FrameGate;
use pushfield_sim::simulation::Simulation;
use std::path::Path;

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pushfield: {e}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Push Field".into(),
                resolution: (config.world_width, config.world_height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(FrameGate::new(config.tick_rate, 0.0))
        // Field stays where it was configured until the cursor first shows up
        .insert_resource(PointerInput(PointerState::at(config.field_position)))
        .insert_resource(Simulation::spawn(config))
        .add_plugins(SimulationPlugin)
        .add_plugins(PushFieldRenderPlugin)
        .run();
}

/// Optional first argument: path to a JSON config file
fn load_config() -> Result<SimConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => SimConfig::load(Path::new(&path)),
        None => Ok(SimConfig::default()),
    }
}
