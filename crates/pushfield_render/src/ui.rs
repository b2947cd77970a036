use bevy::prelude::*;
use bevy::time::Real;
use pushfield_sim::pipeline::{LatestFrame, PointerInput};
use pushfield_sim::scheduler::FrameGate;
use pushfield_sim::simulation::Simulation;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Push Field"),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(Color::srgba(0.8, 0.8, 0.8, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(6.0),
            left: Val::Px(6.0),
            ..default()
        },
        HudText,
    ));
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Update HUD text every 10th frame
pub fn update_hud(
    sim: Res<Simulation>,
    gate: Res<FrameGate>,
    latest: Res<LatestFrame>,
    pointer: Res<PointerInput>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let paused = if gate.is_running() { "" } else { " [PAUSED]" };
    let pressed = if pointer.0.pressed { " [pressed]" } else { "" };
    let under = match sim.body_at(pointer.0.position()) {
        Some(i) => format!("#{} (mass {:.2})", i, sim.bodies[i].mass()),
        None => "-".to_string(),
    };

    **text = format!(
        "Tick: {} | {:.0} ticks/s{}\n\
         Bodies: {} | In field: {} | Mean speed: {:.2}\n\
         Pointer: ({:.0}, {:.0}){} | Under pointer: {}\n\
         [Space] Pause  [R] Respawn",
        sim.ticks(),
        sim.config.tick_rate,
        paused,
        sim.bodies.len(),
        latest.0.in_field_count(),
        sim.mean_speed(),
        pointer.0.x,
        pointer.0.y,
        pressed,
        under,
    );
}

/// Keyboard controls: pause/resume the tick gate, respawn the population
pub fn control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time<Real>>,
    mut gate: ResMut<FrameGate>,
    pointer: Res<PointerInput>,
    mut sim: ResMut<Simulation>,
    mut latest: ResMut<LatestFrame>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        if gate.is_running() {
            gate.stop();
            info!("Paused at tick {}", sim.ticks());
        } else {
            gate.resume(time.elapsed_secs_f64() * 1000.0);
            info!("Resumed at tick {}", sim.ticks());
        }
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        let seed = sim.config.seed.wrapping_add(1);
        sim.respawn(seed);
        latest.0 = sim.snapshot(&pointer.0);
    }
}
