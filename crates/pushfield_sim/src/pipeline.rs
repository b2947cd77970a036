use bevy::prelude::*;
use bevy::time::Real;
use pushfield_core::{Frame, PointerState};

use super::scheduler::FrameGate;
use super::simulation::Simulation;

/// Ordering inside `Update`: pointer sampling happens before the tick
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Tick,
}

/// Latest pointer sample, written by the input system and read by the tick
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerInput(pub PointerState);

/// Output of the most recent accepted tick. Drawn every display frame until replaced.
#[derive(Resource, Debug, Default)]
pub struct LatestFrame(pub Frame);

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LatestFrame>()
            .configure_sets(Update, SimSet::Input.before(SimSet::Tick))
            .add_systems(Startup, start_clock)
            .add_systems(Update, simulation_tick.in_set(SimSet::Tick));
    }
}

fn now_ms(time: &Time<Real>) -> f64 {
    time.elapsed_secs_f64() * 1000.0
}

/// Restart the tick grid from the moment the app comes up
fn start_clock(time: Res<Time<Real>>, mut gate: ResMut<FrameGate>, sim: Res<Simulation>) {
    gate.resume(now_ms(&time));
    info!(
        "Simulation started: {} bodies at {:.0} ticks/s ({:.3} ms interval)",
        sim.bodies.len(),
        sim.config.tick_rate,
        gate.interval_ms()
    );
}

/// Runs on every display frame; only advances the simulation when the gate lets it through
fn simulation_tick(
    time: Res<Time<Real>>,
    mut gate: ResMut<FrameGate>,
    mut sim: ResMut<Simulation>,
    pointer: Res<PointerInput>,
    mut latest: ResMut<LatestFrame>,
) {
    if !gate.offer(now_ms(&time)) {
        return;
    }
    latest.0 = sim.step(&pointer.0);
    debug!(
        "Tick {}: {} bodies in field",
        latest.0.tick,
        latest.0.in_field_count()
    );
}
