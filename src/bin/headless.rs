//! Run the push-field scenario without a window.
//! The pointer follows a scripted orbit around the world center and a summary is
//! printed at the end.
//!
//! Usage: pushfield-headless [config.json] [ticks]

use pushfield_core::{PointerState, SimConfig, Vector2};
use pushfield_sim::scheduler::{FrameScheduler, SystemClock};
use pushfield_sim::simulation::Simulation;
use std::path::Path;
use std::time::{Duration, Instant};

const DEFAULT_TICKS: u64 = 300;

/// Ticks for the scripted pointer to go once around the orbit
const ORBIT_TICKS: f32 = 240.0;

/// Where the scripted pointer is on `tick`
fn scripted_pointer(config: &SimConfig, tick: u64) -> PointerState {
    let angle = tick as f32 / ORBIT_TICKS * std::f32::consts::TAU;
    let center = Vector2::new(config.world_width * 0.5, config.world_height * 0.5);
    let reach = config.world_width.min(config.world_height) * 0.25;
    let offset = Vector2::new(angle.cos(), angle.sin()) * reach;
    PointerState {
        pressed: (tick / 60) % 2 == 1,
        ..PointerState::at(center + offset)
    }
}

fn parse_args() -> Result<(SimConfig, u64), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => SimConfig::load(Path::new(path))?,
        None => SimConfig::default(),
    };
    let ticks = match args.get(1) {
        Some(n) => n
            .parse::<u64>()
            .map_err(|e| format!("Invalid tick count {n:?}: {e}"))?,
        None => DEFAULT_TICKS,
    };
    Ok((config, ticks))
}

fn run() -> Result<(), String> {
    let (config, ticks) = parse_args()?;

    let mut sim = Simulation::spawn(config.clone());
    let mut scheduler = FrameScheduler::new(SystemClock::new(), config.tick_rate);

    eprintln!(
        "Simulating {} bodies for {} ticks at {:.0} ticks/s...",
        sim.bodies.len(),
        ticks,
        config.tick_rate
    );

    let started = Instant::now();
    let mut offers = 0u64;
    let mut in_field_total = 0usize;
    let mut in_field_peak = 0usize;

    while sim.ticks() < ticks {
        offers += 1;
        if !scheduler.poll() {
            // Stand-in for waiting on the next display refresh
            std::thread::sleep(Duration::from_millis(1));
            continue;
        }

        let pointer = scripted_pointer(&config, sim.ticks());
        let frame = sim.step(&pointer);
        let in_field = frame.in_field_count();
        in_field_total += in_field;
        in_field_peak = in_field_peak.max(in_field);

        if frame.tick % 60 == 0 {
            eprint!("  {}/{}...\r", frame.tick, ticks);
        }
    }

    let wall = started.elapsed().as_secs_f64();
    let ticks_run = sim.ticks().max(1);

    println!();
    println!("PUSH FIELD HEADLESS RUN");
    println!("  Bodies:            {}", sim.bodies.len());
    println!("  Ticks:             {} ({} offers)", sim.ticks(), offers);
    println!(
        "  Wall time:         {:.2}s ({:.1} ticks/s)",
        wall,
        sim.ticks() as f64 / wall.max(1e-9)
    );
    println!("  Mean in field:     {:.2}", in_field_total as f64 / ticks_run as f64);
    println!("  Peak in field:     {}", in_field_peak);
    println!("  Final mean speed:  {:.3}", sim.mean_speed());
    match sim.body_at(sim.field.position()) {
        Some(i) => println!("  Body under field center: #{i}"),
        None => println!("  Body under field center: none"),
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("pushfield-headless: {e}");
        std::process::exit(1);
    }
}
