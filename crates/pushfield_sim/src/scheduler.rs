use bevy::prelude::*;
use std::time::Instant;

/// Source of wall-clock time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Real time, measured from when the clock was created
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to (tests, replays)
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: start_ms }
    }

    pub fn set(&mut self, now_ms: f64) {
        self.now = now_ms;
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.now += dt_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

/// Fixed-interval gate over a continuous stream of "ready to draw" timestamps.
///
/// Each offer either becomes a tick or is skipped. Accepted ticks are snapped back onto
/// the `start + k * interval` grid, so late offers don't push every later tick back.
#[derive(Resource, Debug, Clone)]
pub struct FrameGate {
    interval_ms: f64,
    last_accepted_ms: f64,
    running: bool,
}

impl FrameGate {
    pub fn new(tick_rate: f64, start_ms: f64) -> Self {
        debug_assert!(
            tick_rate.is_finite() && tick_rate > 0.0,
            "tick rate must be > 0, got {tick_rate}"
        );
        Self {
            interval_ms: 1000.0 / tick_rate,
            last_accepted_ms: start_ms,
            running: true,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_accepted_ms(&self) -> f64 {
        self.last_accepted_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true when a tick is due at `now_ms`
    pub fn offer(&mut self, now_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        let elapsed = now_ms - self.last_accepted_ms;
        if elapsed < self.interval_ms {
            return false;
        }
        self.last_accepted_ms = now_ms - elapsed.rem_euclid(self.interval_ms);
        true
    }

    /// Stop accepting ticks until `resume`
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Start accepting again, with the grid restarting at `now_ms`
    pub fn resume(&mut self, now_ms: f64) {
        self.last_accepted_ms = now_ms;
        self.running = true;
    }
}

/// A `FrameGate` driven by its own clock
pub struct FrameScheduler<C: Clock> {
    clock: C,
    gate: FrameGate,
}

impl<C: Clock> FrameScheduler<C> {
    pub fn new(clock: C, tick_rate: f64) -> Self {
        let gate = FrameGate::new(tick_rate, clock.now_ms());
        Self { clock, gate }
    }

    /// Offer the current time to the gate
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_ms();
        self.gate.offer(now)
    }

    pub fn stop(&mut self) {
        self.gate.stop();
    }

    pub fn resume(&mut self) {
        let now = self.clock.now_ms();
        self.gate.resume(now);
    }

    pub fn gate(&self) -> &FrameGate {
        &self.gate
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
