// ABOUTME: Periodic timers that drive the simulated charger and the clock.
// ABOUTME: Dropping the Ticker stops both timers so no callback outlives the window.

use std::time::Duration;

use hfc_core::config::SimulationConfig;
use slint::{Timer, TimerMode};
use tracing::debug;

pub struct Ticker {
    charge: Timer,
    clock: Timer,
}

impl Ticker {
    pub fn start(
        sim: &SimulationConfig,
        on_charge: impl FnMut() + 'static,
        on_clock: impl FnMut() + 'static,
    ) -> Self {
        let charge = Timer::default();
        charge.start(TimerMode::Repeated, sim.charge_interval(), on_charge);

        let clock = Timer::default();
        clock.start(TimerMode::Repeated, sim.clock_interval(), on_clock);

        debug!(
            charge_ms = duration_ms(sim.charge_interval()),
            clock_ms = duration_ms(sim.clock_interval()),
            "ticker started"
        );
        Self { charge, clock }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.charge.stop();
        self.clock.stop();
        debug!("ticker stopped");
    }
}

fn duration_ms(d: Duration) -> u64 {
    d.as_millis().try_into().unwrap_or(u64::MAX)
}
