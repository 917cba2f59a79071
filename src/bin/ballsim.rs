//! Headless fixed-rate driver: `ballsim [CONFIG.json]`.

use std::env;
use std::thread;
use std::time::{Duration, Instant};

use ballsim::config::SimConfig;
use ballsim::core::clock::TickCounter;
use ballsim::core::render::FrameRecorder;
use ballsim::core::Simulation;
use ballsim::error::Result;
use ballsim::logger::log_init;
use log::{debug, info};

fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    log_init(config.log_file.as_deref())?;
    debug!("config: {config:?}");

    let mut sim = Simulation::new(&config)?;
    let period = Duration::from_secs_f64(1.0 / config.tick_rate_hz);
    let mut counter = TickCounter::new(Instant::now());
    let mut frame = FrameRecorder::default();

    info!(
        "running {} balls at {} Hz",
        sim.num_particles(),
        config.tick_rate_hz
    );

    while config.max_ticks.map_or(true, |max| sim.ticks() < max) {
        let started = Instant::now();

        sim.render(&mut frame);
        sim.tick();

        if let Some(tps) = counter.record(Instant::now()) {
            let [px, py] = sim.momentum();
            info!(
                "{tps} ticks/s, tick {}, {} circles drawn, energy {:.1}, momentum ({px:.1}, {py:.1})",
                sim.ticks(),
                frame.circles.len(),
                sim.kinetic_energy()
            );
        }

        if let Some(rest) = period.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    info!("stopped after {} ticks", sim.ticks());
    Ok(())
}
