use crate::config::SimConfig;
use crate::core::factory::{ParticleFactory, RandomPlacement};
use crate::core::particle::{mass, Particle, DIM};
use crate::core::render::{draw, Renderer};
use crate::core::step::step;
use crate::error::{Error, Result};
use log::{debug, info};

/// Ball container: axis-aligned box `[0, width] x [0, height]` with reflecting walls.
#[derive(Debug)]
pub struct Simulation {
    ticks: u64,
    bounds: [f64; DIM],
    pub particles: Vec<Particle>,
}

fn check_bounds(width: f64, height: f64) -> Result<[f64; DIM]> {
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(Error::InvalidParam(
            "container width and height must be finite and > 0".into(),
        ));
    }
    Ok([width, height])
}

impl Simulation {
    /// Create a simulation with `config.ball_count` randomly placed balls.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let mut factory = RandomPlacement::new(config)?;
        Self::with_factory(&mut factory, config.ball_count, config.width, config.height)
    }

    /// Create a simulation from any particle factory.
    pub fn with_factory<F: ParticleFactory + ?Sized>(
        factory: &mut F,
        count: usize,
        width: f64,
        height: f64,
    ) -> Result<Self> {
        let particles = factory.spawn(count, width, height)?;
        Self::from_particles(particles, width, height)
    }

    /// Wrap an existing particle list.
    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Result<Self> {
        let bounds = check_bounds(width, height)?;
        debug!(
            "simulation created with {} particles in {}x{}",
            particles.len(),
            width,
            height
        );
        Ok(Self {
            ticks: 0,
            bounds,
            particles,
        })
    }

    /// Advance one tick with the current container size.
    pub fn tick(&mut self) {
        step(&mut self.particles, self.bounds[0], self.bounds[1]);
        self.ticks += 1;
    }

    /// Change the container size (external resize event). Particles are not moved.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.bounds = check_bounds(width, height)?;
        info!("container resized to {width}x{height}");
        Ok(())
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        draw(renderer, &self.particles);
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn bounds(&self) -> [f64; DIM] {
        self.bounds
    }

    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Positions as a Vec of fixed-size arrays.
    pub fn positions(&self) -> Vec<[f64; DIM]> {
        self.particles.iter().map(|p| p.r).collect()
    }

    /// Velocities as a Vec of fixed-size arrays.
    pub fn velocities(&self) -> Vec<[f64; DIM]> {
        self.particles.iter().map(|p| p.v).collect()
    }

    pub fn radii(&self) -> Vec<f64> {
        self.particles.iter().map(|p| p.radius()).collect()
    }

    /// Compute total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }

    /// Total momentum per axis (diagnostic).
    pub fn momentum(&self) -> [f64; DIM] {
        let mut out = [0.0_f64; DIM];
        for p in &self.particles {
            let m = mass(p);
            for (o, &v) in out.iter_mut().zip(p.v.iter()) {
                *o += m * v;
            }
        }
        out
    }
}
