use crate::config::SimConfig;
use crate::core::material::Material;
use crate::core::particle::Particle;
use crate::error::{Error, Result};
use log::{debug, warn};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Produces the initial particle set for a container.
pub trait ParticleFactory {
    fn spawn(&mut self, count: usize, width: f64, height: f64) -> Result<Vec<Particle>>;
}

/// Random placement: integer radius, integer position nudged off the walls,
/// small non-negative integer velocity and a material drawn from a palette.
#[derive(Debug)]
pub struct RandomPlacement {
    rng: StdRng,
    radius_min: f64,
    radius_span: f64,
    max_speed: f64,
    palette: Vec<Material>,
}

impl RandomPlacement {
    /// Build from config ranges. `seed = None` draws a seed from the thread RNG.
    pub fn new(config: &SimConfig) -> Result<Self> {
        if config.materials.is_empty() {
            return Err(Error::InvalidParam("material palette must not be empty".into()));
        }
        let rng: StdRng = match config.seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };
        Ok(Self {
            rng,
            radius_min: config.radius_min,
            radius_span: config.radius_span,
            max_speed: config.max_speed,
            palette: config.materials.clone(),
        })
    }

    /// Uniform integer in `[0, n)` as `floor(U * n)`.
    #[inline]
    fn floor_draw(&mut self, n: f64) -> f64 {
        (self.rng.random::<f64>() * n).floor()
    }
}

/// Push a coordinate off a wall by `1.1 * radius` if its circle touches 0 or `extent`.
fn nudge_inside(mut c: f64, radius: f64, extent: f64) -> f64 {
    if c - radius <= 0.0 {
        c += radius * 1.1;
    }
    if c + radius >= extent {
        c -= radius * 1.1;
    }
    c
}

impl ParticleFactory for RandomPlacement {
    fn spawn(&mut self, count: usize, width: f64, height: f64) -> Result<Vec<Particle>> {
        let count = u32::try_from(count)
            .map_err(|_| Error::InvalidParam("particle count exceeds u32".into()))?;
        let mut particles = Vec::with_capacity(count as usize);
        for id in 0..count {
            let radius = self.floor_draw(self.radius_span) + self.radius_min;
            let x = self.floor_draw(width);
            let y = self.floor_draw(height);
            let x = nudge_inside(x, radius, width);
            let y = nudge_inside(y, radius, height);

            let vx = self.floor_draw(self.max_speed);
            let vy = self.floor_draw(self.max_speed);

            let material = Material::sample(&self.palette, &mut self.rng)
                .ok_or_else(|| Error::InvalidParam("material palette must not be empty".into()))?;

            if x - radius < 0.0 || x + radius > width || y - radius < 0.0 || y + radius > height {
                warn!(
                    "particle {id} (radius {radius}) does not fit inside {width}x{height}; placed at ({x}, {y})"
                );
            }

            debug!("particle {id}: radius {radius}, {} at ({x}, {y})", material.name());
            particles.push(Particle::new(id, [x, y], [vx, vy], radius, material)?);
        }
        Ok(particles)
    }
}
