use crate::core::particle::{Particle, DIM};

/// Flip velocity components of a particle that touches a wall while still moving outward.
///
/// Walls sit at 0 and at `bounds[k]` on each axis. Only the sign of `v` changes; a particle
/// that has already overshot keeps its position and is pulled back by later ticks.
pub fn reflect(p: &mut Particle, bounds: [f64; DIM]) {
    let radius = p.radius();
    for k in 0..DIM {
        if p.r[k] + radius >= bounds[k] && p.v[k] > 0.0 {
            p.v[k] = -p.v[k];
        }
        if p.r[k] - radius <= 0.0 && p.v[k] < 0.0 {
            p.v[k] = -p.v[k];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Material;
    use crate::error::Result;

    fn ball(r: [f64; DIM], v: [f64; DIM], radius: f64) -> Result<Particle> {
        Particle::new(0, r, v, radius, Material::Granite)
    }

    #[test]
    fn right_wall_negates_vx() -> Result<()> {
        let mut p = ball([98.0, 50.0], [3.0, 1.0], 5.0)?;
        reflect(&mut p, [100.0, 100.0]);
        assert_eq!(p.v, [-3.0, 1.0]);
        // position untouched
        assert_eq!(p.r, [98.0, 50.0]);
        Ok(())
    }

    #[test]
    fn inbound_particle_past_wall_keeps_velocity() -> Result<()> {
        let mut p = ball([98.0, 50.0], [-3.0, 0.0], 5.0)?;
        reflect(&mut p, [100.0, 100.0]);
        assert_eq!(p.v, [-3.0, 0.0]);
        Ok(())
    }

    #[test]
    fn low_walls_are_inclusive() -> Result<()> {
        // exactly touching both low walls
        let mut p = ball([5.0, 5.0], [-2.0, -1.0], 5.0)?;
        reflect(&mut p, [100.0, 100.0]);
        assert_eq!(p.v, [2.0, 1.0]);
        Ok(())
    }

    #[test]
    fn interior_particle_unchanged() -> Result<()> {
        let mut p = ball([50.0, 50.0], [2.0, -2.0], 5.0)?;
        reflect(&mut p, [100.0, 100.0]);
        assert_eq!(p.v, [2.0, -2.0]);
        Ok(())
    }
}
