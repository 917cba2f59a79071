use crate::core::material::Material;
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Fixed spatial dimension (2D).
pub const DIM: usize = 2;

/// A ball in the container.
///
/// Fields:
/// - `id`: stable identifier
/// - `r`: center position [x, y]
/// - `v`: velocity [vx, vy], in position units per tick
/// - `radius`: fixed at creation (> 0)
/// - `material`: fixed at creation; determines density
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Stable particle identifier.
    pub id: u32,
    /// Position (x, y).
    pub r: [f64; DIM],
    /// Velocity (vx, vy).
    pub v: [f64; DIM],
    radius: f64,
    material: Material,
}

impl Particle {
    /// Create a new particle after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `radius` is non-positive or any component is NaN/inf.
    pub fn new(
        id: u32,
        r: [f64; DIM],
        v: [f64; DIM],
        radius: f64,
        material: Material,
    ) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !r.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !v.iter().all(|x| x.is_finite()) {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            id,
            r,
            v,
            radius,
            material,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.material
    }

    #[inline]
    pub fn density(&self) -> f64 {
        self.material.density()
    }

    /// Kinetic energy 1/2 m |v|^2, using the stylized [`mass`].
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        let vsq: f64 = self.v.iter().map(|&c| c * c).sum();
        0.5 * mass(self) * vsq
    }
}

/// Stylized mass `2 * PI * radius * density`.
///
/// This is intentionally neither an area nor a volume; collision results depend on it.
#[inline]
pub fn mass(p: &Particle) -> f64 {
    2.0 * PI * p.radius * p.density()
}
