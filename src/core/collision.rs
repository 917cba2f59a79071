use crate::core::particle::{mass, Particle, DIM};

/// Post-collision velocity pair on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSolution {
    pub v1: f64,
    pub v2: f64,
}

/// Round to the nearest integer with ties toward +inf (`-2.5 -> -2`, `2.5 -> 3`).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    let r = x.floor();
    if x - r >= 0.5 {
        r + 1.0
    } else {
        r
    }
}

#[inline]
fn round3(x: f64) -> f64 {
    round_half_up(x * 1000.0) / 1000.0
}

/// Whether two circles overlap. Touching counts.
#[inline]
pub fn overlaps(a: &Particle, b: &Particle) -> bool {
    let d2: f64 = (0..DIM).map(|k| (a.r[k] - b.r[k]).powi(2)).sum();
    let reach = a.radius() + b.radius();
    d2 <= reach * reach
}

/// Solve a 1D two-body elastic collision without the final integer rounding.
///
/// Inputs are rounded to three decimals first. `v1` is taken from the momentum/energy
/// quadratic, rejecting the root that reproduces the incoming velocity; `v2` then follows
/// from momentum alone, so `m1*v1 + m2*v2` is preserved for the rounded inputs.
pub fn solve_axis(m1: f64, v1: f64, m2: f64, v2: f64) -> AxisSolution {
    let (m1, v1, m2, v2) = (round3(m1), round3(v1), round3(m2), round3(v2));

    let p = m1 * v1 + m2 * v2;
    let e = m1 * v1 * v1 + m2 * v2 * v2;
    let a = m1 * m2 + m1 * m1;
    let b = -2.0 * p * m1;
    let c = p * p - m2 * e;

    let mut d = (b * b - 4.0 * a * c).sqrt();
    if d.is_nan() {
        d = 0.0;
    }

    let mut v1_out = (-b - d) / (2.0 * a);
    if round_half_up(v1_out) == round_half_up(v1) {
        v1_out = (-b + d) / (2.0 * a);
    }
    let v2_out = (p - m1 * v1_out) / m2;

    AxisSolution {
        v1: v1_out,
        v2: v2_out,
    }
}

/// [`solve_axis`] with both results rounded to integers.
pub fn collide_axis(m1: f64, v1: f64, m2: f64, v2: f64) -> AxisSolution {
    let s = solve_axis(m1, v1, m2, v2);
    AxisSolution {
        v1: round_half_up(s.v1),
        v2: round_half_up(s.v2),
    }
}

/// Replace both particles' velocities, solving each axis as its own 1D collision.
pub fn resolve(a: &mut Particle, b: &mut Particle) {
    let (ma, mb) = (mass(a), mass(b));
    for k in 0..DIM {
        let s = collide_axis(ma, a.v[k], mb, b.v[k]);
        a.v[k] = s.v1;
        b.v[k] = s.v2;
    }
}
