use crate::core::boundary::reflect;
use crate::core::collision::{overlaps, resolve};
use crate::core::particle::{Particle, DIM};
use log::trace;

/// Move a particle by one tick of its velocity.
#[inline]
pub fn integrate(p: &mut Particle) {
    for k in 0..DIM {
        p.r[k] += p.v[k];
    }
}

/// Advance every particle by one tick inside a `width` x `height` container.
///
/// Order: integrate all, reflect all, then resolve overlapping pairs `(i, j)` with `i < j`
/// in ascending order. A pair resolved earlier in the tick feeds its new velocities into
/// later pairs.
pub fn step(particles: &mut [Particle], width: f64, height: f64) {
    let bounds = [width, height];
    for p in particles.iter_mut() {
        integrate(p);
        reflect(p, bounds);
    }
    let contacts = resolve_pairs(particles);
    if contacts > 0 {
        trace!("tick resolved {contacts} contact(s)");
    }
}

/// Resolve every overlapping unordered pair once. Returns the number of contacts.
pub(crate) fn resolve_pairs(particles: &mut [Particle]) -> usize {
    let n = particles.len();
    let mut contacts = 0usize;
    for i in 0..n {
        let (head, tail) = particles.split_at_mut(i + 1);
        let pi = &mut head[i];
        for pj in tail.iter_mut() {
            if overlaps(pi, pj) {
                resolve(pi, pj);
                contacts += 1;
            }
        }
    }
    contacts
}
