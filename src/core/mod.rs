//! Core physics for the ball container.
//!
//! Leaf-first: materials and particles, wall reflection, pairwise collisions, the per-tick
//! step, and the `Simulation` that owns particle state between ticks. Placement,
//! rendering and tick counting are small collaborators around it.

pub mod boundary;
pub mod clock;
pub mod collision;
pub mod factory;
pub mod material;
pub mod particle;
pub mod render;
pub mod sim;
pub mod step;

pub use factory::{ParticleFactory, RandomPlacement};
pub use material::{Material, MATERIALS};
pub use particle::{mass, Particle};
pub use sim::Simulation;
pub use step::step;
