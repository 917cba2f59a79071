//! # ballsim
//!
//! Circular balls bouncing in a rectangular container. Each tick moves every ball by its
//! velocity, flips velocity components at the walls and resolves every overlapping pair
//! with a per-axis 1D elastic collision solve.
//!
//! ## Architecture
//!
//! - `core`: particles, materials, reflection, collisions, the tick step and `Simulation`
//! - `config`: JSON-loadable settings for placement and the driver
//! - `error`: crate-wide error type
//! - `logger`: `simplelog` setup for binaries
//!
//! With the `python` feature the crate also builds a `ballsim` extension module.

pub mod config;
pub mod core;
pub mod error;
pub mod logger;

#[cfg(feature = "python")]
mod python {
    use numpy::ndarray::Array2;
    use numpy::{IntoPyArray, PyArray1, PyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::config::SimConfig;
    use crate::core::particle::DIM;
    use crate::core::Simulation;

    fn py_err<E: ToString>(e: E) -> PyErr {
        PyValueError::new_err(e.to_string())
    }

    fn to_array(rows: &[[f64; DIM]]) -> Array2<f64> {
        let mut arr = Array2::<f64>::zeros((rows.len(), DIM));
        for (i, row) in rows.iter().enumerate() {
            for k in 0..DIM {
                arr[[i, k]] = row[k];
            }
        }
        arr
    }

    /// Python-facing wrapper around the Rust `Simulation`.
    ///
    /// - __new__(count=15, width=960.0, height=540.0, seed=None)
    /// - step(ticks=1)
    /// - resize(width, height)
    /// - get_positions() / get_velocities() -> np.ndarray, shape (N, 2)
    /// - get_radii() -> np.ndarray, shape (N,)
    #[pyclass]
    pub struct BallSim {
        sim: Simulation,
    }

    #[pymethods]
    impl BallSim {
        /// Randomly place `count` balls in a `width` x `height` container.
        ///
        /// Errors: raises ValueError on invalid parameters.
        #[new]
        #[pyo3(signature = (count=15, width=960.0, height=540.0, seed=None))]
        fn new(count: usize, width: f64, height: f64, seed: Option<u64>) -> PyResult<Self> {
            let config = SimConfig {
                ball_count: count,
                width,
                height,
                seed,
                ..SimConfig::default()
            };
            let sim = Simulation::new(&config).map_err(py_err)?;
            Ok(Self { sim })
        }

        /// Advance `ticks` ticks (releases the GIL during computation).
        #[pyo3(signature = (ticks=1))]
        fn step(&mut self, py: Python<'_>, ticks: u64) {
            let sim = &mut self.sim;
            py.detach(|| {
                for _ in 0..ticks {
                    sim.tick();
                }
            });
        }

        fn resize(&mut self, width: f64, height: f64) -> PyResult<()> {
            self.sim.resize(width, height).map_err(py_err)
        }

        #[getter]
        fn ticks(&self) -> u64 {
            self.sim.ticks()
        }

        fn kinetic_energy(&self) -> f64 {
            self.sim.kinetic_energy()
        }

        fn get_positions<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
            to_array(&self.sim.positions()).into_pyarray(py)
        }

        fn get_velocities<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
            to_array(&self.sim.velocities()).into_pyarray(py)
        }

        fn get_radii<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
            self.sim.radii().into_pyarray(py)
        }
    }

    #[pymodule]
    fn ballsim(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<BallSim>()?;
        Ok(())
    }
}
