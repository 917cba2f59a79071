use crate::core::particle::Particle;

/// Drawing surface fed once per frame.
pub trait Renderer {
    /// Called before any circle of a frame.
    fn begin_frame(&mut self) {}

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64);
}

/// Draw every particle, in list order.
pub fn draw(renderer: &mut dyn Renderer, particles: &[Particle]) {
    renderer.begin_frame();
    for p in particles {
        renderer.draw_circle(p.r[0], p.r[1], p.radius());
    }
}

/// Keeps the last frame in memory. Useful for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    pub frames: u64,
    pub circles: Vec<(f64, f64, f64)>,
}

impl Renderer for FrameRecorder {
    fn begin_frame(&mut self) {
        self.frames += 1;
        self.circles.clear();
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.circles.push((x, y, radius));
    }
}
