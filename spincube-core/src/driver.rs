/// Frame driver: owns the rotation state and renders one frame per tick
use crate::geometry::Mesh;
use crate::pipeline::Pipeline;
use crate::raster;
use crate::surface::Surface;
use crate::transform::TransformError;

/// Angle advanced per tick, in radians. Matches a gentle tumble at ~60 FPS.
pub const DEFAULT_STEP: f32 = 0.02;

/// Drives the pipeline once per host tick.
///
/// The driver never schedules itself: the host (terminal loop,
/// requestAnimationFrame) calls `tick` once per frame and decides when to
/// stop. All mutable state is the angle, owned here, so a failed frame
/// leaves nothing corrupted for the next one.
pub struct FrameDriver {
    mesh: Mesh,
    pipeline: Pipeline,
    theta: f32,
    step: f32,
    clear_each_frame: bool,
}

impl FrameDriver {
    pub fn new(mesh: Mesh, pipeline: Pipeline) -> Self {
        Self {
            mesh,
            pipeline,
            theta: 0.0,
            step: DEFAULT_STEP,
            clear_each_frame: true,
        }
    }

    /// Keep previous frames on the surface instead of clearing, leaving
    /// motion trails.
    pub fn with_clear_each_frame(mut self, clear: bool) -> Self {
        self.clear_each_frame = clear;
        self
    }

    pub fn clear_each_frame(&self) -> bool {
        self.clear_each_frame
    }

    pub fn set_clear_each_frame(&mut self, clear: bool) {
        self.clear_each_frame = clear;
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    /// Render one frame: advance the angle, then project and outline every
    /// mesh triangle. `end_frame` runs even when a transform fails, so the
    /// surface's draw scope is always balanced.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), TransformError> {
        self.theta += self.step;

        surface.begin_frame();
        let result = self.draw(surface);
        surface.end_frame();
        result
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), TransformError> {
        if self.clear_each_frame {
            surface.clear();
        }
        for triangle in self.pipeline.project_frame(&self.mesh, self.theta)? {
            raster::outline(surface, &triangle);
        }
        Ok(())
    }
}
