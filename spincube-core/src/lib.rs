/// Spincube Core Library - Software wireframe pipeline
///
/// This library provides the stateless math core for the rotating-cube demo:
/// mesh geometry, rotation and projection matrices, the per-frame transform
/// pipeline, and the frame driver. Hosts plug in a drawing surface and a
/// frame scheduler through the `Surface` trait.

pub mod driver;
pub mod geometry;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use driver::FrameDriver;
pub use geometry::{Mesh, Triangle};
pub use pipeline::Pipeline;
pub use projection::Projection;
pub use surface::Surface;
pub use transform::TransformError;
