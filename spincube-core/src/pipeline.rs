/// Per-frame transform pipeline: model space to screen space
use nalgebra::{Matrix4, Point3};

use crate::geometry::{Mesh, Triangle};
use crate::projection::Projection;
use crate::transform::{self, TransformError};

/// Fixed view-space depth offset pushing the cube past the near plane.
pub const DEPTH_OFFSET: f32 = 3.0;

/// Transforms mesh triangles into screen space for one viewport.
///
/// The projection matrix is built once here and cached; rotation matrices
/// are rebuilt every frame from the driver's angle. Stages per vertex:
/// rotate about Z by `theta`, rotate about X by `theta/2` (half speed, so
/// the cube tumbles instead of spinning in place), translate `z` by
/// `DEPTH_OFFSET`, project, then map NDC to pixels.
pub struct Pipeline {
    projection: Matrix4<f32>,
    width: f32,
    height: f32,
}

impl Pipeline {
    pub fn new(projection: &Projection) -> Self {
        log::debug!(
            "pipeline for {}x{} viewport, fov {} deg, near {} far {}",
            projection.width,
            projection.height,
            projection.fov_degrees,
            projection.near,
            projection.far
        );
        Self {
            projection: projection.matrix(),
            width: projection.width,
            height: projection.height,
        }
    }

    /// Project every triangle of the mesh at rotation angle `theta`.
    ///
    /// Output triangles keep mesh order and winding; no culling, clipping,
    /// or depth sorting. Screen z is the post-divide depth, unused by the
    /// wireframe rasterizer.
    pub fn project_frame(&self, mesh: &Mesh, theta: f32) -> Result<Vec<Triangle>, TransformError> {
        let rot_z = transform::rotation_z(theta);
        let rot_x = transform::rotation_x(theta * 0.5);

        mesh.triangles
            .iter()
            .map(|triangle| self.project_triangle(triangle, &rot_z, &rot_x))
            .collect()
    }

    fn project_triangle(
        &self,
        triangle: &Triangle,
        rot_z: &Matrix4<f32>,
        rot_x: &Matrix4<f32>,
    ) -> Result<Triangle, TransformError> {
        let mut vertices = [Point3::origin(); 3];
        for (out, vertex) in vertices.iter_mut().zip(&triangle.vertices) {
            *out = self.project_vertex(vertex, rot_z, rot_x)?;
        }
        Ok(Triangle { vertices })
    }

    fn project_vertex(
        &self,
        vertex: &Point3<f32>,
        rot_z: &Matrix4<f32>,
        rot_x: &Matrix4<f32>,
    ) -> Result<Point3<f32>, TransformError> {
        let rotated = transform::apply(vertex, rot_z)?;
        let rotated = transform::apply(&rotated, rot_x)?;

        let view = Point3::new(rotated.x, rotated.y, rotated.z + DEPTH_OFFSET);
        let ndc = transform::apply(&view, &self.projection)?;

        // NDC [-1,1] to pixels; y stays downward (canvas convention).
        Ok(Point3::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (ndc.y + 1.0) * 0.5 * self.height,
            ndc.z,
        ))
    }
}
