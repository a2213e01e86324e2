/// Perspective projection matrix construction
use nalgebra::Matrix4;

/// Viewport and lens parameters for the perspective projection.
///
/// Expected ranges: width and height positive, `0 < fov_degrees < 180`,
/// `0 < near < far`. All values are startup constants here, so they are
/// carried as-is rather than validated at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub width: f32,
    pub height: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(width: f32, height: f32, fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            width,
            height,
            fov_degrees,
            near,
            far,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Build the 4x4 perspective matrix (row-vector convention).
    ///
    /// With `a = width/height` and `f = 1/tan(fov/2)`:
    ///
    /// ```text
    /// | a*f  0    0              0 |
    /// | 0    f    0              0 |
    /// | 0    0    far/(far-n)    1 |
    /// | 0    0    -far*n/(far-n) 0 |
    /// ```
    ///
    /// The `[2][3] = 1` term copies view-space z into `w`, which is what the
    /// perspective divide in `transform::apply` divides by. Callers cache the
    /// result per surface size; it only changes when the viewport does.
    pub fn matrix(&self) -> Matrix4<f32> {
        let a = self.aspect();
        let f = 1.0 / (self.fov_degrees.to_radians() * 0.5).tan();
        let depth = self.far / (self.far - self.near);

        Matrix4::new(
            a * f, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, depth, 1.0, //
            0.0, 0.0, -self.near * depth, 0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_matrix_layout() {
        let matrix = Projection::new(800.0, 600.0, 90.0, 0.1, 1000.0).matrix();

        assert!((matrix[(2, 3)] - 1.0).abs() < EPSILON);

        // Everything outside the five populated cells is zero.
        let populated = [(0, 0), (1, 1), (2, 2), (3, 2), (2, 3)];
        for row in 0..4 {
            for col in 0..4 {
                if !populated.contains(&(row, col)) {
                    assert_eq!(matrix[(row, col)], 0.0, "cell ({}, {})", row, col);
                }
            }
        }
    }

    #[test]
    fn test_ninety_degree_lens() {
        // fov = 90 gives f = 1/tan(45) = 1, so [0][0] is just the aspect.
        let projection = Projection::new(800.0, 600.0, 90.0, 0.1, 1000.0);
        let matrix = projection.matrix();

        assert!((matrix[(0, 0)] - 4.0 / 3.0).abs() < EPSILON);
        assert!((matrix[(1, 1)] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_depth_terms() {
        let projection = Projection::new(640.0, 480.0, 90.0, 0.1, 1000.0);
        let matrix = projection.matrix();

        let expected_22 = 1000.0 / (1000.0 - 0.1);
        let expected_32 = (-1000.0 * 0.1) / (1000.0 - 0.1);
        assert!((matrix[(2, 2)] - expected_22).abs() < EPSILON);
        assert!((matrix[(3, 2)] - expected_32).abs() < EPSILON);
    }
}
