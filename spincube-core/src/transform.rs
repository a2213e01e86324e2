/// Rotation matrices and the homogeneous point transform
use custom_error::custom_error;
use nalgebra::{Matrix4, Point3};

custom_error! {pub TransformError
    DivideByZero = "homogeneous w term is zero (point at or behind the eye)"
}

/// Rotation about the Z axis by `theta` radians.
///
/// Matrices here use the row-vector convention: a point transforms as
/// `p * M`, so translation and projection terms live in the bottom row and
/// `apply` sums down columns.
pub fn rotation_z(theta: f32) -> Matrix4<f32> {
    let (s, c) = theta.sin_cos();
    Matrix4::new(
        c, s, 0.0, 0.0, //
        -s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation about the X axis by `theta` radians.
pub fn rotation_x(theta: f32) -> Matrix4<f32> {
    let (s, c) = theta.sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, s, 0.0, //
        0.0, -s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Transform a point by a 4x4 matrix in homogeneous coordinates, including
/// the perspective divide.
///
/// The same operation serves rotation matrices (where `w` is always 1) and
/// the projection matrix (where `w` carries view-space depth). A `w` of
/// exactly zero is a degenerate projection and fails rather than clamping.
pub fn apply(point: &Point3<f32>, m: &Matrix4<f32>) -> Result<Point3<f32>, TransformError> {
    let w = point.x * m[(0, 3)] + point.y * m[(1, 3)] + point.z * m[(2, 3)] + m[(3, 3)];
    if w == 0.0 {
        return Err(TransformError::DivideByZero);
    }

    let x = point.x * m[(0, 0)] + point.y * m[(1, 0)] + point.z * m[(2, 0)] + m[(3, 0)];
    let y = point.x * m[(0, 1)] + point.y * m[(1, 1)] + point.z * m[(2, 1)] + m[(3, 1)];
    let z = point.x * m[(0, 2)] + point.y * m[(1, 2)] + point.z * m[(2, 2)] + m[(3, 2)];

    Ok(Point3::new(x / w, y / w, z / w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const EPSILON: f32 = 1e-5;

    fn assert_point_eq(a: &Point3<f32>, b: &Point3<f32>) {
        assert!(
            (a - b).norm() < EPSILON,
            "points differ: {:?} vs {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_identity_maps_origin_to_origin() {
        let origin = Point3::origin();
        let result = apply(&origin, &Matrix4::identity()).unwrap();
        assert_point_eq(&result, &origin);
    }

    #[test]
    fn test_zero_w_fails() {
        // All of column 3 zero, so w = 0 for every input point.
        let degenerate = Matrix4::zeros();
        let result = apply(&Point3::new(1.0, 2.0, 3.0), &degenerate);
        assert!(matches!(result, Err(TransformError::DivideByZero)));
    }

    #[test]
    fn test_zero_angle_is_identity() {
        for matrix in [rotation_z(0.0), rotation_x(0.0)] {
            assert!((matrix - Matrix4::identity()).norm() < EPSILON);
        }
        let p = Point3::new(1.0, 0.0, 1.0);
        assert_point_eq(&apply(&p, &rotation_z(0.0)).unwrap(), &p);
        assert_point_eq(&apply(&p, &rotation_x(0.0)).unwrap(), &p);
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let p = Point3::new(1.0, 0.0, 0.0);
        let turned = apply(&p, &rotation_z(TAU / 4.0)).unwrap();
        assert_point_eq(&turned, &Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotation_is_periodic() {
        let theta = 0.7;
        for p in [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
        ] {
            let forward = apply(&p, &rotation_z(theta)).unwrap();
            let back = apply(&forward, &rotation_z(TAU - theta)).unwrap();
            assert_point_eq(&back, &p);

            let forward = apply(&p, &rotation_x(theta)).unwrap();
            let back = apply(&forward, &rotation_x(TAU - theta)).unwrap();
            assert_point_eq(&back, &p);
        }
    }

    #[test]
    fn test_rotations_are_orthonormal() {
        for matrix in [rotation_z(1.3), rotation_x(-0.4)] {
            let product = matrix * matrix.transpose();
            assert!((product - Matrix4::identity()).norm() < EPSILON);
        }
    }
}
