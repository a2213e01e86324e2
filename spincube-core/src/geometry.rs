/// Geometry primitives for wireframe rendering
use nalgebra::Point3;

/// A triangle face defined by three corners.
///
/// Corners are ordered, but winding is unused: nothing here fills or culls,
/// so a triangle is only ever drawn as its outline. Pipeline stages treat
/// triangles as values and return new instances rather than mutating shared
/// ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    pub fn from_coords(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Self {
        Self::new(
            Point3::new(a[0], a[1], a[2]),
            Point3::new(b[0], b[1], b[2]),
            Point3::new(c[0], c[1], c[2]),
        )
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// The unit cube spanning {0,1}^3, two triangles per face.
    ///
    /// Built once at startup and never mutated afterwards. Triangle order is
    /// south face, east, north, west, top, bottom; the order is also the draw
    /// order since no depth sorting happens downstream.
    pub fn unit_cube() -> Self {
        let mut mesh = Self::with_capacity(12);

        // South (z = 0)
        mesh.add_triangle(Triangle::from_coords(
            [0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
        ));
        mesh.add_triangle(Triangle::from_coords(
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
        ));

        // East (x = 1)
        mesh.add_triangle(Triangle::from_coords(
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [1.0, 1.0, 1.0],
        ));
        mesh.add_triangle(Triangle::from_coords(
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
        ));

        // North (z = 1)
        mesh.add_triangle(Triangle::from_coords(
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ));
        mesh.add_triangle(Triangle::from_coords(
            [1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [0.0, 0.0, 1.0],
        ));

        // West (x = 0)
        mesh.add_triangle(Triangle::from_coords(
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 1.0],
            [0.0, 1.0, 0.0],
        ));
        mesh.add_triangle(Triangle::from_coords(
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0],
        ));

        // Top (y = 1)
        mesh.add_triangle(Triangle::from_coords(
            [0.0, 1.0, 0.0],
            [0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
        ));
        mesh.add_triangle(Triangle::from_coords(
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, 0.0],
        ));

        // Bottom (y = 0)
        mesh.add_triangle(Triangle::from_coords(
            [1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
        ));
        mesh.add_triangle(Triangle::from_coords(
            [1.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
        ));

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_shape() {
        let cube = Mesh::unit_cube();
        assert_eq!(cube.triangles.len(), 12);

        let vertex_count: usize = cube.triangles.iter().map(|t| t.vertices.len()).sum();
        assert_eq!(vertex_count, 36);
    }

    #[test]
    fn test_unit_cube_coordinates_are_binary() {
        let cube = Mesh::unit_cube();
        for triangle in &cube.triangles {
            for vertex in &triangle.vertices {
                for coord in [vertex.x, vertex.y, vertex.z] {
                    assert!(coord == 0.0 || coord == 1.0, "coordinate {} not in {{0,1}}", coord);
                }
            }
        }
    }

    #[test]
    fn test_unit_cube_covers_all_corners() {
        let cube = Mesh::unit_cube();
        for corner in 0..8u8 {
            let expected = Point3::new(
                (corner & 1) as f32,
                ((corner >> 1) & 1) as f32,
                ((corner >> 2) & 1) as f32,
            );
            let hit = cube
                .triangles
                .iter()
                .flat_map(|t| t.vertices.iter())
                .any(|v| *v == expected);
            assert!(hit, "corner {:?} missing from cube", expected);
        }
    }
}
