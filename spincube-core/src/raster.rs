/// Line-only rasterization of screen-space triangles
use crate::geometry::Triangle;
use crate::surface::Surface;

/// Draw a screen-space triangle as its three edges: (0,1), (1,2), (2,0).
///
/// No fill and no bounds checks; coordinates go to the surface as-is.
pub fn outline<S: Surface + ?Sized>(surface: &mut S, triangle: &Triangle) {
    let [a, b, c] = &triangle.vertices;
    surface.line(a.x, a.y, b.x, b.y);
    surface.line(b.x, b.y, c.x, c.y);
    surface.line(c.x, c.y, a.x, a.y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        lines: Vec<(f32, f32, f32, f32)>,
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> f32 {
            100.0
        }

        fn height(&self) -> f32 {
            100.0
        }

        fn clear(&mut self) {}

        fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
            self.lines.push((x0, y0, x1, y1));
        }
    }

    #[test]
    fn test_outline_draws_three_edges() {
        let triangle = Triangle::from_coords([0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [5.0, 8.0, 0.0]);
        let mut surface = RecordingSurface::default();

        outline(&mut surface, &triangle);

        assert_eq!(
            surface.lines,
            vec![
                (0.0, 0.0, 10.0, 0.0),
                (10.0, 0.0, 5.0, 8.0),
                (5.0, 8.0, 0.0, 0.0),
            ]
        );
    }
}
