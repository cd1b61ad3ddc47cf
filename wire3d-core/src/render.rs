/// Painter's-order rendering of projected shapes against a rasterizer
/// backend
use crate::geometry::{Color, Shape};
use crate::projection::{Camera, ScreenPoint};
use crate::scene::Scene;
use crate::transform::project_shape;

/// Color used for vertex markers
const MARKER_COLOR: Color = Color::RED;

/// Drawing backend contract: anything that can draw filled polygons, line
/// segments, and point markers in integer screen coordinates
pub trait Rasterizer {
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color);
    fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, color: Color);
    fn draw_marker(&mut self, point: ScreenPoint, color: Color);
}

/// Project and draw one shape: shadow polygons, then wireframe edges, then
/// vertex markers
///
/// Shadows go down first so the wireframe always paints over them. Any
/// primitive touching a clipped vertex is skipped whole; a shadow face is
/// skipped if even one of its points is clipped.
pub fn render_shape<R: Rasterizer>(shape: &Shape, camera: &Camera, raster: &mut R) {
    let projected = project_shape(shape, camera);

    for face in &shape.faces {
        let points: Option<Vec<ScreenPoint>> = face
            .iter()
            .map(|&index| projected.shadow[index])
            .collect();
        if let Some(points) = points {
            raster.fill_polygon(&points, Color::SHADOW);
        }
    }

    for &(a, b) in &shape.edges {
        if let (Some(start), Some(end)) = (projected.screen[a], projected.screen[b]) {
            raster.draw_line(start, end, shape.color);
        }
    }

    for point in projected.screen.iter().flatten() {
        raster.draw_marker(*point, MARKER_COLOR);
    }
}

/// Draw every shape in scene order
///
/// Shapes are not depth-sorted against each other; overlap resolves by
/// insertion order alone.
pub fn render_scene<R: Rasterizer>(scene: &Scene, camera: &Camera, raster: &mut R) {
    for shape in scene.shapes() {
        render_shape(shape, camera, raster);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Polygon,
        Line,
        Marker,
    }

    /// Records every primitive instead of drawing it
    #[derive(Default)]
    struct RecordingRasterizer {
        polygons: Vec<(Vec<ScreenPoint>, Color)>,
        lines: Vec<(ScreenPoint, ScreenPoint, Color)>,
        markers: Vec<(ScreenPoint, Color)>,
        ops: Vec<Op>,
    }

    impl Rasterizer for RecordingRasterizer {
        fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
            self.polygons.push((points.to_vec(), color));
            self.ops.push(Op::Polygon);
        }

        fn draw_line(&mut self, a: ScreenPoint, b: ScreenPoint, color: Color) {
            self.lines.push((a, b, color));
            self.ops.push(Op::Line);
        }

        fn draw_marker(&mut self, point: ScreenPoint, color: Color) {
            self.markers.push((point, color));
            self.ops.push(Op::Marker);
        }
    }

    fn cube_at(z: f64) -> Shape {
        let mut cube = Shape::cube(Color::BLUE);
        cube.pose.position = Vector3::new(0.0, 0.0, z);
        cube
    }

    #[test]
    fn test_fully_visible_cube_draws_every_primitive() {
        let camera = Camera::new(800, 600);
        let mut raster = RecordingRasterizer::default();
        render_shape(&cube_at(5.0), &camera, &mut raster);

        assert_eq!(raster.lines.len(), 12);
        assert_eq!(raster.polygons.len(), 6);
        assert_eq!(raster.markers.len(), 8);
        assert!(raster.lines.iter().all(|&(_, _, c)| c == Color::BLUE));
        assert!(raster.polygons.iter().all(|(_, c)| *c == Color::SHADOW));
    }

    #[test]
    fn test_shadow_polygons_keep_face_point_counts() {
        let camera = Camera::new(800, 600);
        let mut raster = RecordingRasterizer::default();
        let mut pyramid = Shape::pyramid(Color::GREEN);
        pyramid.pose.position = Vector3::new(0.0, 0.0, 7.0);
        render_shape(&pyramid, &camera, &mut raster);

        // One quad base plus four triangle sides
        let mut counts: Vec<usize> = raster.polygons.iter().map(|(p, _)| p.len()).collect();
        counts.sort_unstable();
        assert_eq!(counts, vec![3, 3, 3, 3, 4]);
    }

    #[test]
    fn test_clipped_vertex_drops_its_edges_and_faces() {
        let camera = Camera::new(800, 600);
        let mut raster = RecordingRasterizer::default();
        // z = 0.6: near-face vertices sit at z = -0.4, behind the camera,
        // while the far face at z = 1.6 still projects.
        render_shape(&cube_at(0.6), &camera, &mut raster);

        // Only the far face's 4 edges survive; every face and the shadow
        // pass touch at least one clipped vertex.
        assert_eq!(raster.lines.len(), 4);
        assert_eq!(raster.markers.len(), 4);
        // Shadow points share the world z of their vertex, so near-face
        // shadow points are clipped too and 5 of 6 faces are dropped.
        assert_eq!(raster.polygons.len(), 1);
        assert_eq!(raster.polygons[0].0.len(), 4);
    }

    #[test]
    fn test_shadows_draw_before_edges_and_markers() {
        let camera = Camera::new(800, 600);
        let mut raster = RecordingRasterizer::default();
        render_shape(&cube_at(5.0), &camera, &mut raster);

        // All polygons first, then all lines, then all markers
        let mut expected = vec![Op::Polygon; 6];
        expected.extend(vec![Op::Line; 12]);
        expected.extend(vec![Op::Marker; 8]);
        assert_eq!(raster.ops, expected);
    }

    #[test]
    fn test_empty_scene_draws_nothing() {
        let camera = Camera::new(800, 600);
        let mut raster = RecordingRasterizer::default();
        render_scene(&Scene::new(), &camera, &mut raster);

        assert!(raster.polygons.is_empty());
        assert!(raster.lines.is_empty());
        assert!(raster.markers.is_empty());
    }

    #[test]
    fn test_scene_draws_shapes_in_insertion_order() {
        let camera = Camera::new(800, 600);
        let mut scene = Scene::new();
        let mut cube = Shape::cube(Color::BLUE);
        cube.pose.position = Vector3::new(-2.5, 0.0, 7.0);
        scene.push(cube);
        let mut pyramid = Shape::pyramid(Color::GREEN);
        pyramid.pose.position = Vector3::new(2.5, 0.0, 7.0);
        scene.push(pyramid);

        let mut raster = RecordingRasterizer::default();
        render_scene(&scene, &camera, &mut raster);

        // 12 cube edges then 8 pyramid edges, colors in scene order
        assert_eq!(raster.lines.len(), 20);
        assert!(raster.lines[..12].iter().all(|&(_, _, c)| c == Color::BLUE));
        assert!(raster.lines[12..].iter().all(|&(_, _, c)| c == Color::GREEN));
    }
}
