/// Shape geometry: vertices, edge/face topology, color, pose
use nalgebra::Point3;
use thiserror::Error;

use crate::transform::Pose;

/// An RGB color for drawing primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    /// Light grey used for ground shadows
    pub const SHADOW: Color = Color::new(190, 190, 190);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A wireframe edge connecting two vertex indices
pub type Edge = (usize, usize);

/// A face as an ordered list of vertex indices, used only for shadow
/// polygons
pub type Face = Vec<usize>;

/// Topology errors detected at shape construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("edge {edge} references vertex {index}, but shape has {vertex_count} vertices")]
    EdgeIndexOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("face {face} references vertex {index}, but shape has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
    #[error("face {face} has {len} vertices, need at least 3")]
    DegenerateFace { face: usize, len: usize },
}

/// A polyhedral shape: immutable topology plus a mutable pose
///
/// Vertices live in the shape's local frame; edges and faces index into
/// them. Only `pose` changes after construction.
#[derive(Debug, Clone)]
pub struct Shape {
    pub name: String,
    pub vertices: Vec<Point3<f64>>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
    pub color: Color,
    pub pose: Pose,
}

impl Shape {
    /// Build a shape, rejecting malformed topology up front so rendering
    /// never has to bounds-check
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Point3<f64>>,
        edges: Vec<Edge>,
        faces: Vec<Face>,
        color: Color,
    ) -> Result<Self, GeometryError> {
        let vertex_count = vertices.len();

        for (i, &(a, b)) in edges.iter().enumerate() {
            for index in [a, b] {
                if index >= vertex_count {
                    return Err(GeometryError::EdgeIndexOutOfRange {
                        edge: i,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        for (i, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(GeometryError::DegenerateFace {
                    face: i,
                    len: face.len(),
                });
            }
            for &index in face {
                if index >= vertex_count {
                    return Err(GeometryError::FaceIndexOutOfRange {
                        face: i,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        Ok(Self {
            name: name.into(),
            vertices,
            edges,
            faces,
            color,
            pose: Pose::default(),
        })
    }

    /// Unit cube: 8 vertices, 12 edges, 6 quad faces
    pub fn cube(color: Color) -> Self {
        let vertices = vec![
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(-1.0, -1.0, 1.0),
            Point3::new(1.0, -1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, 1.0, 1.0),
        ];
        let edges = vec![
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0), // near face
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4), // far face
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7), // connecting edges
        ];
        let faces = vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![2, 3, 7, 6],
            vec![1, 2, 6, 5],
            vec![0, 3, 7, 4],
        ];

        // Static topology, all indices in range
        Self {
            name: "Cube".into(),
            vertices,
            edges,
            faces,
            color,
            pose: Pose::default(),
        }
    }

    /// Square pyramid: 4 base vertices plus an apex
    pub fn pyramid(color: Color) -> Self {
        let vertices = vec![
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, 1.0),
            Point3::new(-1.0, -1.0, 1.0),
            Point3::new(0.0, 1.0, 0.0), // apex
        ];
        let edges = vec![
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0), // base
            (0, 4),
            (1, 4),
            (2, 4),
            (3, 4), // sides
        ];
        let faces = vec![
            vec![0, 1, 2, 3],
            vec![0, 1, 4],
            vec![1, 2, 4],
            vec![2, 3, 4],
            vec![3, 0, 4],
        ];

        Self {
            name: "Pyramid".into(),
            vertices,
            edges,
            faces,
            color,
            pose: Pose::default(),
        }
    }

    /// Build a flat shape from screen-space clicks (the authoring workflow)
    ///
    /// Each click is normalized into the local (x, y, 0) plane relative to
    /// the screen center, caller-supplied edges are kept, the outline is
    /// auto-closed with consecutive edges (skipping pairs already connected
    /// in either direction), and a single face spans all vertices in click
    /// order. Fewer than 3 clicks yields `None`.
    pub fn from_screen_outline(
        name: impl Into<String>,
        clicks: &[(i32, i32)],
        extra_edges: &[Edge],
        width: u32,
        height: u32,
        color: Color,
    ) -> Option<Self> {
        if clicks.len() < 3 {
            return None;
        }

        let center_x = (width / 2) as f64;
        let center_y = (height / 2) as f64;
        let scale_x = width as f64 / 4.0;
        let scale_y = height as f64 / 4.0;

        let vertices: Vec<Point3<f64>> = clicks
            .iter()
            .map(|&(sx, sy)| {
                let local_x = (sx as f64 - center_x) / scale_x;
                let local_y = -(sy as f64 - center_y) / scale_y;
                Point3::new(local_x, local_y, 0.0)
            })
            .collect();

        let mut edges: Vec<Edge> = extra_edges.to_vec();
        for i in 0..vertices.len() {
            let j = (i + 1) % vertices.len();
            let connected = edges.iter().any(|&(a, b)| (a, b) == (i, j) || (a, b) == (j, i));
            if !connected {
                edges.push((i, j));
            }
        }

        let face: Face = (0..vertices.len()).collect();

        Shape::new(name, vertices, edges, vec![face], color).ok()
    }
}
