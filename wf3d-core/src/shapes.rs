/// Shape generators
use nalgebra::{Point3, Vector3};

use crate::error::{Result, Wf3dError};
use crate::geometry::{Edge, Shape};

/// Where the origin handed to a generator sits on the generated shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Origin is the minimum (lowest x, y, z) vertex
    #[default]
    Corner,
    /// Origin is the centroid
    Centered,
}

/// Build an axis-aligned cube.
///
/// Vertex `i` sits at `origin + side * (i & 1, (i >> 1) & 1, (i >> 2) & 1)`, so
/// the first four points form the bottom face and the last four the top face.
/// Each vertex is joined to the neighbour along every axis on which its bit is
/// clear, which yields the twelve cube edges exactly once.
pub fn cube(index: usize, origin: Point3<f64>, side: f64, placement: Placement) -> Result<Shape> {
    if !side.is_finite() || side <= 0.0 {
        return Err(Wf3dError::InvalidSideLength(side));
    }

    let start = match placement {
        Placement::Corner => origin,
        Placement::Centered => origin - Vector3::repeat(side / 2.0),
    };

    let mut points = Vec::with_capacity(8);
    for i in 0..4 {
        let x = start.x + (i % 2) as f64 * side;
        let y = start.y + (i / 2) as f64 * side;
        points.push(Point3::new(x, y, start.z));
    }
    for i in 0..4 {
        let bottom = points[i];
        points.push(Point3::new(bottom.x, bottom.y, bottom.z + side));
    }

    let mut edges: Vec<Edge> = Vec::with_capacity(12);
    for i in 0..8usize {
        for axis in [1usize, 2, 4] {
            if i & axis == 0 {
                edges.push((i, i | axis));
            }
        }
    }

    Shape::new(index, points, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn normalized(edges: &[Edge]) -> BTreeSet<Edge> {
        edges.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect()
    }

    #[test]
    fn test_cube_has_eight_points_and_twelve_edges() {
        let shape = cube(0, Point3::origin(), 1.0, Placement::Corner).unwrap();
        assert_eq!(shape.points().len(), 8);
        assert_eq!(shape.edges().len(), 12);
        assert_eq!(normalized(shape.edges()).len(), 12);
    }

    #[test]
    fn test_cube_edge_set_matches_pairing_rule() {
        // Pairs produced by walking vertices 0, 3, 5, 6 and joining each to its
        // three neighbours.
        let expected: BTreeSet<Edge> = normalized(&[
            (0, 1),
            (0, 2),
            (0, 4),
            (3, 1),
            (3, 2),
            (3, 7),
            (5, 1),
            (5, 4),
            (5, 7),
            (6, 2),
            (6, 4),
            (6, 7),
        ]);
        let shape = cube(0, Point3::origin(), 1.0, Placement::Corner).unwrap();
        assert_eq!(normalized(shape.edges()), expected);
    }

    #[test]
    fn test_every_edge_has_side_length() {
        for side in [1.0, 20.0, 100.0, 120.0] {
            let shape = cube(0, Point3::new(-150.0, -100.0, 7.0), side, Placement::Centered)
                .unwrap();
            for length in shape.edge_lengths() {
                assert_eq!(length, side);
            }
        }
    }

    #[test]
    fn test_vertex_order() {
        let shape = cube(0, Point3::new(1.0, 2.0, 3.0), 2.0, Placement::Corner).unwrap();
        let points = shape.points();
        assert_eq!(points[0], Point3::new(1.0, 2.0, 3.0));
        assert_eq!(points[1], Point3::new(3.0, 2.0, 3.0));
        assert_eq!(points[2], Point3::new(1.0, 4.0, 3.0));
        assert_eq!(points[3], Point3::new(3.0, 4.0, 3.0));
        assert_eq!(points[7], Point3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_centered_matches_shifted_corner() {
        let origin = Point3::new(300.0, -200.0, 500.0);
        let side = 120.0;
        let centered = cube(0, origin, side, Placement::Centered).unwrap();
        let corner = cube(
            0,
            origin - Vector3::repeat(side / 2.0),
            side,
            Placement::Corner,
        )
        .unwrap();
        assert_eq!(centered.points(), corner.points());
    }

    #[test]
    fn test_corner_is_default_placement() {
        assert_eq!(Placement::default(), Placement::Corner);
    }

    #[test]
    fn test_rejects_bad_side() {
        for side in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(cube(0, Point3::origin(), side, Placement::Corner).is_err());
        }
    }
}
