/// Geometry primitives for wireframe rendering
use nalgebra::{Point3, Vector3};

use crate::error::{Result, Wf3dError};

/// A pair of indices into a shape's point list
pub type Edge = (usize, usize);

/// Componentwise `a - b`
pub fn subtract(a: &Point3<f64>, b: &Point3<f64>) -> Vector3<f64> {
    a - b
}

/// Euclidean norm of `v`
pub fn magnitude(v: &Vector3<f64>) -> f64 {
    v.norm()
}

pub fn is_finite_point(p: &Point3<f64>) -> bool {
    p.iter().all(|c| c.is_finite())
}

/// A wireframe shape: world-space points joined by edges.
///
/// Shapes are built once and never mutated afterwards. The order of `points`
/// matters because `edges` refer to positions in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    index: usize,
    points: Vec<Point3<f64>>,
    edges: Vec<Edge>,
}

impl Shape {
    pub fn new(index: usize, points: Vec<Point3<f64>>, edges: Vec<Edge>) -> Result<Self> {
        if let Some(&(a, b)) = edges
            .iter()
            .find(|(a, b)| *a >= points.len() || *b >= points.len())
        {
            return Err(Wf3dError::InvalidEdge(a, b, points.len()));
        }
        if !points.iter().all(is_finite_point) {
            return Err(Wf3dError::NonFinite("shape points"));
        }

        Ok(Self {
            index,
            points,
            edges,
        })
    }

    /// Position of this shape in the owning scene
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// World-space length of every edge, in edge order
    pub fn edge_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| magnitude(&subtract(&self.points[a], &self.points[b])))
    }
}
