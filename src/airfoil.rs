use crate::geometry::distances2::dist;
use itertools::Itertools;
use ncollide2d::na::{Matrix2xX, Point2};
use ncollide2d::shape::Polyline;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub mod coefficients;
pub mod generate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Upper,
    Lower,
}

impl Display for Surface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Surface::Upper => write!(f, "upper"),
            Surface::Lower => write!(f, "lower"),
        }
    }
}

/// The [2 x 2n] coordinate matrix of a generated airfoil. Row 0 holds X and row 1 holds Z. The
/// first `n` columns are the upper surface from the trailing edge to the leading edge, the
/// remaining `n` are the lower surface from the leading edge back to the trailing edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilCoordinates {
    matrix: Matrix2xX<f64>,
    n_pts: usize,
}

impl AirfoilCoordinates {
    pub(crate) fn new(matrix: Matrix2xX<f64>, n_pts: usize) -> AirfoilCoordinates {
        AirfoilCoordinates { matrix, n_pts }
    }

    pub fn matrix(&self) -> &Matrix2xX<f64> {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix2xX<f64> {
        self.matrix
    }

    /// Stations per side
    pub fn n_pts(&self) -> usize {
        self.n_pts
    }

    pub fn x(&self) -> Vec<f64> {
        self.matrix.row(0).iter().copied().collect_vec()
    }

    pub fn z(&self) -> Vec<f64> {
        self.matrix.row(1).iter().copied().collect_vec()
    }

    pub fn point(&self, column: usize) -> Point2<f64> {
        Point2::new(self.matrix[(0, column)], self.matrix[(1, column)])
    }

    pub fn upper(&self) -> Vec<Point2<f64>> {
        (0..self.n_pts).map(|c| self.point(c)).collect()
    }

    pub fn lower(&self) -> Vec<Point2<f64>> {
        (self.n_pts..2 * self.n_pts).map(|c| self.point(c)).collect()
    }

    pub fn to_section(&self) -> AirfoilSection {
        AirfoilSection {
            upper: self.upper(),
            lower: self.lower(),
        }
    }
}

/// An airfoil section as two lists of points, in the same traversal order as the coordinate
/// matrix it came from.
#[derive(Debug, Clone, Serialize)]
pub struct AirfoilSection {
    #[serde(serialize_with = "crate::serialize::points")]
    pub upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "crate::serialize::points")]
    pub lower: Vec<Point2<f64>>,
}

impl AirfoilSection {
    /// The full contour, trailing edge over the upper surface to the leading edge and back
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        self.upper.iter().chain(self.lower.iter()).copied().collect()
    }

    /// The outer contour as a polyline, with adjacent points closer than `tol` merged
    pub fn to_polyline(&self, tol: f64) -> Polyline<f64> {
        let mut vertices = self.to_outer_contour();
        vertices.dedup_by(|a, b| dist(a, b) <= tol);
        Polyline::new(vertices, None)
    }

    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
