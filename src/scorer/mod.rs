pub mod matrix;

pub use self::matrix::DistanceMatrix;

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Twice the distance from `p` to the nearest side of the square.
#[inline(always)]
pub fn edge_bound(p: &Point, size: f64) -> f64 {
    p.x.min(p.y).min(size - p.x).min(size - p.y) * 2.0
}

/// Largest common radius such that no two circles overlap and none leaves the square.
///
/// Coincident centers or centers on an edge give 0. That is a valid (useless)
/// radius, not an error.
pub fn min_radius(matrix: &DistanceMatrix, centers: &[Point], size: f64) -> f64 {
    let mut min_distance = matrix.min_pair_distance();

    for p in centers {
        let bound = edge_bound(p, size);
        if bound < min_distance {
            min_distance = bound;
        }
    }

    min_distance / 2.0
}

/// Builds the distance matrix and resolves the radius in one go.
pub fn resolve_radius(centers: &[Point], size: f64) -> f64 {
    let matrix = DistanceMatrix::build(centers);
    min_radius(&matrix, centers, size)
}

#[inline(always)]
pub fn scaled_radius(radius: f64, size: f64) -> f64 {
    radius / size
}

/// `1 / (r / size)`. Lower is better; a zero radius scores `+inf`.
#[inline(always)]
pub fn objective(radius: f64, size: f64) -> f64 {
    1.0 / scaled_radius(radius, size)
}

/// Fraction of the square covered by `n` circles of the given scaled radius.
#[inline(always)]
pub fn filled_area_fraction(n: usize, scaled_radius: f64) -> f64 {
    n as f64 * PI * scaled_radius * scaled_radius
}

/// The constraint that pins the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    Pair(usize, usize),
    Edge(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub radius: f64,
    pub scaled_radius: f64,
    pub objective: f64,
    pub filled_fraction: f64,
    pub empty_fraction: f64,
    pub min_pair_distance: f64,
    pub min_edge_bound: f64,
    pub limiting: Option<Constraint>,
}

/// Full breakdown of how the radius for `centers` is obtained.
pub fn score_details(centers: &[Point], size: f64) -> ScoreDetails {
    let matrix = DistanceMatrix::build(centers);

    let mut limiting = None;
    let mut min_distance = f64::INFINITY;
    let mut min_pair_distance = f64::INFINITY;

    if let Some((d, i, j)) = matrix.min_pair() {
        min_pair_distance = d;
        min_distance = d;
        limiting = Some(Constraint::Pair(i, j));
    }

    let mut min_edge_bound = f64::INFINITY;
    for (i, p) in centers.iter().enumerate() {
        let bound = edge_bound(p, size);
        if bound < min_edge_bound {
            min_edge_bound = bound;
        }
        // Strict: on a tie the pair stays the limiting constraint.
        if bound < min_distance {
            min_distance = bound;
            limiting = Some(Constraint::Edge(i));
        }
    }

    let radius = min_distance / 2.0;
    let scaled = scaled_radius(radius, size);
    let filled = filled_area_fraction(centers.len(), scaled);

    ScoreDetails {
        radius,
        scaled_radius: scaled,
        objective: objective(radius, size),
        filled_fraction: filled,
        empty_fraction: 1.0 - filled,
        min_pair_distance,
        min_edge_bound,
        limiting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_bound_uses_nearest_side() {
        assert_eq!(edge_bound(&Point::new(10.0, 50.0), 100.0), 20.0);
        assert_eq!(edge_bound(&Point::new(50.0, 95.0), 100.0), 10.0);
        assert_eq!(edge_bound(&Point::new(50.0, 50.0), 100.0), 100.0);
    }

    #[test]
    fn test_objective_of_zero_radius_is_infinite() {
        assert_eq!(objective(0.0, 100.0), f64::INFINITY);
        assert!(objective(0.0, 100.0) <= objective(0.0, 100.0));
    }

    #[test]
    fn test_score_details_matches_solver() {
        let centers = [Point::new(25.0, 50.0), Point::new(75.0, 50.0)];
        let details = score_details(&centers, 100.0);

        assert_eq!(details.radius, resolve_radius(&centers, 100.0));
        assert_eq!(details.radius, 25.0);
        // Pair distance (50) ties the edge bound (2 * 25): pair wins.
        assert_eq!(details.limiting, Some(Constraint::Pair(0, 1)));
    }

    #[test]
    fn test_score_details_empty() {
        let details = score_details(&[], 100.0);
        assert_eq!(details.limiting, None);
        assert_eq!(details.radius, f64::INFINITY);
    }
}
