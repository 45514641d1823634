use crate::geometry::{isqrt, Point};
use crate::optimizer::mutation::random_restricted_point;
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PlacementKind {
    Uniform,
    Triangular,
}

pub fn generate_placement(rng: &mut Rng, kind: PlacementKind, n: usize, size: f64) -> Vec<Point> {
    match kind {
        PlacementKind::Uniform => generate_uniform(rng, n, size),
        PlacementKind::Triangular => generate_triangular(rng, n, size),
    }
}

/// N independent points with integer coordinates in `[0, size)`.
/// Duplicates are possible; they simply resolve to radius 0.
pub fn generate_uniform(rng: &mut Rng, n: usize, size: f64) -> Vec<Point> {
    (0..n)
        .map(|_| {
            let x = (rng.f64() * size).floor();
            let y = (rng.f64() * size).floor();
            Point::new(x, y)
        })
        .collect()
}

/// Circles per row for the triangular lattice.
///
/// `floor(sqrt(N))` rows alternating wide (`ceil(sqrt(N))`) and narrow
/// (`wide - 1`, or `wide` for perfect squares), starting with a wide row.
/// The last row takes whatever is left so the rows sum to exactly N.
pub fn row_lengths(n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }

    let row_count = isqrt(n);
    let (wide, narrow) = if row_count * row_count == n {
        (row_count, row_count)
    } else {
        (row_count + 1, row_count)
    };

    let mut rows: Vec<usize> = (0..row_count - 1)
        .map(|i| if i % 2 == 0 { wide } else { narrow })
        .collect();
    let placed: usize = rows.iter().sum();
    rows.push(n - placed);
    rows
}

/// Staggered rows with a small random jitter.
///
/// Row `i` sits at height `i * h + h / 2` with `h = size / rows`. Odd rows are
/// shifted by half a column pitch. Rows are emitted in pairs and the two rows of
/// a pair interleave their circles, so consecutive indices alternate rows.
pub fn generate_triangular(rng: &mut Rng, n: usize, size: f64) -> Vec<Point> {
    let rows = row_lengths(n);
    if rows.is_empty() {
        return Vec::new();
    }

    let row_count = rows.len();
    let h = size / row_count as f64;
    let initial_epsilon = (size / (n * n) as f64).round();

    // Wide rows get size / (wide + 1), narrow rows size / (narrow + 1); the
    // remainder row spaces its own circles the same way.
    let pitch = |row: usize| -> f64 { size / (rows[row] + 1) as f64 };

    let mut jittered = |row: usize, col: usize| -> Point {
        let w = pitch(row);
        let half_offset = if row % 2 == 0 { 0.0 } else { 0.5 };
        let x = (col as f64 + half_offset) * w + w / 2.0;
        let y = row as f64 * h + h / 2.0;

        let x = random_restricted_point(rng, x, initial_epsilon, size).clamp(0.0, size);
        let y = random_restricted_point(rng, y, initial_epsilon, size).clamp(0.0, size);
        Point::new(x, y)
    };

    let mut points = Vec::with_capacity(n);
    for first in (0..row_count).step_by(2) {
        let second = first + 1;
        let len_a = rows[first];
        let len_b = if second < row_count { rows[second] } else { 0 };

        for col in 0..len_a.max(len_b) {
            if col < len_a {
                points.push(jittered(first, col));
            }
            if col < len_b {
                points.push(jittered(second, col));
            }
        }
    }
    points
}
