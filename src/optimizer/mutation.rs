use crate::geometry::{Placement, Point};
use crate::scorer;
use fastrand::Rng;

/// Random value near `x` within `[max(0, x - epsilon), min(x + epsilon, size))`.
#[inline(always)]
pub fn random_restricted_point(rng: &mut Rng, x: f64, epsilon: f64, size: f64) -> f64 {
    random_restricted_point_within(rng, x, epsilon, 0.0, size)
}

/// Draws `lower_x + floor(u * (upper_x - lower_x))` for `u` uniform in `[0, 1)`,
/// where the window `[lower_x, upper_x]` is `x +/- epsilon` clipped to the bounds.
/// Integer `x` and `epsilon` therefore yield an integer.
pub fn random_restricted_point_within(
    rng: &mut Rng,
    x: f64,
    epsilon: f64,
    lower: f64,
    upper: f64,
) -> f64 {
    let lower_x = lower.max(x - epsilon);
    let upper_x = (x + epsilon).min(upper);

    lower_x + (rng.f64() * (upper_x - lower_x)).floor()
}

/// `count` distinct indices from `0..n`, in the order they were drawn.
///
/// Rejection sampling: a duplicate draw is simply redrawn. `count` is capped at
/// `n` so the loop always terminates.
pub fn select_distinct_indices(rng: &mut Rng, n: usize, count: usize) -> Vec<usize> {
    let count = count.min(n);
    let mut selected = vec![false; n];
    let mut indices = Vec::with_capacity(count);

    while indices.len() < count {
        let i = rng.usize(0..n);
        if !selected[i] {
            selected[i] = true;
            indices.push(i);
        }
    }
    indices
}

/// A perturbed placement together with the circles that were moved.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub placement: Placement,
    pub radius: f64,
    pub moved: Vec<usize>,
}

/// Moves `updatable_count` distinct circles by a bounded random step and re-solves the radius.
///
/// Draw order is fixed: first the indices, then `x` and `y` for each index in
/// selection order. Circles that were not selected keep their exact centers.
pub fn perturb(
    rng: &mut Rng,
    placement: &Placement,
    size: f64,
    epsilon: f64,
    updatable_count: usize,
) -> Candidate {
    let mut centers: Vec<Point> = placement.centers();
    let moved = select_distinct_indices(rng, centers.len(), updatable_count);

    for &i in &moved {
        let Point { x, y } = centers[i];
        centers[i] = Point::new(
            random_restricted_point(rng, x, epsilon, size),
            random_restricted_point(rng, y, epsilon, size),
        );
    }

    let radius = scorer::resolve_radius(&centers, size);

    Candidate {
        placement: Placement::with_radius(&centers, radius),
        radius,
        moved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_point_stays_in_window() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..1000 {
            let v = random_restricted_point(&mut rng, 5.0, 10.0, 100.0);
            assert!((0.0..15.0).contains(&v), "{}", v);
            assert_eq!(v, v.floor());
        }
    }

    #[test]
    fn test_restricted_point_zero_epsilon_is_identity() {
        let mut rng = Rng::with_seed(7);
        assert_eq!(random_restricted_point(&mut rng, 42.0, 0.0, 100.0), 42.0);
    }

    #[test]
    fn test_select_all_indices() {
        let mut rng = Rng::with_seed(3);
        let mut indices = select_distinct_indices(&mut rng, 12, 12);
        indices.sort();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_select_caps_count() {
        let mut rng = Rng::with_seed(3);
        assert_eq!(select_distinct_indices(&mut rng, 3, 10).len(), 3);
        assert!(select_distinct_indices(&mut rng, 0, 1).is_empty());
    }
}
