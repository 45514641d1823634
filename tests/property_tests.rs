use circlepack::config::PackingParams;
use circlepack::geometry::{distance, Placement, Point};
use circlepack::optimizer::mutation::perturb;
use circlepack::optimizer::{OptimizerSession, PlacementKind};
use circlepack::scorer::{edge_bound, min_radius, DistanceMatrix};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

// --- STRATEGIES ---

prop_compose! {
    fn arb_square()(size in 10.0..2000.0f64) -> f64 {
        size.floor()
    }
}

prop_compose! {
    fn arb_centers(max_n: usize)(size in arb_square())(
        coords in proptest::collection::vec((0.0..size, 0.0..size), 1..max_n),
        size in Just(size)
    ) -> (Vec<Point>, f64) {
        let centers = coords.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        (centers, size)
    }
}

fn arb_kind() -> impl Strategy<Value = PlacementKind> {
    prop_oneof![Just(PlacementKind::Uniform), Just(PlacementKind::Triangular)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_matrix_symmetry((centers, _size) in arb_centers(30)) {
        let m = DistanceMatrix::build(&centers);
        for i in 0..centers.len() {
            prop_assert_eq!(m.get(i, i), 0.0);
            for j in 0..centers.len() {
                prop_assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn test_radius_never_overlaps((centers, size) in arb_centers(30)) {
        let m = DistanceMatrix::build(&centers);
        let r = min_radius(&m, &centers, size);

        prop_assert!(r >= 0.0);
        for i in 0..centers.len() {
            for j in (i + 1)..centers.len() {
                let d = distance(&centers[i], &centers[j]);
                prop_assert!(d >= 2.0 * r - TOLERANCE, "pair {} {} overlaps: d = {}, r = {}", i, j, d, r);
            }
        }
    }

    #[test]
    fn test_radius_stays_inside_square((centers, size) in arb_centers(30)) {
        let m = DistanceMatrix::build(&centers);
        let r = min_radius(&m, &centers, size);

        for p in &centers {
            prop_assert!(edge_bound(p, size) >= 2.0 * r - TOLERANCE);
        }
        prop_assert!(r <= size / 2.0);
    }

    #[test]
    fn test_perturb_cardinality(
        (centers, size) in arb_centers(40),
        epsilon in 0.0..50.0f64,
        count_seed in any::<usize>(),
        seed in any::<u64>()
    ) {
        let n = centers.len();
        let count = 1 + count_seed % n;
        let placement = Placement::with_radius(&centers, 0.0);

        let mut rng = fastrand::Rng::with_seed(seed);
        let candidate = perturb(&mut rng, &placement, size, epsilon.floor(), count);

        let mut moved = candidate.moved.clone();
        moved.sort_unstable();
        moved.dedup();
        prop_assert_eq!(moved.len(), count);
        prop_assert!(moved.iter().all(|&i| i < n));

        for (i, (old, new)) in placement.iter().zip(candidate.placement.iter()).enumerate() {
            if !candidate.moved.contains(&i) {
                prop_assert_eq!(old.point.x.to_bits(), new.point.x.to_bits());
                prop_assert_eq!(old.point.y.to_bits(), new.point.y.to_bits());
            }
        }
    }

    #[test]
    fn test_history_is_monotonic(
        circles in 1usize..25,
        kind in arb_kind(),
        epsilon in 1.0..30.0f64,
        seed in any::<u64>()
    ) {
        let params = PackingParams {
            circles,
            size: 500.0,
            epsilon: epsilon.floor(),
            perturb_count: None,
            placement: kind,
        };
        let mut session = OptimizerSession::new(params, Some(seed)).unwrap();
        session.seed();
        for _ in 0..300 {
            session.tick();
        }

        let rows = session.history().rows();
        prop_assert_eq!(rows.len(), 1 + session.accepted());
        for pair in rows.windows(2) {
            prop_assert!(pair[1].objective <= pair[0].objective);
        }
    }
}
