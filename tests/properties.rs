use divconq::cartesian_tree::{ancestors, root, tree_depth, CartesianTreeBuilder};
use divconq::point::{area, Point};
use divconq::quickhull::{is_upper_convex, QuickhullBuilder};
use divconq::{cartesian_tree, upper_hull};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Cartesian tree built by repeatedly taking the leftmost minimum of a range.
fn naive_cartesian_tree(values: &[i64]) -> Vec<usize> {
    fn build(values: &[i64], parents: &mut [usize], start: usize, end: usize, parent: Option<usize>) {
        if start >= end {
            return;
        }
        let min = (start..end).min_by_key(|&i| values[i]).unwrap();
        parents[min] = parent.unwrap_or(min);
        build(values, parents, start, min, Some(min));
        build(values, parents, min + 1, end, Some(min));
    }

    let mut parents: Vec<usize> = (0..values.len()).collect();
    build(values, &mut parents, 0, values.len(), None);
    parents
}

fn random_values(rng: &mut StdRng, n: usize, bound: i64) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(0..bound)).collect()
}

fn check_heap(values: &[i64], parents: &[usize]) {
    let n = values.len();
    for node in 0..n {
        let path: Vec<usize> = ancestors(parents, node).take(n + 1).collect();
        assert!(path.len() <= n, "cycle reached from {}", node);
        for (child, parent) in path.iter().tuple_windows() {
            assert!(values[*parent] <= values[*child]);
        }
    }
}

#[test]
fn heap_order_and_single_root() {
    let mut rng = StdRng::seed_from_u64(11);
    for &(n, bound) in &[(1, 1), (2, 2), (3, 2), (17, 4), (1000, 10), (20_000, 20_000)] {
        let values = random_values(&mut rng, n, bound);
        let parents = cartesian_tree(&values);
        check_heap(&values, &parents);

        let roots: Vec<usize> = (0..n).filter(|&i| parents[i] == i).collect();
        assert_eq!(roots.len(), 1);
        assert!((0..n).all(|i| root(&parents, i) == roots[0]));
    }
}

fn check_all_permutations(n: usize) {
    for permutation in (0..n as i64).permutations(n) {
        assert_eq!(
            cartesian_tree(&permutation),
            naive_cartesian_tree(&permutation),
            "{:?}",
            permutation
        );
    }
}

#[test]
fn cartesian_tree_matches_naive_construction_on_permutations() {
    for n in 0..=8 {
        check_all_permutations(n);
    }
}

// Close to 4 million builds: run with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn cartesian_tree_matches_naive_construction_on_permutations_of_9_and_10() {
    check_all_permutations(9);
    check_all_permutations(10);
}

#[test]
fn cartesian_tree_matches_naive_construction_with_ties() {
    let mut rng = StdRng::seed_from_u64(17);
    for n in [3, 10, 64, 257] {
        for _ in 0..50 {
            let values = random_values(&mut rng, n, 4);
            let parents = CartesianTreeBuilder::new()
                .parallel_threshold(8)
                .build(&values);
            assert_eq!(parents, naive_cartesian_tree(&values));
        }
    }
}

#[test]
fn cartesian_tree_ignores_the_threshold() {
    let mut rng = StdRng::seed_from_u64(23);
    let values = random_values(&mut rng, 100_000, 100_000);
    let sequential = CartesianTreeBuilder::new()
        .parallel_threshold(usize::MAX)
        .build(&values);
    let parallel = CartesianTreeBuilder::new()
        .parallel_threshold(1)
        .build(&values);
    assert_eq!(sequential, parallel);
}

#[test]
fn cartesian_tree_scenarios() {
    let parents = cartesian_tree(&[3, 1, 4, 1, 5]);
    assert_eq!(root(&parents, 0), 1);
    assert_eq!(tree_depth(&parents), 3);

    assert!(cartesian_tree::<i64>(&[]).is_empty());
    assert_eq!(cartesian_tree(&[42]), vec![0]);

    let parents = cartesian_tree(&[5, 5, 5]);
    assert_eq!(parents.iter().enumerate().filter(|&(i, &p)| i == p).count(), 1);
    assert!((0..3).all(|i| root(&parents, i) == 0));
}

/// Points on an integer grid, so that every area is computed exactly.
fn grid_points(rng: &mut StdRng, n: usize, side: i64) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.gen_range(0..side) as f64, rng.gen_range(0..side) as f64))
        .collect()
}

fn check_hull(points: &[Point], hull: &[usize]) {
    assert!(is_upper_convex(points, hull));
    assert!(hull
        .iter()
        .tuple_windows()
        .all(|(&a, &b)| points[a].x <= points[b].x));

    for (&a, &b) in hull.iter().tuple_windows() {
        let (a, b) = (points[a], points[b]);
        if a.x == b.x {
            continue;
        }
        for p in points.iter().filter(|p| a.x <= p.x && p.x <= b.x) {
            assert!(area(a, b, *p) <= 0.0, "{:?} above {:?}--{:?}", p, a, b);
        }
    }
}

#[test]
fn hull_is_convex_and_covers_every_point() {
    let mut rng = StdRng::seed_from_u64(29);
    for &(n, side) in &[(2, 3), (3, 3), (10, 5), (500, 30), (5000, 1000), (50_000, 1 << 20)] {
        let points = grid_points(&mut rng, n, side);
        let hull = upper_hull(&points);
        check_hull(&points, &hull);
    }
}

#[test]
fn hull_ignores_the_threshold() {
    let mut rng = StdRng::seed_from_u64(31);
    let points = grid_points(&mut rng, 100_000, 1 << 16);
    let sequential = QuickhullBuilder::new()
        .parallel_threshold(usize::MAX)
        .build(&points);
    let parallel = QuickhullBuilder::new().parallel_threshold(1).build(&points);
    assert_eq!(sequential, parallel);
}

#[test]
fn hull_scenarios() {
    let points: Vec<Point> = vec![(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]
        .into_iter()
        .map(Point::from)
        .collect();
    assert_eq!(upper_hull(&points), vec![0, 2, 1]);

    assert!(upper_hull(&[]).is_empty());
    assert_eq!(upper_hull(&[Point::new(0.25, 0.75)]), vec![0]);
}

#[test]
fn circle_hull_keeps_upper_points() {
    // Points of the upper half of a circle are all hull vertices.
    let n = 2000;
    let mut points: Vec<Point> = (0..=n)
        .map(|i| {
            let angle = std::f64::consts::PI * i as f64 / n as f64;
            Point::new(-angle.cos(), angle.sin())
        })
        .collect();
    let mut rng = StdRng::seed_from_u64(37);
    points.shuffle(&mut rng);

    let hull = QuickhullBuilder::new().parallel_threshold(16).build(&points);
    assert_eq!(hull.len(), n + 1);
    assert!(is_upper_convex(&points, &hull));
}
