//! Reproducible random inputs for the drivers.
//!
//! Every element gets its own generator, seeded from the global seed and the
//! element's position, so inputs are the same whatever the thread count.
use crate::point::Point;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Generator dedicated to position `index` of a sequence built from `seed`:
/// the ChaCha stream numbered `index` under key `seed`.
pub fn generator_at(seed: u64, index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);
    rng
}

/// `n` values drawn uniformly from `0..n`.
///
/// # Example
/// ```
/// use divconq::generate::random_values;
///
/// let values = random_values(1000, 42);
///
/// assert_eq!(values.len(), 1000);
/// assert!(values.iter().all(|&v| (0..1000).contains(&v)));
/// assert_eq!(values, random_values(1000, 42));
/// ```
pub fn random_values(n: usize, seed: u64) -> Vec<i64> {
    let bound = n as i64;
    (0..n)
        .into_par_iter()
        .map(|i| generator_at(seed, i as u64).gen_range(0..bound))
        .collect()
}

/// `n` points drawn uniformly from the unit square. Point `i` takes its x
/// from position `2i` and its y from position `2i + 1`.
///
/// # Example
/// ```
/// use divconq::generate::random_points;
///
/// let points = random_points(500, 1);
///
/// assert_eq!(points.len(), 500);
/// assert!(points.iter().all(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y)));
/// ```
pub fn random_points(n: usize, seed: u64) -> Vec<Point> {
    (0..n)
        .into_par_iter()
        .map(|i| {
            let i = i as u64;
            Point::new(
                generator_at(seed, 2 * i).gen::<f64>(),
                generator_at(seed, 2 * i + 1).gen::<f64>(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_do_not_depend_on_length() {
        let short = random_values(10, 5);
        let long = random_points(10, 5);
        assert_eq!(short.len(), 10);
        assert_eq!(&random_points(20, 5)[..10], &long[..]);
    }

    #[test]
    fn seeds_change_the_output() {
        assert_ne!(random_points(64, 1), random_points(64, 2));
    }

    #[test]
    fn neighbouring_positions_draw_different_values() {
        let first: u64 = generator_at(3, 0).gen();
        let second: u64 = generator_at(3, 1).gen();
        assert_ne!(first, second);
        assert_eq!(first, generator_at(3, 0).gen::<u64>());
    }

    #[test]
    fn empty_inputs() {
        assert!(random_values(0, 9).is_empty());
        assert!(random_points(0, 9).is_empty());
    }
}
