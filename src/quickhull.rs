use crate::config::BuildConfig;
use crate::fork::join;
use crate::point::{area, Point};
use crate::range_view::RangeView;
use crate::PointIndex;
use either::Either;
use itertools::Itertools;
use rayon::prelude::*;
use std::iter::once;

/// Parallel quickhull computing the upper convex hull of a point set.
///
/// The hull is returned as point indices, from the leftmost point to the
/// rightmost one. Collinear points are never hull vertices.
///
/// ## Algorithm
/// For a segment `l`–`r` and the candidates lying strictly above it, the
/// candidate farthest from the line is a hull vertex `mid`. Candidates inside
/// the triangle `l`, `mid`, `r` are dropped, the ones above `l`–`mid` and
/// above `mid`–`r` are processed independently (in parallel above the
/// threshold) and the two partial hulls are joined around `mid`.
///
/// Below the threshold the recursion runs on an explicit stack, so
/// degenerate inputs cannot overflow the call stack there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickhullBuilder {
    parallel_threshold: usize,
}

impl Default for QuickhullBuilder {
    fn default() -> Self {
        QuickhullBuilder::from(BuildConfig::default())
    }
}

impl From<BuildConfig> for QuickhullBuilder {
    fn from(config: BuildConfig) -> Self {
        QuickhullBuilder {
            parallel_threshold: config.parallel_threshold,
        }
    }
}

impl QuickhullBuilder {
    pub fn new() -> QuickhullBuilder {
        QuickhullBuilder::default()
    }

    /// Sets the candidate count at or below which a segment is processed on
    /// the current thread.
    pub fn parallel_threshold(mut self, threshold: usize) -> QuickhullBuilder {
        self.parallel_threshold = threshold;
        self
    }

    /// Computes the upper hull of `points`, left to right.
    ///
    /// The leftmost point is the smallest by (x, y) and the rightmost the
    /// largest by (x, y); among equal points the first index is used. When
    /// both are the same point the hull is that single index.
    ///
    /// # Example
    /// ```
    /// use divconq::point::Point;
    /// use divconq::quickhull::QuickhullBuilder;
    ///
    /// let points = [
    ///     Point::new(0.0, 0.0),
    ///     Point::new(2.0, 0.0),
    ///     Point::new(1.0, 1.0),
    /// ];
    ///
    /// assert_eq!(QuickhullBuilder::new().build(&points), vec![0, 2, 1]);
    /// ```
    pub fn build(&self, points: &[Point]) -> Vec<PointIndex> {
        let span = tracing::debug_span!("quickhull", n = points.len());
        let _guard = span.enter();

        let points = RangeView::new(points);
        let parallel = points.len() > self.parallel_threshold;

        let (min_index, max_index) = match extremes(points, parallel) {
            Some(extremes) => extremes,
            None => return Vec::new(),
        };
        let (min, max) = (points[min_index], points[max_index]);

        let hull = if min == max {
            Either::Left(once(min_index))
        } else {
            let is_above = |&id: &PointIndex| area(min, max, points[id]) > 0.0;
            let above: Vec<PointIndex> = if parallel {
                (0..points.len()).into_par_iter().filter(&is_above).collect()
            } else {
                (0..points.len()).filter(&is_above).collect()
            };
            let between = self.quickhull(points, above, min, max);
            Either::Right(once(min_index).chain(between).chain(once(max_index)))
        };
        let hull: Vec<PointIndex> = hull.collect();

        tracing::debug!(vertices = hull.len(), "hull built");
        hull
    }

    /// Computes the part of the upper hull strictly between `l` and `r`.
    ///
    /// `candidates` must hold the indices of the points lying strictly above
    /// the line oriented from `points[l]` to `points[r]`.
    ///
    /// # Example
    /// ```
    /// use divconq::point::Point;
    /// use divconq::quickhull::QuickhullBuilder;
    ///
    /// let points: Vec<Point> = vec![(0.0, 0.0), (4.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 2.0)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    ///
    /// let hull = QuickhullBuilder::new().hull_between(&points, vec![2, 3, 4], 0, 1);
    /// assert_eq!(hull, vec![2, 4]);
    /// ```
    pub fn hull_between(
        &self,
        points: &[Point],
        candidates: Vec<PointIndex>,
        l: PointIndex,
        r: PointIndex,
    ) -> Vec<PointIndex> {
        let points = RangeView::new(points);
        self.quickhull(points, candidates, points[l], points[r])
    }

    fn quickhull(
        &self,
        points: RangeView<'_, Point>,
        candidates: Vec<PointIndex>,
        l: Point,
        r: Point,
    ) -> Vec<PointIndex> {
        let n = candidates.len();
        if n <= 1 {
            return candidates;
        }
        if n <= self.parallel_threshold {
            return sequential_quickhull(points, candidates, l, r);
        }

        let mid_index = match farthest(points, &candidates, l, r, true) {
            Some(index) => index,
            None => return candidates,
        };
        let mid = points[mid_index];

        let left = above(points, &candidates, l, mid, true);
        let right = above(points, &candidates, mid, r, true);
        drop(candidates);

        let (mut hull, right_hull) = join(
            || self.quickhull(points, left, l, mid),
            || self.quickhull(points, right, mid, r),
        );
        hull.reserve(right_hull.len() + 1);
        hull.push(mid_index);
        hull.extend(right_hull);
        hull
    }
}

/// Computes the upper hull of `points` with the default configuration.
///
/// # Example
/// ```
/// use divconq::point::Point;
/// use divconq::quickhull::upper_hull;
///
/// assert!(upper_hull(&[]).is_empty());
/// assert_eq!(upper_hull(&[Point::new(3.0, 4.0)]), vec![0]);
/// ```
pub fn upper_hull(points: &[Point]) -> Vec<PointIndex> {
    QuickhullBuilder::default().build(points)
}

/// Returns true if every hull vertex lies strictly above the segment joining
/// its two neighbours.
///
/// # Example
/// ```
/// use divconq::point::Point;
/// use divconq::quickhull::is_upper_convex;
///
/// let points: Vec<Point> = vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (1.0, 0.0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
///
/// assert!(is_upper_convex(&points, &[0, 1, 2]));
/// assert!(!is_upper_convex(&points, &[0, 3, 2]));
/// ```
pub fn is_upper_convex(points: &[Point], hull: &[PointIndex]) -> bool {
    hull.iter()
        .map(|&index| points[index])
        .tuple_windows()
        .all(|(a, b, c)| area(a, c, b) > 0.0)
}

enum Task {
    Segment {
        candidates: Vec<PointIndex>,
        l: Point,
        r: Point,
    },
    Vertex(PointIndex),
}

fn sequential_quickhull(
    points: RangeView<'_, Point>,
    candidates: Vec<PointIndex>,
    l: Point,
    r: Point,
) -> Vec<PointIndex> {
    let mut hull = Vec::new();
    let mut tasks = vec![Task::Segment { candidates, l, r }];

    while let Some(task) = tasks.pop() {
        match task {
            Task::Vertex(index) => hull.push(index),
            Task::Segment { candidates, l, r } => {
                if candidates.len() <= 1 {
                    hull.extend(candidates);
                    continue;
                }
                let mid_index = match farthest(points, &candidates, l, r, false) {
                    Some(index) => index,
                    None => continue,
                };
                let mid = points[mid_index];

                let left = above(points, &candidates, l, mid, false);
                let right = above(points, &candidates, mid, r, false);

                // Popped in reverse: left segment, then mid, then right segment.
                tasks.push(Task::Segment {
                    candidates: right,
                    l: mid,
                    r,
                });
                tasks.push(Task::Vertex(mid_index));
                tasks.push(Task::Segment {
                    candidates: left,
                    l,
                    r: mid,
                });
            }
        }
    }
    hull
}

/// The candidate with the largest signed area above `l`–`r`; the largest
/// index wins ties.
fn farthest(
    points: RangeView<'_, Point>,
    candidates: &[PointIndex],
    l: Point,
    r: Point,
    parallel: bool,
) -> Option<PointIndex> {
    let key = |&id: &PointIndex| (area(l, r, points[id]), id);
    let order = |a: &(f64, PointIndex), b: &(f64, PointIndex)| {
        a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
    };
    let best = if parallel {
        candidates.par_iter().map(key).max_by(order)
    } else {
        candidates.iter().map(key).max_by(order)
    };
    best.map(|(_, id)| id)
}

/// The candidates strictly above the line oriented from `from` to `to`, in
/// their original order.
fn above(
    points: RangeView<'_, Point>,
    candidates: &[PointIndex],
    from: Point,
    to: Point,
    parallel: bool,
) -> Vec<PointIndex> {
    let is_above = |&id: &PointIndex| area(from, to, points[id]) > 0.0;
    if parallel {
        candidates.par_iter().copied().filter(&is_above).collect()
    } else {
        candidates.iter().copied().filter(&is_above).collect()
    }
}

/// Leftmost and rightmost points, by (x, y), first index on ties.
fn extremes(points: RangeView<'_, Point>, parallel: bool) -> Option<(PointIndex, PointIndex)> {
    let leftmost = |&a: &PointIndex, &b: &PointIndex| {
        points[a]
            .lexicographic_cmp(&points[b])
            .then(a.cmp(&b))
    };
    let rightmost = |&a: &PointIndex, &b: &PointIndex| {
        points[a]
            .lexicographic_cmp(&points[b])
            .then(b.cmp(&a))
    };
    let n = points.len();
    if parallel {
        let min = (0..n).into_par_iter().min_by(leftmost)?;
        let max = (0..n).into_par_iter().max_by(rightmost)?;
        Some((min, max))
    } else {
        let min = (0..n).min_by(leftmost)?;
        let max = (0..n).max_by(rightmost)?;
        Some((min, max))
    }
}
