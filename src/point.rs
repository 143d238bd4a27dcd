use std::cmp::Ordering;

/// A point of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Orders points by x, then by y.
    ///
    /// # Example
    /// ```
    /// use divconq::point::Point;
    /// use std::cmp::Ordering;
    ///
    /// let a = Point::new(1.0, 5.0);
    /// let b = Point::new(1.0, 7.0);
    ///
    /// assert_eq!(a.lexicographic_cmp(&b), Ordering::Less);
    /// assert_eq!(b.lexicographic_cmp(&Point::new(0.0, 9.0)), Ordering::Greater);
    /// ```
    pub fn lexicographic_cmp(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// Positive when `c` lies to the left of the line oriented from `a` to `b`,
/// which for `a` left of `b` means above it. Zero for collinear points.
///
/// # Example
/// ```
/// use divconq::point::{area, Point};
///
/// let (a, b) = (Point::new(0.0, 0.0), Point::new(2.0, 0.0));
///
/// assert_eq!(area(a, b, Point::new(1.0, 1.0)), 2.0);
/// assert_eq!(area(a, b, Point::new(1.0, -1.0)), -2.0);
/// assert_eq!(area(a, b, Point::new(5.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn area(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
