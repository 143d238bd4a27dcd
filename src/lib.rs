#![warn(clippy::all)]

//! Parallel divide-and-conquer builders: Cartesian trees with spine merging
//! and the quickhull upper convex hull, on top of non-owning range views.

/// A position in the value sequence of a Cartesian tree.
pub type NodeIndex = usize;

/// A position in a point set.
pub type PointIndex = usize;

pub mod cartesian_tree;
pub mod config;
pub mod driver;
pub mod error;
pub mod fork;
pub mod generate;
pub mod point;
pub mod quickhull;
pub mod range_view;

pub use cartesian_tree::{cartesian_tree, CartesianTreeBuilder};
pub use error::{Error, Result};
pub use point::Point;
pub use quickhull::{upper_hull, QuickhullBuilder};
pub use range_view::{RangeView, RangeViewMut};
