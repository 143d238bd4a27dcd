use crate::config::BuildConfig;
use crate::fork::join_if;
use crate::range_view::{RangeView, RangeViewMut};
use crate::NodeIndex;
use rayon::prelude::*;

/// Parallel builder for Cartesian trees.
///
/// In the Cartesian tree of a sequence the smallest value sits at the root,
/// and the left and right subtrees are the Cartesian trees of the values
/// to the left and to the right of it. The tree is returned as a parent
/// array: every position holds the position of its parent and the root
/// points to itself. On equal values the leftmost one is the ancestor.
///
/// ## Algorithm
/// The sequence is cut in two halves whose trees are built independently
/// (in parallel above the threshold), then the right spine of the left tree
/// and the left spine of the right tree are merged. Only the merged spines
/// are visited, which keeps the total work linear.[^1]
///
/// [^1]: Shun, J. & Blelloch, G. (2014). A Simple Parallel Cartesian Tree Algorithm and its
/// Application to Parallel Suffix Tree Construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartesianTreeBuilder {
    parallel_threshold: usize,
}

impl Default for CartesianTreeBuilder {
    fn default() -> Self {
        CartesianTreeBuilder::from(BuildConfig::default())
    }
}

impl From<BuildConfig> for CartesianTreeBuilder {
    fn from(config: BuildConfig) -> Self {
        CartesianTreeBuilder {
            parallel_threshold: config.parallel_threshold,
        }
    }
}

impl CartesianTreeBuilder {
    pub fn new() -> CartesianTreeBuilder {
        CartesianTreeBuilder::default()
    }

    /// Sets the range length at or below which both halves are built on the
    /// current thread.
    pub fn parallel_threshold(mut self, threshold: usize) -> CartesianTreeBuilder {
        self.parallel_threshold = threshold;
        self
    }

    /// Builds the parent array of the Cartesian tree of `values`.
    ///
    /// Values must be totally ordered (no NaN).
    ///
    /// # Example
    /// ```
    /// use divconq::cartesian_tree::CartesianTreeBuilder;
    ///
    /// let parents = CartesianTreeBuilder::new()
    ///     .parallel_threshold(2)
    ///     .build(&[3, 1, 4, 1, 5]);
    ///
    /// assert_eq!(parents, vec![1, 1, 3, 1, 3]);
    /// ```
    pub fn build<T: PartialOrd + Sync>(&self, values: &[T]) -> Vec<NodeIndex> {
        let span = tracing::debug_span!("cartesian_tree", n = values.len());
        let _guard = span.enter();

        let mut parents: Vec<NodeIndex> = (0..values.len()).into_par_iter().collect();
        self.build_range(RangeView::new(values), RangeViewMut::new(&mut parents));

        tracing::debug!(threshold = self.parallel_threshold, "tree built");
        parents
    }

    fn build_range<T: PartialOrd + Sync>(
        &self,
        values: RangeView<'_, T>,
        mut parents: RangeViewMut<'_, NodeIndex>,
    ) {
        debug_assert_eq!(values.start(), parents.start());
        debug_assert_eq!(values.len(), parents.len());

        let start = values.start();
        let len = values.len();
        match len {
            0 | 1 => {}
            2 => {
                if values[0] > values[1] {
                    parents[0] = start + 1;
                } else {
                    parents[1] = start;
                }
            }
            _ => {
                let mid = len / 2;
                let (left_values, right_values) = values.split_at(mid);
                {
                    let (left_parents, right_parents) = parents.split_at_mut(mid);
                    join_if(
                        len > self.parallel_threshold,
                        || self.build_range(left_values, left_parents),
                        || self.build_range(right_values, right_parents),
                    );
                }
                spine_merge(values, parents.reborrow(), start + mid - 1, start + mid);
            }
        }
    }
}

/// Builds the Cartesian tree of `values` with the default configuration.
///
/// # Example
/// ```
/// use divconq::cartesian_tree::cartesian_tree;
///
/// assert_eq!(cartesian_tree::<i64>(&[]), Vec::<usize>::new());
/// assert_eq!(cartesian_tree(&[7]), vec![0]);
/// assert_eq!(cartesian_tree(&[5, 5, 5]), vec![0, 0, 1]);
/// ```
pub fn cartesian_tree<T: PartialOrd + Sync>(values: &[T]) -> Vec<NodeIndex> {
    CartesianTreeBuilder::default().build(values)
}

/// Positions are absolute: they are translated through the views' starts.
struct Spines<'v, 'p, T> {
    values: RangeView<'v, T>,
    parents: RangeViewMut<'p, NodeIndex>,
}

impl<'v, 'p, T> Spines<'v, 'p, T> {
    #[inline]
    fn value(&self, node: NodeIndex) -> &T {
        &self.values[node - self.values.start()]
    }

    #[inline]
    fn parent(&self, node: NodeIndex) -> NodeIndex {
        self.parents[node - self.parents.start()]
    }

    #[inline]
    fn set_parent(&mut self, node: NodeIndex, parent: NodeIndex) {
        let offset = node - self.parents.start();
        self.parents[offset] = parent;
    }

    #[inline]
    fn is_root(&self, node: NodeIndex) -> bool {
        self.parent(node) == node
    }
}

/// Merges two adjacent Cartesian trees into one.
///
/// `left` is the last position of the left tree and `right` the first
/// position of the right tree; both trees must lie inside the views. The
/// walk goes up the right spine of the left tree and the left spine of the
/// right tree, always hanging the larger of the two current nodes under the
/// node placed last. When one of the walks reaches its root, the rest of the
/// other spine is hung under it.
///
/// # Example
/// ```
/// use divconq::cartesian_tree::spine_merge;
/// use divconq::range_view::{RangeView, RangeViewMut};
///
/// let values = [1, 3, 2, 4];
/// // Two trees: 0 <- 1 and 2 <- 3.
/// let mut parents = vec![0, 0, 2, 2];
///
/// spine_merge(RangeView::new(&values), RangeViewMut::new(&mut parents), 1, 2);
///
/// assert_eq!(parents, vec![0, 2, 0, 2]);
/// ```
pub fn spine_merge<T: PartialOrd>(
    values: RangeView<'_, T>,
    parents: RangeViewMut<'_, NodeIndex>,
    mut left: NodeIndex,
    mut right: NodeIndex,
) {
    let mut spines = Spines { values, parents };

    let mut head;
    if spines.value(left) > spines.value(right) {
        head = left;
        left = spines.parent(left);
    } else {
        head = right;
        right = spines.parent(right);
    }

    loop {
        if spines.value(left) > spines.value(right) {
            spines.set_parent(head, left);
            if spines.is_root(left) {
                spines.set_parent(left, right);
                break;
            }
            left = spines.parent(left);
        } else {
            spines.set_parent(head, right);
            if spines.is_root(right) {
                spines.set_parent(right, left);
                break;
            }
            right = spines.parent(right);
        }
        head = spines.parent(head);
    }
}

/// Positions from `node` up to its root, `node` included.
pub fn ancestors(parents: &[NodeIndex], node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
    std::iter::successors(Some(node), move |&current| {
        let parent = parents[current];
        if parent == current {
            None
        } else {
            Some(parent)
        }
    })
}

/// The root of the tree containing `node`.
pub fn root(parents: &[NodeIndex], node: NodeIndex) -> NodeIndex {
    ancestors(parents, node).last().unwrap_or(node)
}

/// Number of nodes on the path from `node` to its root.
pub fn depth(parents: &[NodeIndex], node: NodeIndex) -> usize {
    ancestors(parents, node).count()
}

/// Largest number of nodes on a root-to-leaf path, 0 for an empty tree.
///
/// # Example
/// ```
/// use divconq::cartesian_tree::{cartesian_tree, tree_depth};
///
/// assert_eq!(tree_depth(&cartesian_tree(&[3, 1, 4, 1, 5])), 3);
/// assert_eq!(tree_depth(&cartesian_tree(&(0..64).collect::<Vec<u32>>())), 64);
/// assert_eq!(tree_depth(&[]), 0);
/// ```
pub fn tree_depth(parents: &[NodeIndex]) -> usize {
    (0..parents.len())
        .into_par_iter()
        .map(|node| depth(parents, node))
        .max()
        .unwrap_or(0)
}
