use super::node::{Node, Span};
use crate::{
    error::Result,
    index::{Index, Neighbor},
    points::Points,
};
use conv::ValueFrom;

/// Static k-d tree over a set of points.
///
/// The tree is stored implicitly: slots hold the pivot points in the order
/// produced by median partitioning, and every subtree is a contiguous range
/// of slots whose lower median is its root. Nothing is mutated after
/// [`KdTree::build`], so a tree can be queried from many threads at once.
#[derive(Clone, Debug)]
pub struct KdTree {
    pub(crate) points: Points,
    pub(crate) ids: Vec<usize>,
    pub(crate) slots: Vec<usize>,
}

/// Shape summary returned by [`KdTree::stats`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeStats {
    pub len: usize,
    pub dimension: usize,
    pub height: usize,
    pub mean_depth: f64,
}

impl KdTree {
    /// Number of coordinates per point, `0` for an empty tree.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.points.dimension()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn root(&self) -> Option<Node<'_>> {
        Span::root(self.len()).map(|span| Node::new(self, span))
    }

    /// Coordinates of the `id`-th point of the build input.
    #[must_use]
    pub fn point(&self, id: usize) -> Option<&[f64]> {
        self.slots.get(id).map(|&slot| self.points.row(slot))
    }

    /// Returns the indexed point closest to `query`, or `None` if the tree is empty.
    pub fn find_nearest(&self, query: &[f64]) -> Result<Option<&[f64]>> {
        let nearest = self.nearest_neighbor(query)?;
        Ok(nearest.map(|n| self.points.row(self.slots[n.id])))
    }

    /// Returns the `k` indexed points closest to `query`, nearest first.
    pub fn find_k_nearest(&self, query: &[f64], k: usize) -> Result<Vec<&[f64]>> {
        let neighbors = self.k_nearest_neighbors(query, k)?;
        Ok(neighbors
            .into_iter()
            .map(|n| self.points.row(self.slots[n.id]))
            .collect())
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.stats().height
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut height = 0;
        let mut total_depth = 0;
        let mut stack: Vec<Span> = Span::root(self.len()).into_iter().collect();
        while let Some(span) = stack.pop() {
            height = height.max(span.depth + 1);
            total_depth += span.depth;
            stack.extend(span.left());
            stack.extend(span.right());
        }

        let mean_depth = if self.is_empty() {
            0.0
        } else {
            f64::value_from(total_depth).unwrap_or(f64::INFINITY)
                / f64::value_from(self.len()).unwrap_or(f64::INFINITY)
        };

        TreeStats {
            len: self.len(),
            dimension: self.dimension(),
            height,
            mean_depth,
        }
    }

    pub(crate) fn slot_point(&self, slot: usize) -> &[f64] {
        self.points.row(slot)
    }

    pub(crate) fn slot_id(&self, slot: usize) -> usize {
        self.ids[slot]
    }
}

impl Index for KdTree {
    fn dimension(&self) -> usize {
        KdTree::dimension(self)
    }

    fn len(&self) -> usize {
        KdTree::len(self)
    }

    fn point(&self, id: usize) -> Option<&[f64]> {
        KdTree::point(self, id)
    }

    fn nearest(&self, query: &[f64]) -> Result<Option<Neighbor>> {
        self.nearest_neighbor(query)
    }

    fn nearest_k(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor>> {
        self.k_nearest_neighbors(query, k)
    }

    fn within(&self, query: &[f64], radius: f64) -> Result<Vec<Neighbor>> {
        self.neighbors_within(query, radius)
    }
}
