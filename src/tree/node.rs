use super::kdtree::KdTree;
use std::fmt;

/// A contiguous range of tree slots forming one subtree.
///
/// The pivot of a span is its lower median slot, so the left child covers
/// the slots before it and the right child the slots after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Span {
    pub lo: usize,
    pub hi: usize,
    pub depth: usize,
}

impl Span {
    pub fn root(len: usize) -> Option<Span> {
        (len > 0).then(|| Span {
            lo: 0,
            hi: len,
            depth: 0,
        })
    }

    pub fn slot(&self) -> usize {
        self.lo + (self.hi - self.lo) / 2
    }

    pub fn left(&self) -> Option<Span> {
        let slot = self.slot();
        (slot > self.lo).then(|| Span {
            lo: self.lo,
            hi: slot,
            depth: self.depth + 1,
        })
    }

    pub fn right(&self) -> Option<Span> {
        let slot = self.slot();
        (slot + 1 < self.hi).then(|| Span {
            lo: slot + 1,
            hi: self.hi,
            depth: self.depth + 1,
        })
    }
}

/// Read-only view of one node of a [`KdTree`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a KdTree,
    span: Span,
}

impl<'a> Node<'a> {
    pub(crate) fn new(tree: &'a KdTree, span: Span) -> Node<'a> {
        Node { tree, span }
    }

    /// The pivot point stored at this node.
    #[must_use]
    pub fn point(&self) -> &'a [f64] {
        self.tree.slot_point(self.span.slot())
    }

    /// Position of the pivot point in the build input.
    #[must_use]
    pub fn id(&self) -> usize {
        self.tree.slot_id(self.span.slot())
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.span.depth
    }

    /// The axis this node partitions its subtree on.
    #[must_use]
    pub fn axis(&self) -> usize {
        self.span.depth % self.tree.dimension()
    }

    /// Number of points in the subtree rooted at this node.
    #[must_use]
    pub fn size(&self) -> usize {
        self.span.hi - self.span.lo
    }

    #[must_use]
    pub fn left(&self) -> Option<Node<'a>> {
        self.span.left().map(|span| Node::new(self.tree, span))
    }

    #[must_use]
    pub fn right(&self) -> Option<Node<'a>> {
        self.span.right().map(|span| Node::new(self.tree, span))
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.size() == 1
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id())
            .field("depth", &self.depth())
            .field("size", &self.size())
            .finish()
    }
}
