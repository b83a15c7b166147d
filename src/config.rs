/// Options for [`KdTree::build_with`](crate::KdTree::build_with).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Subtrees holding more points than this are partitioned on the rayon
    /// thread pool. Ignored without the `parallel` feature.
    pub parallel_threshold: usize,
}

impl BuildConfig {
    #[must_use]
    pub fn new() -> Self {
        BuildConfig {
            parallel_threshold: 1024,
        }
    }

    /// Builds every subtree sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self::new().parallel_threshold(usize::MAX)
    }

    #[must_use]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}
