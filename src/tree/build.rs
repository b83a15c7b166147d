use super::kdtree::KdTree;
use crate::{config::BuildConfig, error::Result, points::Points};
use log::debug;
use ordered_float::OrderedFloat;

impl KdTree {
    /// Builds a tree with the default [`BuildConfig`].
    ///
    /// The dimensionality is taken from the first point. Fails with
    /// `InvalidDimension` if that point has no coordinates, with
    /// `DimensionMismatch` if any later point has a different number of
    /// coordinates, and with `NonFiniteCoordinate` on NaN or infinity.
    /// An empty input yields an empty tree.
    pub fn build<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[f64]>,
    {
        Self::build_with(points, BuildConfig::default())
    }

    pub fn build_with<I, P>(points: I, config: BuildConfig) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[f64]>,
    {
        let input = Points::from_rows(points)?;

        // Partition point ids in place; the caller's points are never reordered.
        let mut ids = (0..input.len()).collect::<Vec<_>>();
        partition(&input, &mut ids, 0, config.parallel_threshold);

        // Lay the pivots out in slot order so that each subtree is contiguous.
        let mut coords = Vec::with_capacity(ids.len() * input.dimension());
        let mut slots = vec![0; ids.len()];
        for (slot, &id) in ids.iter().enumerate() {
            coords.extend_from_slice(input.row(id));
            slots[id] = slot;
        }

        let tree = KdTree {
            points: Points::from_parts(input.dimension(), coords),
            ids,
            slots,
        };
        debug!(
            "built kd-tree: {} points, dimension {}, height {}",
            tree.len(),
            tree.dimension(),
            tree.height()
        );
        Ok(tree)
    }
}

// Reorders `ids` so that its lower median is the pivot on `depth % dimension`,
// everything before it orders below the pivot and everything after it above,
// then recurses into both halves. Ties on the coordinate are ordered by id.
fn partition(points: &Points, ids: &mut [usize], depth: usize, parallel_threshold: usize) {
    let len = ids.len();
    if len <= 1 {
        return;
    }

    let axis = depth % points.dimension();
    let mid = len / 2;
    ids.select_nth_unstable_by_key(mid, |&id| (OrderedFloat(points.coord(id, axis)), id));

    let (left, rest) = ids.split_at_mut(mid);
    let right = &mut rest[1..];

    #[cfg(feature = "parallel")]
    {
        if len > parallel_threshold {
            rayon::join(
                || partition(points, left, depth + 1, parallel_threshold),
                || partition(points, right, depth + 1, parallel_threshold),
            );
            return;
        }
    }

    partition(points, left, depth + 1, parallel_threshold);
    partition(points, right, depth + 1, parallel_threshold);
}
