use crate::{
    distance::euclidean,
    error::Result,
    index::{check_k, check_radius, Index, Neighbor},
    points::Points,
};
use ordered_float::OrderedFloat;

/// Exhaustive-scan index. Every query measures the distance to every point.
pub struct LinearIndex {
    data: Points,
}

impl LinearIndex {
    pub fn build<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[f64]>,
    {
        Ok(Self {
            data: Points::from_rows(points)?,
        })
    }

    fn distances<'a>(&'a self, query: &'a [f64]) -> impl Iterator<Item = Neighbor> + 'a {
        (0..self.data.len()).map(move |id| Neighbor {
            id,
            distance: euclidean(self.data.row(id), query),
        })
    }
}

impl Index for LinearIndex {
    fn dimension(&self) -> usize {
        self.data.dimension()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn point(&self, id: usize) -> Option<&[f64]> {
        (id < self.data.len()).then(|| self.data.row(id))
    }

    fn nearest(&self, query: &[f64]) -> Result<Option<Neighbor>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.data.check_query(query)?;

        let mut best: Option<Neighbor> = None;
        for neighbor in self.distances(query) {
            if best.map_or(true, |b| neighbor.distance < b.distance) {
                best = Some(neighbor);
            }
        }
        Ok(best)
    }

    fn nearest_k(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor>> {
        check_k(k)?;
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.data.check_query(query)?;

        let mut neighbors = self.distances(query).collect::<Vec<_>>();
        neighbors.sort_by_key(|n| (OrderedFloat(n.distance), n.id));
        neighbors.truncate(k);
        Ok(neighbors)
    }

    fn within(&self, query: &[f64], radius: f64) -> Result<Vec<Neighbor>> {
        check_radius(radius)?;
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.data.check_query(query)?;

        let mut neighbors = self
            .distances(query)
            .filter(|n| n.distance <= radius)
            .collect::<Vec<_>>();
        neighbors.sort_by_key(|n| (OrderedFloat(n.distance), n.id));
        Ok(neighbors)
    }
}
