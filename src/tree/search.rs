use super::{candidates::Candidates, kdtree::KdTree, node::Span};
use crate::{
    distance::euclidean,
    error::Result,
    index::{check_k, check_radius, Neighbor},
};
use log::trace;
use ordered_float::OrderedFloat;

impl KdTree {
    pub(crate) fn nearest_neighbor(&self, query: &[f64]) -> Result<Option<Neighbor>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.points.check_query(query)?;

        let mut best = None;
        self.nearest_recursive(Span::root(self.len()), query, &mut best);
        trace!("nearest to {:?}: {:?}", query, best);
        Ok(best)
    }

    pub(crate) fn k_nearest_neighbors(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor>> {
        check_k(k)?;
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.points.check_query(query)?;

        let mut candidates = Candidates::new(k);
        self.k_nearest_recursive(Span::root(self.len()), query, &mut candidates);
        let neighbors = candidates.into_sorted_vec();
        trace!("{} nearest to {:?}: {:?}", k, query, neighbors);
        Ok(neighbors)
    }

    pub(crate) fn neighbors_within(&self, query: &[f64], radius: f64) -> Result<Vec<Neighbor>> {
        check_radius(radius)?;
        if self.is_empty() {
            return Ok(Vec::new());
        }
        self.points.check_query(query)?;

        let mut result = Vec::new();
        let mut stack: Vec<Span> = Span::root(self.len()).into_iter().collect();
        while let Some(span) = stack.pop() {
            let slot = span.slot();
            let point = self.points.row(slot);
            let distance = euclidean(point, query);
            if distance <= radius {
                result.push(Neighbor {
                    id: self.ids[slot],
                    distance,
                });
            }

            let (near, far, gap) = self.split(span, point, query);
            stack.extend(near);
            if gap <= radius {
                stack.extend(far);
            }
        }
        result.sort_by_key(|n| (OrderedFloat(n.distance), n.id));
        trace!("{} points within {} of {:?}", result.len(), radius, query);
        Ok(result)
    }

    fn nearest_recursive(&self, span: Option<Span>, query: &[f64], best: &mut Option<Neighbor>) {
        let span = match span {
            Some(span) => span,
            None => return,
        };
        let slot = span.slot();
        let point = self.points.row(slot);

        let distance = euclidean(point, query);
        if best.map_or(true, |b| distance < b.distance) {
            *best = Some(Neighbor {
                id: self.ids[slot],
                distance,
            });
        }

        let (near, far, gap) = self.split(span, point, query);
        self.nearest_recursive(near, query, best);
        if best.map_or(true, |b| gap < b.distance) {
            self.nearest_recursive(far, query, best);
        }
    }

    fn k_nearest_recursive(&self, span: Option<Span>, query: &[f64], candidates: &mut Candidates) {
        let span = match span {
            Some(span) => span,
            None => return,
        };
        let slot = span.slot();
        let point = self.points.row(slot);

        candidates.offer(self.ids[slot], euclidean(point, query));

        let (near, far, gap) = self.split(span, point, query);
        self.k_nearest_recursive(near, query, candidates);
        if candidates.admits(gap) {
            self.k_nearest_recursive(far, query, candidates);
        }
    }

    // Orders the children of `span` by the side of the splitting plane the
    // query falls on, and returns the query's distance to that plane.
    fn split(
        &self,
        span: Span,
        pivot: &[f64],
        query: &[f64],
    ) -> (Option<Span>, Option<Span>, f64) {
        let axis = span.depth % self.dimension();
        let diff = query[axis] - pivot[axis];
        if diff < 0.0 {
            (span.left(), span.right(), -diff)
        } else {
            (span.right(), span.left(), diff)
        }
    }
}
