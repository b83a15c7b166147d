use crate::index::Neighbor;
use ordered_float::OrderedFloat;
use std::collections::BinaryHeap;

/// The `k` closest points seen so far, kept in a max-heap keyed on
/// `(distance, id)` so the current worst candidate sits on top.
pub(crate) struct Candidates {
    k: usize,
    heap: BinaryHeap<(OrderedFloat<f64>, usize)>,
}

impl Candidates {
    pub fn new(k: usize) -> Self {
        Candidates {
            k,
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.k
    }

    /// Distance of the worst candidate once `k` have been found.
    pub fn bound(&self) -> Option<f64> {
        if self.is_full() {
            self.heap.peek().map(|&(distance, _)| distance.0)
        } else {
            None
        }
    }

    /// Admits the point if fewer than `k` are held or it is strictly closer
    /// than the worst candidate, which is then evicted.
    pub fn offer(&mut self, id: usize, distance: f64) {
        if self.bound().map_or(true, |bound| distance < bound) {
            self.heap.push((OrderedFloat(distance), id));
            if self.heap.len() > self.k {
                self.heap.pop();
            }
        }
    }

    /// Whether a region at `gap` from the query may still hold a closer point.
    pub fn admits(&self, gap: f64) -> bool {
        self.bound().map_or(true, |bound| gap < bound)
    }

    pub fn into_sorted_vec(self) -> Vec<Neighbor> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|(distance, id)| Neighbor {
                id,
                distance: distance.0,
            })
            .collect()
    }
}
