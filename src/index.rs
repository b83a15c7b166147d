use crate::error::{Error, Result};

/// A point found by a query: its position in the build input and its
/// Euclidean distance to the query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub id: usize,
    pub distance: f64,
}

pub trait Index {
    fn dimension(&self) -> usize;
    fn len(&self) -> usize;
    fn point(&self, id: usize) -> Option<&[f64]>;

    fn nearest(&self, query: &[f64]) -> Result<Option<Neighbor>>;
    fn nearest_k(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor>>;
    fn within(&self, query: &[f64], radius: f64) -> Result<Vec<Neighbor>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn check_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidK);
    }
    Ok(())
}

pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if radius.is_nan() || radius < 0.0 {
        return Err(Error::InvalidRadius(radius));
    }
    Ok(())
}
