use crate::error::{Error, Result};

/// Flat, row-major storage for a set of points sharing one dimensionality.
#[derive(Clone, Debug, Default)]
pub(crate) struct Points {
    dimension: usize,
    coords: Vec<f64>,
}

impl Points {
    /// Copies the input rows into one backing buffer.
    ///
    /// The dimensionality is taken from the first row; every other row must
    /// match it and every coordinate must be finite.
    pub fn from_rows<I, P>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[f64]>,
    {
        let mut dimension = 0;
        let mut coords = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if i == 0 {
                if row.is_empty() {
                    return Err(Error::InvalidDimension);
                }
                dimension = row.len();
            } else if row.len() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    found: row.len(),
                });
            }
            check_finite(row)?;
            coords.extend_from_slice(row);
        }
        Ok(Points { dimension, coords })
    }

    pub(crate) fn from_parts(dimension: usize, coords: Vec<f64>) -> Self {
        Points { dimension, coords }
    }

    /// Number of coordinates per point, `0` for an empty set.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn len(&self) -> usize {
        if self.dimension == 0 {
            0
        } else {
            self.coords.len() / self.dimension
        }
    }

    /// Coordinates of the `id`-th point.
    ///
    /// # Panics
    ///
    /// Panics if `id >= self.len()`.
    #[must_use]
    pub fn row(&self, id: usize) -> &[f64] {
        &self.coords[id * self.dimension..(id + 1) * self.dimension]
    }

    #[must_use]
    pub fn coord(&self, id: usize, axis: usize) -> f64 {
        self.coords[id * self.dimension + axis]
    }

    /// Validates a query point against this set's dimensionality.
    pub(crate) fn check_query(&self, query: &[f64]) -> Result<()> {
        if query.len() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                found: query.len(),
            });
        }
        check_finite(query)
    }
}

fn check_finite(point: &[f64]) -> Result<()> {
    match point.iter().position(|x| !x.is_finite()) {
        Some(axis) => Err(Error::NonFiniteCoordinate { axis }),
        None => Ok(()),
    }
}
