use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("invalid dimension: a point needs at least one coordinate")]
    InvalidDimension,
    #[error("invalid k: at least one neighbor must be requested")]
    InvalidK,
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),
    #[error("non-finite coordinate on axis {axis}")]
    NonFiniteCoordinate { axis: usize },
}
