mod config;
mod distance;
mod error;
mod index;
#[allow(clippy::module_name_repetitions)]
mod linear;
mod points;
mod tree;

pub use config::BuildConfig;
pub use distance::euclidean;
pub use error::{Error, Result};
pub use index::{Index, Neighbor};
pub use linear::LinearIndex;
pub use tree::kdtree::{KdTree, TreeStats};
pub use tree::node::Node;
