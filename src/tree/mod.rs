mod build;
mod candidates;
pub mod kdtree;
pub mod node;
mod search;
