//! Seeded bagged regression-tree ensemble.

pub mod tree;
pub mod forest;

pub use forest::{BaggedForest, ForestConfig};
pub use tree::{RegressionTree, TreeConfig};
