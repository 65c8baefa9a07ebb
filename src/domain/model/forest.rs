//! Bagged ensemble of regression trees.
//!
//! Trees are built sequentially; tree `i` derives its seed as
//! `seed.wrapping_add(i)` for both its bootstrap sample and its feature
//! shuffling, so a fixed base seed yields a bit-for-bit reproducible model.

use crate::domain::features::FeatureVector;
use crate::domain::model::tree::{RegressionTree, TreeConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct ForestConfig {
    /// Number of trees in the ensemble.
    pub n_trees: usize,
    /// Base seed; per-tree seeds are derived from it.
    pub seed: u64,
    /// Configuration applied to every tree.
    pub tree: TreeConfig,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
            tree: TreeConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BaggedForest {
    trees: Vec<RegressionTree>,
}

impl BaggedForest {
    pub fn fit(config: &ForestConfig, x: &[FeatureVector], y: &[f64]) -> Self {
        let n = x.len();
        let mut trees = Vec::with_capacity(config.n_trees);

        for i in 0..config.n_trees {
            let tree_seed = config.seed.wrapping_add(i as u64);
            let indices = bootstrap_indices(n, tree_seed);

            let bx: Vec<FeatureVector> = indices.iter().map(|&j| x[j]).collect();
            let by: Vec<f64> = indices.iter().map(|&j| y[j]).collect();

            let mut tree = RegressionTree::new(TreeConfig {
                seed: tree_seed,
                ..config.tree.clone()
            });
            tree.fit(&bx, &by);
            trees.push(tree);
        }

        Self { trees }
    }

    /// Mean of the per-tree predictions.
    pub fn predict_one(&self, features: &FeatureVector) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        self.trees
            .iter()
            .map(|t| t.predict_one(features))
            .sum::<f64>()
            / self.trees.len() as f64
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

/// Sample-with-replacement index draw for one tree's bag.
fn bootstrap_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..n)).collect()
}
