//! Regression decision tree with variance-reduction splits.

use crate::domain::features::{FeatureVector, FEATURE_COUNT};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Maximum depth of the tree.
    pub max_depth: usize,
    /// Minimum samples required to attempt a split.
    pub min_samples_split: usize,
    /// Minimum samples in each child.
    pub min_samples_leaf: usize,
    /// Features considered per split (None = all).
    pub max_features: Option<usize>,
    /// Random seed for feature-order shuffling.
    pub seed: u64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_samples_split: 5,
            min_samples_leaf: 2,
            max_features: None,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone)]
struct TreeNode {
    feature_idx: Option<usize>,
    threshold: Option<f64>,
    value: f64,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(value: f64) -> Self {
        Self {
            feature_idx: None,
            threshold: None,
            value,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct RegressionTree {
    config: TreeConfig,
    root: Option<TreeNode>,
}

impl RegressionTree {
    pub fn new(config: TreeConfig) -> Self {
        Self { config, root: None }
    }

    pub fn fit(&mut self, x: &[FeatureVector], y: &[f64]) {
        let indices: Vec<usize> = (0..x.len()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.root = Some(self.build_tree(x, y, &indices, 0, &mut rng));
    }

    fn build_tree(
        &self,
        x: &[FeatureVector],
        y: &[f64],
        indices: &[usize],
        depth: usize,
        rng: &mut ChaCha8Rng,
    ) -> TreeNode {
        let labels: Vec<f64> = indices.iter().map(|&i| y[i]).collect();
        let impurity = mse(&labels);

        if depth >= self.config.max_depth
            || indices.len() < self.config.min_samples_split
            || impurity < 1e-10
        {
            return TreeNode::leaf(mean(&labels));
        }

        match self.find_best_split(x, y, indices, impurity, rng) {
            Some((feature_idx, threshold, left_indices, right_indices)) => {
                if left_indices.len() < self.config.min_samples_leaf
                    || right_indices.len() < self.config.min_samples_leaf
                {
                    return TreeNode::leaf(mean(&labels));
                }

                let left = self.build_tree(x, y, &left_indices, depth + 1, rng);
                let right = self.build_tree(x, y, &right_indices, depth + 1, rng);

                TreeNode {
                    feature_idx: Some(feature_idx),
                    threshold: Some(threshold),
                    value: mean(&labels),
                    left: Some(Box::new(left)),
                    right: Some(Box::new(right)),
                }
            }
            None => TreeNode::leaf(mean(&labels)),
        }
    }

    fn find_best_split(
        &self,
        x: &[FeatureVector],
        y: &[f64],
        indices: &[usize],
        parent_impurity: f64,
        rng: &mut ChaCha8Rng,
    ) -> Option<(usize, f64, Vec<usize>, Vec<usize>)> {
        let max_features = self.config.max_features.unwrap_or(FEATURE_COUNT);

        let mut feature_indices: Vec<usize> = (0..FEATURE_COUNT).collect();
        feature_indices.shuffle(rng);
        feature_indices.truncate(max_features);

        let mut best_gain = 0.0;
        let mut best_split: Option<(usize, f64, Vec<usize>, Vec<usize>)> = None;

        for &feature_idx in &feature_indices {
            let mut values: Vec<f64> = indices.iter().map(|&i| x[i][feature_idx]).collect();
            values.sort_by(|a, b| a.total_cmp(b));
            values.dedup();

            for window in values.windows(2) {
                let threshold = (window[0] + window[1]) / 2.0;

                let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
                    .iter()
                    .partition(|&&i| x[i][feature_idx] <= threshold);

                if left_idx.is_empty() || right_idx.is_empty() {
                    continue;
                }

                let left_labels: Vec<f64> = left_idx.iter().map(|&i| y[i]).collect();
                let right_labels: Vec<f64> = right_idx.iter().map(|&i| y[i]).collect();

                let n_left = left_idx.len() as f64;
                let n_right = right_idx.len() as f64;
                let weighted = (n_left * mse(&left_labels) + n_right * mse(&right_labels))
                    / (n_left + n_right);
                let gain = parent_impurity - weighted;

                if gain > best_gain {
                    best_gain = gain;
                    best_split = Some((feature_idx, threshold, left_idx, right_idx));
                }
            }
        }

        best_split
    }

    pub fn predict_one(&self, features: &FeatureVector) -> f64 {
        let mut node = match &self.root {
            Some(node) => node,
            None => return 0.0,
        };

        loop {
            if node.is_leaf() {
                return node.value;
            }
            // split nodes always carry both children and the split fields
            let feature_idx = match node.feature_idx {
                Some(idx) => idx,
                None => return node.value,
            };
            let threshold = match node.threshold {
                Some(t) => t,
                None => return node.value,
            };

            node = if features[feature_idx] <= threshold {
                match &node.left {
                    Some(left) => left,
                    None => return node.value,
                }
            } else {
                match &node.right {
                    Some(right) => right,
                    None => return node.value,
                }
            };
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn mse(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}
