//! K-fold cross-validation scored by mean absolute error.
//!
//! Folds are contiguous and order-preserving (no shuffling), sized n/k with
//! the remainder spread over the leading folds. Each fold's model is a fresh
//! forest trained with the same base seed, and MAE is computed on the held-out
//! rows only, never on in-sample residuals of the final model.

use crate::domain::features::FeatureVector;
use crate::domain::model::forest::{BaggedForest, ForestConfig};

/// Contiguous (start, end) bounds for each of `k` folds over `n` rows.
///
/// Precondition: `n >= k >= 1`.
pub fn fold_bounds(n: usize, k: usize) -> Vec<(usize, usize)> {
    let base = n / k;
    let remainder = n % k;

    let mut bounds = Vec::with_capacity(k);
    let mut start = 0;
    for fold in 0..k {
        let size = base + usize::from(fold < remainder);
        bounds.push((start, start + size));
        start += size;
    }
    bounds
}

/// Per-fold MAE of a forest trained on the complementary rows.
///
/// Precondition (checked by the caller): `x.len() >= folds`.
pub fn cross_validate_mae(
    config: &ForestConfig,
    x: &[FeatureVector],
    y: &[f64],
    folds: usize,
) -> Vec<f64> {
    let n = x.len();
    let mut fold_maes = Vec::with_capacity(folds);

    for (start, end) in fold_bounds(n, folds) {
        let mut train_x: Vec<FeatureVector> = Vec::with_capacity(n - (end - start));
        let mut train_y: Vec<f64> = Vec::with_capacity(n - (end - start));
        for i in (0..start).chain(end..n) {
            train_x.push(x[i]);
            train_y.push(y[i]);
        }

        let forest = BaggedForest::fit(config, &train_x, &train_y);

        let abs_error_sum: f64 = (start..end)
            .map(|i| (forest.predict_one(&x[i]) - y[i]).abs())
            .sum();
        fold_maes.push(abs_error_sum / (end - start) as f64);
    }

    fold_maes
}
