//! Analysis run configuration.
//!
//! Everything the ranking engine needs is carried explicitly in [`RankConfig`];
//! no module-level constants are consulted at run time.

use crate::domain::error::RankcastError;
use crate::domain::model::forest::ForestConfig;
use crate::domain::model::tree::TreeConfig;

/// Configuration for one ranking run.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Tickers to analyze, in iteration order.
    pub tickers: Vec<String>,
    /// Forward-return horizon in trading days.
    pub horizon: usize,
    /// Number of cross-validation folds.
    pub folds: usize,
    /// Base seed for the bagged ensemble.
    pub seed: u64,
    /// Number of trees in the ensemble.
    pub trees: usize,
    /// Maximum rows in the ranked table.
    pub top_n: usize,
    /// Minimum observations a price series must carry.
    pub min_observations: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub rsi_period: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_mult_x100: u32,
    pub stochastic_period: usize,
    pub stochastic_smooth: usize,
    pub adx_period: usize,
    pub sma_period: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            tickers: Vec::new(),
            horizon: 5,
            folds: 5,
            seed: 42,
            trees: 100,
            top_n: 5,
            min_observations: 25,
            ema_fast: 5,
            ema_slow: 10,
            rsi_period: 14,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_mult_x100: 200,
            stochastic_period: 14,
            stochastic_smooth: 3,
            adx_period: 14,
            sma_period: 10,
        }
    }
}

impl RankConfig {
    pub fn validate(&self) -> Result<(), RankcastError> {
        let invalid = |key: &str, reason: &str| RankcastError::ConfigInvalid {
            section: "ranking".into(),
            key: key.into(),
            reason: reason.into(),
        };

        if self.horizon == 0 {
            return Err(invalid("horizon", "must be at least 1"));
        }
        if self.folds < 2 {
            return Err(invalid("folds", "must be at least 2"));
        }
        if self.trees == 0 {
            return Err(invalid("trees", "must be at least 1"));
        }
        if self.top_n == 0 {
            return Err(invalid("top", "must be at least 1"));
        }
        if self.ema_fast == 0 || self.ema_slow == 0 || self.ema_fast >= self.ema_slow {
            return Err(invalid("ema_fast", "fast window must be shorter than slow"));
        }
        for (key, period) in [
            ("rsi_period", self.rsi_period),
            ("macd_signal", self.macd_signal),
            ("bollinger_period", self.bollinger_period),
            ("stochastic_period", self.stochastic_period),
            ("stochastic_smooth", self.stochastic_smooth),
            ("adx_period", self.adx_period),
            ("sma_period", self.sma_period),
        ] {
            if period == 0 {
                return Err(invalid(key, "window must be at least 1"));
            }
        }
        Ok(())
    }

    pub fn forest_config(&self) -> ForestConfig {
        ForestConfig {
            n_trees: self.trees,
            seed: self.seed,
            tree: TreeConfig::default(),
        }
    }
}
