//! Per-asset train/evaluate/predict pipeline and the batch ranking run.

use crate::domain::config::RankConfig;
use crate::domain::error::RankcastError;
use crate::domain::features::build_features;
use crate::domain::frame::compute_frame;
use crate::domain::model::BaggedForest;
use crate::domain::price_series::PriceSeries;
use crate::domain::ranker::{rank, round_to, RankedTable};
use crate::domain::validation::cross_validate_mae;
use crate::ports::data_port::DataPort;

/// One asset's forecast and its validation error, both in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetResult {
    pub ticker: String,
    pub expected_return_pct: f64,
    pub mae_pct: f64,
}

/// A ticker that was skipped during a batch run, with the reason.
#[derive(Debug)]
pub struct TickerFailure {
    pub ticker: String,
    pub error: RankcastError,
}

#[derive(Debug)]
pub struct RankingOutcome {
    pub table: RankedTable,
    pub failures: Vec<TickerFailure>,
}

/// Trains and validates one asset's model, then forecasts the next horizon.
///
/// Validation runs before the final fit: the reported MAE comes from k-fold
/// held-out predictions, while the forecast comes from a model refit on every
/// available row.
pub fn analyze_ticker(
    series: &PriceSeries,
    config: &RankConfig,
) -> Result<AssetResult, RankcastError> {
    let frame = compute_frame(series, config)?;
    let set = build_features(&frame, config.horizon);

    if set.len() < config.folds {
        return Err(RankcastError::InsufficientData {
            ticker: series.ticker.clone(),
            rows: set.len(),
            minimum: config.folds,
        });
    }

    let forest_config = config.forest_config();
    let fold_maes = cross_validate_mae(&forest_config, &set.features, &set.targets, config.folds);
    let mae = fold_maes.iter().sum::<f64>() / fold_maes.len() as f64;
    if !mae.is_finite() {
        return Err(RankcastError::Computation {
            ticker: series.ticker.clone(),
            reason: "cross-validation produced a non-finite error".into(),
        });
    }

    let forest = BaggedForest::fit(&forest_config, &set.features, &set.targets);
    // the forecast row is the newest row the model was trained on, the same
    // row the upstream pipeline feeds back after dropping undefined targets
    let latest = set.features.last().ok_or_else(|| RankcastError::Computation {
        ticker: series.ticker.clone(),
        reason: "no feature row available for prediction".into(),
    })?;
    let expected_return = forest.predict_one(latest);

    Ok(AssetResult {
        ticker: series.ticker.clone(),
        expected_return_pct: round_to(expected_return * 100.0, 2),
        mae_pct: round_to(mae * 100.0, 4),
    })
}

/// Runs the full batch: fetch, analyze, and rank every configured ticker.
///
/// A failing ticker never aborts the batch; its error is reported and the
/// remaining tickers still run. An all-failures batch yields the empty table.
pub fn run_ranking(data: &dyn DataPort, config: &RankConfig) -> RankingOutcome {
    let mut results = Vec::with_capacity(config.tickers.len());
    let mut failures = Vec::new();

    for ticker in &config.tickers {
        let outcome = data
            .fetch_closes(ticker)
            .and_then(|series| analyze_ticker(&series, config));

        match outcome {
            Ok(result) => {
                eprintln!(
                    "{}: expected return {:.2}%, validation MAE {:.4}%",
                    result.ticker, result.expected_return_pct, result.mae_pct
                );
                results.push(result);
            }
            Err(error) => {
                eprintln!("{ticker}: skipped ({error})");
                failures.push(TickerFailure {
                    ticker: ticker.clone(),
                    error,
                });
            }
        }
    }

    RankingOutcome {
        table: rank(&results, config.top_n),
        failures,
    }
}
