//! Cross-asset ranking of per-asset forecasts.
//!
//! Confidence is a relative measure across the batch: the asset with the
//! lowest validation MAE gets ~100, the highest gets ~0, scaled linearly in
//! between. The ranking score weights the expected return by that confidence,
//! so a large forecast from a poorly validated model drops down the table.

use crate::domain::analysis::AssetResult;

/// Denominator guard for a single-asset batch (max == min).
pub const CONFIDENCE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedAsset {
    pub ticker: String,
    /// Expected return over the horizon, in percent.
    pub expected_return_pct: f64,
    /// Cross-validation MAE, in percent.
    pub mae_pct: f64,
    /// Relative confidence in [0, 100].
    pub confidence_pct: f64,
    /// `expected_return_pct * confidence_pct / 100`.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedTable {
    pub assets: Vec<RankedAsset>,
}

impl RankedTable {
    /// Sentinel for a run where no asset produced a usable forecast.
    pub fn empty() -> Self {
        Self { assets: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }
}

/// Scores and sorts the batch, keeping the top `top_n` assets.
///
/// Sorting is stable on descending score, so ties keep input order.
pub fn rank(results: &[AssetResult], top_n: usize) -> RankedTable {
    if results.is_empty() {
        return RankedTable::empty();
    }

    let min_mae = results
        .iter()
        .map(|r| r.mae_pct)
        .fold(f64::INFINITY, f64::min);
    let max_mae = results
        .iter()
        .map(|r| r.mae_pct)
        .fold(f64::NEG_INFINITY, f64::max);
    let spread = max_mae - min_mae + CONFIDENCE_EPSILON;

    let mut assets: Vec<RankedAsset> = results
        .iter()
        .map(|r| {
            let confidence_pct = round_to(100.0 * (1.0 - (r.mae_pct - min_mae) / spread), 2);
            let score = r.expected_return_pct * confidence_pct / 100.0;
            RankedAsset {
                ticker: r.ticker.clone(),
                expected_return_pct: r.expected_return_pct,
                mae_pct: r.mae_pct,
                confidence_pct,
                score,
            }
        })
        .collect();

    assets.sort_by(|a, b| b.score.total_cmp(&a.score));
    assets.truncate(top_n);

    RankedTable { assets }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn result(ticker: &str, er: f64, mae: f64) -> AssetResult {
        AssetResult {
            ticker: ticker.into(),
            expected_return_pct: er,
            mae_pct: mae,
        }
    }

    #[test]
    fn empty_batch_yields_sentinel() {
        let table = rank(&[], 5);
        assert!(table.is_empty());
        assert_eq!(table, RankedTable::empty());
    }

    #[test]
    fn best_mae_gets_near_full_confidence() {
        let table = rank(
            &[result("AAA", 2.0, 1.0), result("BBB", 2.0, 3.0)],
            5,
        );

        let aaa = table.assets.iter().find(|a| a.ticker == "AAA").unwrap();
        let bbb = table.assets.iter().find(|a| a.ticker == "BBB").unwrap();
        assert_relative_eq!(aaa.confidence_pct, 100.0, epsilon = 0.01);
        assert_relative_eq!(bbb.confidence_pct, 0.0, epsilon = 0.01);
    }

    #[test]
    fn single_asset_confidence_is_full() {
        let table = rank(&[result("AAA", 1.5, 0.8)], 5);
        assert_relative_eq!(table.assets[0].confidence_pct, 100.0, epsilon = 0.01);
        assert_relative_eq!(table.assets[0].score, 1.5, epsilon = 0.001);
    }

    #[test]
    fn sorted_descending_by_score() {
        let table = rank(
            &[
                result("LOW", 1.0, 2.0),
                result("HIGH", 5.0, 1.0),
                result("MID", 3.0, 1.5),
            ],
            5,
        );

        let tickers: Vec<&str> = table.assets.iter().map(|a| a.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["HIGH", "MID", "LOW"]);
        for pair in table.assets.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn confident_negative_return_scores_below_confident_positive() {
        let table = rank(
            &[result("UP", 4.0, 1.0), result("DOWN", -4.0, 1.0)],
            5,
        );
        assert_eq!(table.assets[0].ticker, "UP");
        assert!(table.assets[0].score > 0.0);
        assert!(table.assets[1].score < 0.0);
    }

    #[test]
    fn table_truncated_to_top_n() {
        let results: Vec<AssetResult> = (0..8)
            .map(|i| result(&format!("T{i}"), i as f64, 1.0 + i as f64 * 0.1))
            .collect();

        let table = rank(&results, 5);
        assert_eq!(table.len(), 5);
        assert_eq!(table.assets[0].ticker, "T7");
    }

    #[test]
    fn score_ties_keep_input_order() {
        let table = rank(
            &[result("FIRST", 0.0, 1.0), result("SECOND", 0.0, 2.0)],
            5,
        );
        assert_eq!(table.assets[0].ticker, "FIRST");
        assert_eq!(table.assets[1].ticker, "SECOND");
    }

    proptest! {
        #[test]
        fn lower_mae_never_gets_lower_confidence(
            maes in proptest::collection::vec(0.0f64..10.0, 2..12)
        ) {
            let results: Vec<AssetResult> = maes
                .iter()
                .enumerate()
                .map(|(i, &mae)| result(&format!("T{i}"), 1.0, mae))
                .collect();
            let table = rank(&results, results.len());

            let confidence = |i: usize| {
                let ticker = format!("T{i}");
                table
                    .assets
                    .iter()
                    .find(|a| a.ticker == ticker)
                    .unwrap()
                    .confidence_pct
            };
            for i in 0..maes.len() {
                for j in 0..maes.len() {
                    if maes[i] < maes[j] {
                        prop_assert!(confidence(i) >= confidence(j));
                    }
                }
            }
        }
    }

    #[test]
    fn round_to_two_and_four_places() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.23456, 4), 1.2346);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }
}
