//! Feature matrix and forward-return target construction.
//!
//! Each row pairs the 11 indicator fields with the H-period forward return
//! `close[t+H] / close[t] - 1`. The tail H rows have no defined target and are
//! dropped, never imputed.

use crate::domain::frame::IndicatorFrame;
use chrono::NaiveDate;

pub const FEATURE_COUNT: usize = 11;

/// Fixed feature order; must match [`FeatureVector`] construction.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "ema_fast",
    "ema_slow",
    "rsi",
    "macd",
    "macd_signal",
    "boll_upper",
    "boll_lower",
    "stoch_k",
    "stoch_d",
    "adx",
    "close_sma",
];

pub type FeatureVector = [f64; FEATURE_COUNT];

#[derive(Debug, Clone)]
pub struct FeatureTargetSet {
    pub ticker: String,
    pub dates: Vec<NaiveDate>,
    pub features: Vec<FeatureVector>,
    pub targets: Vec<f64>,
}

impl FeatureTargetSet {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

pub fn build_features(frame: &IndicatorFrame, horizon: usize) -> FeatureTargetSet {
    let usable = frame.rows.len().saturating_sub(horizon);

    let mut dates = Vec::with_capacity(usable);
    let mut features = Vec::with_capacity(usable);
    let mut targets = Vec::with_capacity(usable);

    for t in 0..usable {
        let row = &frame.rows[t];
        dates.push(row.date);
        features.push(feature_vector(row));
        targets.push(frame.rows[t + horizon].close / row.close - 1.0);
    }

    FeatureTargetSet {
        ticker: frame.ticker.clone(),
        dates,
        features,
        targets,
    }
}

fn feature_vector(row: &crate::domain::frame::FrameRow) -> FeatureVector {
    [
        row.ema_fast,
        row.ema_slow,
        row.rsi,
        row.macd,
        row.macd_signal,
        row.boll_upper,
        row.boll_lower,
        row.stoch_k,
        row.stoch_d,
        row.adx,
        row.close_sma,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::frame::FrameRow;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn make_frame(closes: &[f64]) -> IndicatorFrame {
        let rows: Vec<FrameRow> = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| FrameRow {
                date: NaiveDate::from_ymd_opt(2024, (i / 28 + 1) as u32, (i % 28 + 1) as u32)
                    .unwrap(),
                close,
                ema_fast: close,
                ema_slow: close,
                rsi: 50.0,
                macd: 0.0,
                macd_signal: 0.0,
                boll_upper: close + 1.0,
                boll_lower: close - 1.0,
                stoch_k: 50.0,
                stoch_d: 50.0,
                adx: 20.0,
                close_sma: close,
            })
            .collect();

        IndicatorFrame {
            ticker: "TEST".into(),
            rows,
        }
    }

    #[test]
    fn tail_horizon_rows_are_dropped() {
        let frame = make_frame(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0]);
        let set = build_features(&frame, 5);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn target_is_forward_return() {
        let frame = make_frame(&[100.0, 101.0, 102.0, 103.0, 104.0, 110.0, 120.0]);
        let set = build_features(&frame, 5);

        assert!((set.targets[0] - (110.0 / 100.0 - 1.0)).abs() < 1e-9);
        assert!((set.targets[1] - (120.0 / 101.0 - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn frame_shorter_than_horizon_yields_empty_set() {
        let frame = make_frame(&[100.0, 101.0, 102.0]);
        let set = build_features(&frame, 5);
        assert!(set.is_empty());
    }

    #[test]
    fn feature_vector_order_matches_names() {
        let frame = make_frame(&[100.0; 7]);
        let set = build_features(&frame, 5);

        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        let row = &set.features[0];
        assert_eq!(row[FEATURE_NAMES.iter().position(|&n| n == "rsi").unwrap()], 50.0);
        assert_eq!(
            row[FEATURE_NAMES
                .iter()
                .position(|&n| n == "boll_upper")
                .unwrap()],
            101.0
        );
    }

    proptest! {
        #[test]
        fn target_formula_holds_for_random_series(
            closes in proptest::collection::vec(1.0f64..1000.0, 10..60)
        ) {
            let frame = make_frame(&closes);
            let set = build_features(&frame, 5);

            prop_assert_eq!(set.len(), closes.len() - 5);
            for t in 0..set.len() {
                let expected = closes[t + 5] / closes[t] - 1.0;
                prop_assert!((set.targets[t] - expected).abs() < 1e-9);
            }
        }
    }
}
