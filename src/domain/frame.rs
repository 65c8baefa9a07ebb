//! Aligned indicator frame for one asset.
//!
//! [`compute_frame`] runs every configured indicator over a price series and
//! zips the results into rows with all fields defined. Rows inside the warm-up
//! prefix of the slowest indicator are trimmed; nothing is imputed or filled.

use crate::domain::config::RankConfig;
use crate::domain::error::RankcastError;
use crate::domain::indicator::{
    calculate_adx, calculate_bollinger, calculate_ema, calculate_macd, calculate_rsi,
    calculate_sma, calculate_stochastic, IndicatorValue,
};
use crate::domain::price_series::PriceSeries;
use chrono::NaiveDate;

/// One fully-populated row: date, close, and the 11 indicator fields.
#[derive(Debug, Clone, Copy)]
pub struct FrameRow {
    pub date: NaiveDate,
    pub close: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub boll_upper: f64,
    pub boll_lower: f64,
    pub stoch_k: f64,
    pub stoch_d: f64,
    pub adx: f64,
    pub close_sma: f64,
}

#[derive(Debug, Clone)]
pub struct IndicatorFrame {
    pub ticker: String,
    pub rows: Vec<FrameRow>,
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Compute all indicators for `series` and trim the leading warm-up prefix.
///
/// Fails with `InsufficientData` when the series is shorter than the
/// configured minimum observation count.
pub fn compute_frame(
    series: &PriceSeries,
    config: &RankConfig,
) -> Result<IndicatorFrame, RankcastError> {
    if series.len() < config.min_observations {
        return Err(RankcastError::InsufficientData {
            ticker: series.ticker.clone(),
            rows: series.len(),
            minimum: config.min_observations,
        });
    }

    let points = series.points();
    let ema_fast = calculate_ema(points, config.ema_fast);
    let ema_slow = calculate_ema(points, config.ema_slow);
    let rsi = calculate_rsi(points, config.rsi_period);
    let macd = calculate_macd(points, config.ema_fast, config.ema_slow, config.macd_signal);
    let bollinger = calculate_bollinger(points, config.bollinger_period, config.bollinger_mult_x100);
    let stochastic = calculate_stochastic(
        points,
        config.stochastic_period,
        config.stochastic_smooth,
    );
    let adx = calculate_adx(points, config.adx_period);
    let sma = calculate_sma(points, config.sma_period);

    let mut rows = Vec::new();

    for (i, point) in points.iter().enumerate() {
        let all_valid = ema_fast.values[i].valid
            && ema_slow.values[i].valid
            && rsi.values[i].valid
            && macd.values[i].valid
            && bollinger.values[i].valid
            && stochastic.values[i].valid
            && adx.values[i].valid
            && sma.values[i].valid;

        if !all_valid {
            // warm-up prefix; trailing windows guarantee validity never flips
            // back off once every indicator has seeded
            continue;
        }

        let (macd_line, macd_signal) = match macd.values[i].value {
            IndicatorValue::Macd { line, signal } => (line, signal),
            _ => continue,
        };
        let (boll_upper, boll_lower) = match bollinger.values[i].value {
            IndicatorValue::Bollinger { upper, lower, .. } => (upper, lower),
            _ => continue,
        };
        let (stoch_k, stoch_d) = match stochastic.values[i].value {
            IndicatorValue::Stochastic { k, d } => (k, d),
            _ => continue,
        };

        rows.push(FrameRow {
            date: point.date,
            close: point.close,
            ema_fast: simple(&ema_fast.values[i].value),
            ema_slow: simple(&ema_slow.values[i].value),
            rsi: simple(&rsi.values[i].value),
            macd: macd_line,
            macd_signal,
            boll_upper,
            boll_lower,
            stoch_k,
            stoch_d,
            adx: simple(&adx.values[i].value),
            close_sma: simple(&sma.values[i].value),
        });
    }

    Ok(IndicatorFrame {
        ticker: series.ticker.clone(),
        rows,
    })
}

fn simple(value: &IndicatorValue) -> f64 {
    match value {
        IndicatorValue::Simple(v) => *v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_series::ClosePoint;
    use chrono::NaiveDate;

    fn make_series(ticker: &str, prices: &[f64]) -> PriceSeries {
        let points: Vec<ClosePoint> = prices
            .iter()
            .enumerate()
            .map(|(i, &close)| ClosePoint {
                date: NaiveDate::from_ymd_opt(2024, (i / 28 + 1) as u32, (i % 28 + 1) as u32)
                    .unwrap(),
                close,
            })
            .collect();
        PriceSeries::new(ticker.into(), points).unwrap()
    }

    fn varied_prices(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + ((i * 7) % 13) as f64 - 6.0 + i as f64 * 0.1)
            .collect()
    }

    #[test]
    fn frame_rejects_short_series() {
        let series = make_series("SHORT", &varied_prices(10));
        let result = compute_frame(&series, &RankConfig::default());
        assert!(matches!(
            result,
            Err(RankcastError::InsufficientData {
                rows: 10,
                minimum: 25,
                ..
            })
        ));
    }

    #[test]
    fn frame_trims_exactly_the_adx_warmup() {
        // longest warm-up under default config: ADX(14) → 2*14 - 1 = 27 rows
        let series = make_series("TEST", &varied_prices(40));
        let frame = compute_frame(&series, &RankConfig::default()).unwrap();
        assert_eq!(frame.len(), 40 - 27);
    }

    #[test]
    fn frame_rows_are_contiguous_suffix_of_input() {
        let series = make_series("TEST", &varied_prices(40));
        let frame = compute_frame(&series, &RankConfig::default()).unwrap();

        let points = series.points();
        let offset = points.len() - frame.len();
        for (i, row) in frame.rows.iter().enumerate() {
            assert_eq!(row.date, points[offset + i].date);
            assert_eq!(row.close, points[offset + i].close);
        }
    }

    #[test]
    fn frame_minimum_length_series_may_be_empty() {
        // 25 observations clear the precondition but not the ADX warm-up;
        // the frame is empty and downstream validation rejects the ticker
        let series = make_series("TEST", &varied_prices(25));
        let frame = compute_frame(&series, &RankConfig::default()).unwrap();
        assert!(frame.is_empty());
    }

    #[test]
    fn frame_fields_are_finite() {
        let series = make_series("TEST", &varied_prices(60));
        let frame = compute_frame(&series, &RankConfig::default()).unwrap();

        for row in &frame.rows {
            for v in [
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
            ] {
                assert!(v.is_finite());
            }
        }
    }
}
