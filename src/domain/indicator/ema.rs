//! Exponential Moving Average indicator.
//!
//! k = 2/(n+1), seed with first SMA, then EMA[i] = C[i]*k + EMA[i-1]*(1-k).
//! Warmup: first (n-1) observations are invalid.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::price_series::ClosePoint;

pub fn calculate_ema(points: &[ClosePoint], period: usize) -> IndicatorSeries {
    if period == 0 || points.is_empty() {
        return IndicatorSeries {
            indicator_type: IndicatorType::Ema(period),
            values: Vec::new(),
        };
    }

    let mut values = Vec::with_capacity(points.len());
    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = 0.0;
    let mut sum = 0.0;

    for (i, point) in points.iter().enumerate() {
        if i < period - 1 {
            sum += point.close;
            values.push(IndicatorPoint {
                date: point.date,
                valid: false,
                value: IndicatorValue::Simple(0.0),
            });
        } else if i == period - 1 {
            sum += point.close;
            ema = sum / period as f64;
            values.push(IndicatorPoint {
                date: point.date,
                valid: true,
                value: IndicatorValue::Simple(ema),
            });
        } else {
            ema = point.close * k + ema * (1.0 - k);
            values.push(IndicatorPoint {
                date: point.date,
                valid: true,
                value: IndicatorValue::Simple(ema),
            });
        }
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Ema(period),
        values,
    }
}

/// Raw EMA values with 0.0 in warmup slots, for composing indicators.
pub(crate) fn ema_raw_values(points: &[ClosePoint], period: usize) -> Vec<f64> {
    let series = calculate_ema(points, period);
    series
        .values
        .iter()
        .map(|p| match p.value {
            IndicatorValue::Simple(v) => v,
            _ => 0.0,
        })
        .collect()
}
