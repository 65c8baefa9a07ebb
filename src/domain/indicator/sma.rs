//! Simple Moving Average of close.
//!
//! Stands in for the volume moving-average feature: the source series carries
//! close prices only, so the smoothing is applied to close. Warmup: first
//! (n-1) observations are invalid.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::price_series::ClosePoint;

pub fn calculate_sma(points: &[ClosePoint], period: usize) -> IndicatorSeries {
    if period == 0 || points.is_empty() {
        return IndicatorSeries {
            indicator_type: IndicatorType::Sma(period),
            values: Vec::new(),
        };
    }

    let mut values = Vec::with_capacity(points.len());

    for i in 0..points.len() {
        let valid = i + 1 >= period;
        let sma = if valid {
            let window = &points[i + 1 - period..=i];
            window.iter().map(|p| p.close).sum::<f64>() / period as f64
        } else {
            0.0
        };

        values.push(IndicatorPoint {
            date: points[i].date,
            valid,
            value: IndicatorValue::Simple(sma),
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Sma(period),
        values,
    }
}
