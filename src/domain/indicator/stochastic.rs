//! Stochastic oscillator (%K with %D signal).
//!
//! %K = 100 * (close - lowest(n)) / (highest(n) - lowest(n))
//! %D = SMA(d) of %K
//!
//! The source series carries close prices only, so the highest/lowest window
//! extremes are taken over close. A window with zero range pins %K to the
//! 50.0 midline. Warmup: (k_period - 1) for %K, (k_period - 1 + d_period - 1)
//! for %D.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::price_series::ClosePoint;

pub fn calculate_stochastic(
    points: &[ClosePoint],
    k_period: usize,
    d_period: usize,
) -> IndicatorSeries {
    let indicator_type = IndicatorType::Stochastic { k_period, d_period };

    if k_period == 0 || d_period == 0 || points.is_empty() {
        return IndicatorSeries {
            indicator_type,
            values: Vec::new(),
        };
    }

    let k_warmup = k_period - 1;
    let d_warmup = k_period - 1 + d_period - 1;

    let mut k_values: Vec<f64> = vec![0.0; points.len()];
    for i in k_warmup..points.len() {
        let window = &points[i + 1 - k_period..=i];
        let lowest = window.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
        let highest = window
            .iter()
            .map(|p| p.close)
            .fold(f64::NEG_INFINITY, f64::max);

        let range = highest - lowest;
        k_values[i] = if range == 0.0 {
            50.0
        } else {
            100.0 * (points[i].close - lowest) / range
        };
    }

    let mut values = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let valid = i >= d_warmup;
        let d = if valid {
            k_values[i + 1 - d_period..=i].iter().sum::<f64>() / d_period as f64
        } else {
            0.0
        };

        values.push(IndicatorPoint {
            date: point.date,
            valid,
            value: IndicatorValue::Stochastic { k: k_values[i], d },
        });
    }

    IndicatorSeries {
        indicator_type,
        values,
    }
}
