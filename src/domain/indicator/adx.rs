//! ADX (Average Directional Index) trend-strength indicator.
//!
//! Wilder's directional movement, computed from the close series only (the
//! source data carries no high/low): true range and directional movement both
//! collapse to the absolute close-to-close change, so up moves feed +DM and
//! down moves feed -DM.
//!
//! - Smoothed TR/+DM/-DM: initial sum over the first n changes, then
//!   s[t] = s[t-1] - s[t-1]/n + v[t]
//! - +DI = 100 * s+DM / sTR, -DI = 100 * s-DM / sTR
//! - DX = 100 * |+DI - -DI| / (+DI + -DI)
//! - ADX: mean of the first n DX values, then Wilder-smoothed
//!
//! Warmup: first (2n - 1) observations are invalid.

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::price_series::ClosePoint;

pub fn calculate_adx(points: &[ClosePoint], period: usize) -> IndicatorSeries {
    let indicator_type = IndicatorType::Adx(period);

    if period == 0 || points.is_empty() {
        return IndicatorSeries {
            indicator_type,
            values: Vec::new(),
        };
    }

    let n = points.len();
    let mut tr = vec![0.0; n];
    let mut plus_dm = vec![0.0; n];
    let mut minus_dm = vec![0.0; n];

    for i in 1..n {
        let delta = points[i].close - points[i - 1].close;
        tr[i] = delta.abs();
        if delta > 0.0 {
            plus_dm[i] = delta;
        } else {
            minus_dm[i] = -delta;
        }
    }

    let mut dx = vec![0.0; n];
    let mut dx_valid = vec![false; n];

    if n > period {
        let mut s_tr: f64 = tr[1..=period].iter().sum();
        let mut s_plus: f64 = plus_dm[1..=period].iter().sum();
        let mut s_minus: f64 = minus_dm[1..=period].iter().sum();

        for i in period..n {
            if i > period {
                s_tr = s_tr - s_tr / period as f64 + tr[i];
                s_plus = s_plus - s_plus / period as f64 + plus_dm[i];
                s_minus = s_minus - s_minus / period as f64 + minus_dm[i];
            }

            let (plus_di, minus_di) = if s_tr == 0.0 {
                (0.0, 0.0)
            } else {
                (100.0 * s_plus / s_tr, 100.0 * s_minus / s_tr)
            };

            let di_sum = plus_di + minus_di;
            dx[i] = if di_sum == 0.0 {
                0.0
            } else {
                100.0 * (plus_di - minus_di).abs() / di_sum
            };
            dx_valid[i] = true;
        }
    }

    let warmup = 2 * period - 1;
    let mut values = Vec::with_capacity(n);
    let mut adx = 0.0;

    for (i, point) in points.iter().enumerate() {
        let valid = i >= warmup && dx_valid[i];

        if valid {
            if i == warmup {
                adx = dx[period..=warmup].iter().sum::<f64>() / period as f64;
            } else {
                adx = (adx * (period - 1) as f64 + dx[i]) / period as f64;
            }
        }

        values.push(IndicatorPoint {
            date: point.date,
            valid,
            value: IndicatorValue::Simple(if valid { adx } else { 0.0 }),
        });
    }

    IndicatorSeries {
        indicator_type,
        values,
    }
}
