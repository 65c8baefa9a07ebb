#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use rankcast::domain::error::RankcastError;
pub use rankcast::domain::price_series::{ClosePoint, PriceSeries};
use rankcast::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<f64>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_closes(mut self, ticker: &str, closes: Vec<f64>) -> Self {
        self.data.insert(ticker.to_string(), closes);
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_closes(&self, ticker: &str) -> Result<PriceSeries, RankcastError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(RankcastError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(ticker) {
            Some(closes) => make_series(ticker, closes),
            None => Err(RankcastError::Data {
                reason: format!("no data for {ticker}"),
            }),
        }
    }

    fn list_tickers(&self) -> Result<Vec<String>, RankcastError> {
        let mut tickers: Vec<String> = self.data.keys().cloned().collect();
        tickers.sort();
        Ok(tickers)
    }
}

pub fn make_series(ticker: &str, closes: &[f64]) -> Result<PriceSeries, RankcastError> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let points: Vec<ClosePoint> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| ClosePoint {
            date: start.checked_add_days(Days::new(i as u64)).unwrap(),
            close,
        })
        .collect();
    PriceSeries::new(ticker.to_string(), points)
}

/// Geometric uptrend: +1% per day from 100.
pub fn rising_closes(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 * 1.01f64.powi(i as i32)).collect()
}

/// Geometric downtrend: -1% per day from 100.
pub fn falling_closes(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 * 0.99f64.powi(i as i32)).collect()
}

/// Flat series with a small deterministic wobble around 100.
pub fn flat_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 0.3 * ((i % 7) as f64 - 3.0) / 3.0)
        .collect()
}
