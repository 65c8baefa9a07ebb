//! Data access port trait.

use crate::domain::error::RankcastError;
use crate::domain::price_series::PriceSeries;
use chrono::NaiveDate;

pub trait DataPort {
    /// Full close history for one ticker, ordered oldest first.
    fn fetch_closes(&self, ticker: &str) -> Result<PriceSeries, RankcastError>;

    /// Tickers the store has data for, sorted.
    fn list_tickers(&self) -> Result<Vec<String>, RankcastError>;

    /// First date, last date, and row count, or None when the ticker is absent.
    fn data_range(&self, ticker: &str) -> Result<Option<(NaiveDate, NaiveDate, usize)>, RankcastError> {
        match self.fetch_closes(ticker) {
            Ok(series) => {
                let points = series.points();
                Ok(points
                    .first()
                    .zip(points.last())
                    .map(|(first, last)| (first.date, last.date, points.len())))
            }
            Err(RankcastError::Data { .. }) => Ok(None),
            Err(other) => Err(other),
        }
    }
}
