//! Close-price series for a single asset.

use crate::domain::error::RankcastError;
use chrono::NaiveDate;

/// One daily observation: date and closing price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Ordered close-price history for one ticker.
///
/// Dates are strictly ascending with no duplicates; [`PriceSeries::new`]
/// rejects anything else. Gaps between dates are allowed and carry no
/// special treatment downstream.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub ticker: String,
    points: Vec<ClosePoint>,
}

impl PriceSeries {
    pub fn new(ticker: String, points: Vec<ClosePoint>) -> Result<Self, RankcastError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(RankcastError::SeriesOrder { ticker });
            }
        }
        Ok(Self { ticker, points })
    }

    pub fn points(&self) -> &[ClosePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
