//! CSV file data adapter.
//!
//! Each ticker lives in its own `<TICKER>.csv` under the base path, with a
//! header row and `date,close` columns. Dates are ISO `%Y-%m-%d`.

use crate::domain::error::RankcastError;
use crate::domain::price_series::{ClosePoint, PriceSeries};
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", ticker))
    }
}

impl DataPort for CsvAdapter {
    fn fetch_closes(&self, ticker: &str) -> Result<PriceSeries, RankcastError> {
        let path = self.csv_path(ticker);
        let content = fs::read_to_string(&path).map_err(|e| RankcastError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| RankcastError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str = record.get(0).ok_or_else(|| RankcastError::Data {
                reason: format!("missing date column in {}", path.display()),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                RankcastError::Data {
                    reason: format!("invalid date '{}': {}", date_str, e),
                }
            })?;

            let close: f64 = record
                .get(1)
                .ok_or_else(|| RankcastError::Data {
                    reason: format!("missing close column in {}", path.display()),
                })?
                .parse()
                .map_err(|e| RankcastError::Data {
                    reason: format!("invalid close value: {}", e),
                })?;

            if !close.is_finite() || close <= 0.0 {
                return Err(RankcastError::Data {
                    reason: format!("non-positive close {} on {}", close, date),
                });
            }

            points.push(ClosePoint { date, close });
        }

        points.sort_by_key(|p| p.date);
        PriceSeries::new(ticker.to_string(), points)
    }

    fn list_tickers(&self) -> Result<Vec<String>, RankcastError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| RankcastError::Data {
            reason: format!("failed to read {}: {}", self.base_path.display(), e),
        })?;

        let mut tickers = Vec::new();
        for entry in entries {
            let entry = entry.map_err(RankcastError::Io)?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("csv") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    tickers.push(stem.to_string());
                }
            }
        }
        tickers.sort();
        Ok(tickers)
    }
}
