//! CSV report adapter.
//!
//! Writes the ranked table as one row per asset, preserving table order.

use crate::domain::error::RankcastError;
use crate::domain::ranker::RankedTable;
use crate::ports::report_port::ReportPort;
use std::fs::File;

pub struct CsvReportAdapter;

impl ReportPort for CsvReportAdapter {
    fn write(&self, table: &RankedTable, output_path: &str) -> Result<(), RankcastError> {
        let file = File::create(output_path)?;
        let mut wtr = csv::Writer::from_writer(file);

        wtr.write_record([
            "rank",
            "ticker",
            "expected_return_pct",
            "mae_pct",
            "confidence_pct",
            "score",
        ])
        .map_err(|e| RankcastError::Data {
            reason: format!("failed to write report header: {}", e),
        })?;

        for (i, asset) in table.assets.iter().enumerate() {
            wtr.write_record([
                (i + 1).to_string(),
                asset.ticker.clone(),
                format!("{:.2}", asset.expected_return_pct),
                format!("{:.4}", asset.mae_pct),
                format!("{:.2}", asset.confidence_pct),
                format!("{:.4}", asset.score),
            ])
            .map_err(|e| RankcastError::Data {
                reason: format!("failed to write report row: {}", e),
            })?;
        }

        wtr.flush()?;
        Ok(())
    }
}
