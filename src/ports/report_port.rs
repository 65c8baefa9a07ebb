//! Report generation port trait.

use crate::domain::error::RankcastError;
use crate::domain::ranker::RankedTable;

/// Port for writing the ranked forecast table.
pub trait ReportPort {
    fn write(&self, table: &RankedTable, output_path: &str) -> Result<(), RankcastError>;
}
