use crate::budget::{aggregate, normalize, PortfolioSummary, RawRow};
use crate::core::report::PortfolioReport;
use crate::errors::Result;
use crate::storage::RowSource;

pub struct SummaryService;

impl SummaryService {
    /// Normalizes and aggregates one snapshot of rows.
    pub fn summarize(rows: &[RawRow]) -> PortfolioSummary {
        aggregate(normalize(rows))
    }

    /// Loads a fresh snapshot from `source` and summarizes it.
    pub fn load<S: RowSource + ?Sized>(source: &S) -> Result<PortfolioSummary> {
        let rows = source.load()?;
        tracing::debug!(source = %source.describe(), rows = rows.len(), "summarizing snapshot");
        Ok(Self::summarize(&rows))
    }

    pub fn report(summary: &PortfolioSummary) -> PortfolioReport {
        PortfolioReport::from(summary)
    }
}
