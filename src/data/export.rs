use std::path::Path;

use serde::Serialize;

use super::error::DataError;
use super::model::{TitleCount, YearSummary};

/// Document written by "File → Export summary…".
#[derive(Debug, Serialize)]
pub struct SummaryExport<'a> {
    /// CSV the numbers were computed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub years: &'a [YearSummary],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drill_down: Option<DrillDown<'a>>,
}

#[derive(Debug, Serialize)]
pub struct DrillDown<'a> {
    pub year: &'a str,
    pub titles: &'a [TitleCount],
}

impl SummaryExport<'_> {
    pub fn to_json(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document as pretty-printed JSON to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), DataError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| DataError::Export {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Exported {} year summaries to {}", self.years.len(), path.display());
        Ok(())
    }
}
