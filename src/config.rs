use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Looked up in the working directory at start-up.
pub const CONFIG_FILE: &str = "salary-dash.json";

/// Start-up settings. Every field is optional in the JSON file.
///
/// ```json
/// { "data_path": "data/salaries.csv", "page_size": 15, "sort_years_ascending": true }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV loaded at start-up when it exists.
    pub data_path: PathBuf,
    /// Rows per table page.
    pub page_size: usize,
    /// Initial year ordering of the summary table and chart.
    /// `None` keeps the order in which years first appear in the file.
    pub sort_years_ascending: Option<bool>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("salaries.csv"),
            page_size: 10,
            sort_years_ascending: None,
        }
    }
}

impl DashboardConfig {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Like [`DashboardConfig::from_file`] but never fails: a missing file is
    /// silently replaced by defaults, a broken one is logged first.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Using config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }

    /// A path given on the command line wins over `data_path`.
    pub fn with_cli_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.data_path = p;
        }
        self
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }
}
