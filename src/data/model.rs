use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// RawRow – one record of the salary CSV
// ---------------------------------------------------------------------------

/// A single parsed salary record.
///
/// `year` is kept as the label found in the file: grouping compares the text,
/// not a number, so `"2022"` and `"2022.0"` are different years.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub year: String,
    pub title: String,
    /// Salary in USD, `0.0` when the field could not be parsed.
    pub salary_usd: f64,
}

impl RawRow {
    pub fn new(year: impl Into<String>, title: impl Into<String>, salary_usd: f64) -> Self {
        Self {
            year: year.into(),
            title: title.into(),
            salary_usd,
        }
    }
}

// ---------------------------------------------------------------------------
// FieldParseWarning – a salary cell that was replaced by 0
// ---------------------------------------------------------------------------

/// Non-fatal: a salary field that did not hold a usable number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseWarning {
    /// 1-based line number in the source text (the header is line 1).
    pub line: u64,
    /// The offending cell, trimmed. Empty when the row was too short.
    pub value: String,
}

impl fmt::Display for FieldParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: salary '{}' is not a number, using 0",
            self.line, self.value
        )
    }
}

// ---------------------------------------------------------------------------
// ParsedDataset – parser output
// ---------------------------------------------------------------------------

/// Rows in input order plus the warnings raised while reading them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDataset {
    pub rows: Vec<RawRow>,
    pub warnings: Vec<FieldParseWarning>,
}

impl ParsedDataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no data rows were found.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Jobs and mean salary for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: String,
    pub total_jobs: usize,
    pub avg_salary_usd: f64,
}

/// How often a job title occurs within one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleCount {
    pub title: String,
    pub count: usize,
}
