use std::path::Path;

use csv::ByteRecord;

use super::error::DataError;
use super::model::{FieldParseWarning, ParsedDataset, RawRow};

/// Header names the dashboard needs. Field order in the file is free.
pub const YEAR_COLUMN: &str = "work_year";
pub const TITLE_COLUMN: &str = "job_title";
pub const SALARY_COLUMN: &str = "salary_in_usd";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse a salary CSV from disk.
///
/// Only I/O failures are reported as [`DataError::Fetch`]; the bytes are
/// handed to [`parse_bytes`] as they are.
pub fn load_file(path: &Path) -> Result<ParsedDataset, DataError> {
    let bytes = std::fs::read(path).map_err(|source| DataError::Fetch {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bytes(&bytes)
}

/// Parse salary CSV text into rows, in input order.
pub fn parse_csv(text: &str) -> Result<ParsedDataset, DataError> {
    parse_bytes(text.as_bytes())
}

/// Parse salary CSV bytes into rows, in input order.
///
/// The header row must contain [`YEAR_COLUMN`], [`TITLE_COLUMN`] and
/// [`SALARY_COLUMN`]; otherwise nothing is returned but a
/// [`DataError::Schema`]. Blank lines are skipped. Cells that are not valid
/// UTF-8 are decoded lossily (U+FFFD). A salary cell that is not a finite,
/// non-negative number becomes `0.0` and is reported as a
/// [`FieldParseWarning`] instead of failing the whole file.
pub fn parse_bytes(data: &[u8]) -> Result<ParsedDataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let columns = ColumnIndex::resolve(reader.byte_headers()?)?;

    let mut dataset = ParsedDataset::default();
    for result in reader.byte_records() {
        let record = result?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let salary_cell = cell(&record, columns.salary);
        let salary_usd = match parse_salary(&salary_cell) {
            Some(v) => v,
            None => {
                let warning = FieldParseWarning {
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    value: salary_cell,
                };
                log::warn!("{warning}");
                dataset.warnings.push(warning);
                0.0
            }
        };

        dataset.rows.push(RawRow::new(
            cell(&record, columns.year),
            cell(&record, columns.title),
            salary_usd,
        ));
    }

    log::debug!(
        "parsed {} rows ({} salary warnings)",
        dataset.rows.len(),
        dataset.warnings.len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Positions of the required columns in the header record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    year: usize,
    title: usize,
    salary: usize,
}

impl ColumnIndex {
    fn resolve(headers: &ByteRecord) -> Result<Self, DataError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column.as_bytes())
                .ok_or(DataError::Schema { column })
        };
        Ok(Self {
            year: find(YEAR_COLUMN)?,
            title: find(TITLE_COLUMN)?,
            salary: find(SALARY_COLUMN)?,
        })
    }
}

/// Field `idx` as text; missing fields are empty.
fn cell(record: &ByteRecord, idx: usize) -> String {
    record
        .get(idx)
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default()
}

fn parse_salary(cell: &str) -> Option<f64> {
    cell.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
