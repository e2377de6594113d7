/// Data layer: core types, CSV parsing, and aggregation.
///
/// Architecture:
/// ```text
///   salaries.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header lookup, rows → ParsedDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  rows → YearSummary per year
///   └───────────┘  rows + year → TitleCount per title
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  aggregates → pretty JSON
///   └──────────┘
/// ```
///
/// Nothing in here knows about egui; the UI reads results through
/// [`crate::state::AppState`].

pub mod aggregate;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
