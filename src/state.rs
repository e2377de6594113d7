use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::data::aggregate::{summarize_by_year, title_counts_for_year};
use crate::data::error::DataError;
use crate::data::model::{ParsedDataset, TitleCount, YearSummary};
use crate::view::{display_order, Pager, YearColumn, YearSort};

// ---------------------------------------------------------------------------
// Load tickets
// ---------------------------------------------------------------------------

/// Identifies one load request. Only the most recent ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Everything the summary table needs, borrowed from [`AppState`] at once.
pub struct YearTableView<'a> {
    pub summaries: &'a [YearSummary],
    /// Indices into `summaries`, in display order.
    pub order: &'a [usize],
    pub sort: Option<YearSort>,
    pub selected_year: Option<&'a str>,
    pub pager: &'a mut Pager,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Aggregates are cached here and rebuilt only when the rows or the selected
/// year change, so the render loop can read them every frame for free.
pub struct AppState {
    /// Loaded rows (None until a file loads successfully).
    dataset: Option<ParsedDataset>,

    /// Per-year aggregate of `dataset`, first-occurrence order.
    year_summaries: Vec<YearSummary>,

    /// Display order of `year_summaries`, rebuilt with them or with `year_sort`.
    display_order: Vec<usize>,

    /// Display order of the summary table; `None` keeps first-occurrence.
    year_sort: Option<YearSort>,

    /// Year chosen by clicking a row in the summary table.
    selected_year: Option<String>,

    /// Title counts for `selected_year` (empty when nothing is selected).
    title_counts: Vec<TitleCount>,

    /// Generation of the most recent load request.
    load_generation: u64,

    /// File the current (or pending) data comes from.
    pub source_path: Option<PathBuf>,

    /// Error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    pub year_pager: Pager,
    pub title_pager: Pager,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            dataset: None,
            year_summaries: Vec::new(),
            display_order: Vec::new(),
            selected_year: None,
            title_counts: Vec::new(),
            load_generation: 0,
            source_path: None,
            status_message: None,
            loading: false,
            year_sort: config.sort_years_ascending.map(|ascending| YearSort {
                column: YearColumn::Year,
                ascending,
            }),
            year_pager: Pager::new(config.page_size),
            title_pager: Pager::new(config.page_size),
        }
    }

    // -- Read accessors --

    pub fn dataset(&self) -> Option<&ParsedDataset> {
        self.dataset.as_ref()
    }

    pub fn year_summaries(&self) -> &[YearSummary] {
        &self.year_summaries
    }

    pub fn selected_year(&self) -> Option<&str> {
        self.selected_year.as_deref()
    }

    /// Summaries in display order.
    pub fn ordered_summaries(&self) -> impl Iterator<Item = &YearSummary> + '_ {
        self.display_order.iter().map(|&i| &self.year_summaries[i])
    }

    pub fn year_sort(&self) -> Option<YearSort> {
        self.year_sort
    }

    /// Change the table order; the aggregates themselves are untouched.
    pub fn set_year_sort(&mut self, sort: Option<YearSort>) {
        self.year_sort = sort;
        self.display_order = display_order(&self.year_summaries, sort);
    }

    pub fn year_table_view(&mut self) -> YearTableView<'_> {
        YearTableView {
            summaries: &self.year_summaries,
            order: &self.display_order,
            sort: self.year_sort,
            selected_year: self.selected_year.as_deref(),
            pager: &mut self.year_pager,
        }
    }

    /// Drill-down rows together with their pager.
    pub fn title_table_view(&mut self) -> (&[TitleCount], &mut Pager) {
        (&self.title_counts, &mut self.title_pager)
    }

    /// Drill-down for the selected year; empty when no year is selected.
    pub fn title_counts(&self) -> &[TitleCount] {
        &self.title_counts
    }

    // -- Data --

    /// Ingest a newly parsed dataset and rebuild every aggregate.
    ///
    /// An existing selection is kept; if the new data has no rows for that
    /// year the drill-down is simply empty.
    pub fn set_dataset(&mut self, dataset: ParsedDataset) {
        self.year_summaries = summarize_by_year(&dataset.rows);
        self.display_order = display_order(&self.year_summaries, self.year_sort);
        self.dataset = Some(dataset);
        self.refresh_title_counts();
        self.year_pager.reset();
        self.status_message = None;
    }

    /// Drop all data, e.g. after a failed load.
    pub fn clear_dataset(&mut self) {
        self.dataset = None;
        self.year_summaries.clear();
        self.display_order.clear();
        self.title_counts.clear();
        self.year_pager.reset();
        self.title_pager.reset();
    }

    // -- Selection --

    /// Select a year for the drill-down table.
    pub fn select_year(&mut self, year: &str) {
        if self.selected_year.as_deref() == Some(year) {
            return;
        }
        self.selected_year = Some(year.to_string());
        self.refresh_title_counts();
    }

    pub fn clear_selection(&mut self) {
        self.selected_year = None;
        self.refresh_title_counts();
    }

    fn refresh_title_counts(&mut self) {
        self.title_counts = match (&self.dataset, &self.selected_year) {
            (Some(ds), Some(year)) => title_counts_for_year(&ds.rows, year),
            _ => Vec::new(),
        };
        self.title_pager.reset();
    }

    // -- Loading --

    /// Register a new load request; any request still in flight is superseded.
    pub fn begin_load(&mut self, path: PathBuf) -> LoadTicket {
        self.load_generation += 1;
        self.loading = true;
        self.source_path = Some(path);
        LoadTicket(self.load_generation)
    }

    /// Apply the result of a load request.
    ///
    /// Returns `false` (and changes nothing) when `ticket` has been superseded
    /// by a later [`AppState::begin_load`].
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ParsedDataset, DataError>,
    ) -> bool {
        if ticket.0 != self.load_generation {
            log::debug!(
                "discarding stale load {} (current {})",
                ticket.0,
                self.load_generation
            );
            return false;
        }
        self.loading = false;

        match result {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows from {:?} ({} salary warnings)",
                    dataset.len(),
                    self.source_path,
                    dataset.warnings.len()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load data: {e}");
                self.clear_dataset();
                self.status_message = Some(format!("No data available: {e}"));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;
    use crate::data::model::RawRow;

    fn dataset(rows: Vec<RawRow>) -> ParsedDataset {
        ParsedDataset {
            rows,
            warnings: Vec::new(),
        }
    }

    fn engineers_and_analyst() -> ParsedDataset {
        parse_csv(
            "work_year,job_title,salary_in_usd\n\
             2022,Engineer,100000\n\
             2022,Engineer,200000\n\
             2023,Analyst,abc\n",
        )
        .unwrap()
    }

    #[test]
    fn test_default_has_no_selection_and_no_drill_down() {
        let mut state = AppState::default();
        state.set_dataset(engineers_and_analyst());
        assert_eq!(state.selected_year(), None);
        assert!(state.title_counts().is_empty());
        assert_eq!(
            state.year_summaries(),
            &[
                YearSummary {
                    year: "2022".to_string(),
                    total_jobs: 2,
                    avg_salary_usd: 150000.0,
                },
                YearSummary {
                    year: "2023".to_string(),
                    total_jobs: 1,
                    avg_salary_usd: 0.0,
                },
            ]
        );
        assert_eq!(state.dataset().unwrap().warnings.len(), 1);
    }

    #[test]
    fn test_select_year_builds_drill_down() {
        let mut state = AppState::default();
        state.set_dataset(engineers_and_analyst());
        state.select_year("2022");

        assert_eq!(state.selected_year(), Some("2022"));
        assert_eq!(
            state.title_counts(),
            &[TitleCount {
                title: "Engineer".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn test_changing_selection_recomputes() {
        let mut state = AppState::default();
        state.set_dataset(engineers_and_analyst());
        state.select_year("2022");
        state.select_year("2023");
        assert_eq!(state.title_counts()[0].title, "Analyst");

        state.clear_selection();
        assert!(state.title_counts().is_empty());
    }

    #[test]
    fn test_reselecting_same_year_keeps_page() {
        let mut state = AppState::default();
        state.set_dataset(engineers_and_analyst());
        state.select_year("2022");
        state.title_pager.page = 3;
        state.select_year("2022");
        assert_eq!(state.title_pager.page, 3);
    }

    #[test]
    fn test_stale_selection_after_reload_is_empty() {
        let mut state = AppState::default();
        state.set_dataset(engineers_and_analyst());
        state.select_year("2023");

        state.set_dataset(dataset(vec![RawRow::new("2024", "Engineer", 1.0)]));
        assert_eq!(state.selected_year(), Some("2023"));
        assert!(state.title_counts().is_empty());
    }

    #[test]
    fn test_reload_refreshes_drill_down_for_kept_selection() {
        let mut state = AppState::default();
        state.set_dataset(engineers_and_analyst());
        state.select_year("2022");

        state.set_dataset(dataset(vec![
            RawRow::new("2022", "Manager", 1.0),
            RawRow::new("2022", "Manager", 2.0),
        ]));
        assert_eq!(
            state.title_counts(),
            &[TitleCount {
                title: "Manager".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn test_header_only_data_gives_empty_aggregates() {
        let mut state = AppState::default();
        state.set_dataset(parse_csv("work_year,job_title,salary_in_usd\n").unwrap());
        state.select_year("2022");
        assert!(state.year_summaries().is_empty());
        assert!(state.title_counts().is_empty());
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let mut state = AppState::default();
        let first = state.begin_load(PathBuf::from("old.csv"));
        let second = state.begin_load(PathBuf::from("new.csv"));

        assert!(state.finish_load(
            second,
            Ok(dataset(vec![RawRow::new("2024", "Engineer", 5.0)]))
        ));
        assert!(!state.finish_load(
            first,
            Ok(dataset(vec![RawRow::new("1999", "Clerk", 1.0)]))
        ));

        assert_eq!(state.year_summaries()[0].year, "2024");
        assert!(!state.loading);
    }

    #[test]
    fn test_older_result_arriving_first_is_ignored() {
        let mut state = AppState::default();
        let first = state.begin_load(PathBuf::from("old.csv"));
        let second = state.begin_load(PathBuf::from("new.csv"));

        assert!(!state.finish_load(first, Ok(engineers_and_analyst())));
        assert!(state.loading);
        assert!(state.dataset().is_none());

        assert!(state.finish_load(second, Ok(engineers_and_analyst())));
        assert!(!state.loading);
        assert!(state.dataset().is_some());
    }

    #[test]
    fn test_failed_load_clears_data_and_reports() {
        let mut state = AppState::default();
        state.set_dataset(engineers_and_analyst());
        state.select_year("2022");

        let ticket = state.begin_load(PathBuf::from("broken.csv"));
        state.finish_load(
            ticket,
            Err(DataError::Schema {
                column: "job_title",
            }),
        );

        assert!(state.dataset().is_none());
        assert!(state.year_summaries().is_empty());
        assert!(state.title_counts().is_empty());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.starts_with("No data available"));
        assert!(msg.contains("job_title"));
    }

    #[test]
    fn test_successful_load_clears_previous_error() {
        let mut state = AppState::default();
        state.status_message = Some("No data available: boom".to_string());
        let ticket = state.begin_load(PathBuf::from("ok.csv"));
        state.finish_load(ticket, Ok(engineers_and_analyst()));
        assert!(state.status_message.is_none());
    }

    fn ordered_years(state: &AppState) -> Vec<String> {
        state.ordered_summaries().map(|s| s.year.clone()).collect()
    }

    #[test]
    fn test_display_order_follows_sort_without_touching_aggregates() {
        let mut state = AppState::default();
        state.set_dataset(dataset(vec![
            RawRow::new("2023", "A", 1.0),
            RawRow::new("2021", "A", 1.0),
            RawRow::new("2022", "A", 1.0),
        ]));
        assert_eq!(ordered_years(&state), ["2023", "2021", "2022"]);

        state.set_year_sort(Some(YearSort {
            column: YearColumn::Year,
            ascending: true,
        }));
        assert_eq!(ordered_years(&state), ["2021", "2022", "2023"]);
        assert_eq!(state.year_summaries()[0].year, "2023");

        state.set_year_sort(None);
        assert_eq!(ordered_years(&state), ["2023", "2021", "2022"]);
    }

    #[test]
    fn test_display_order_rebuilt_on_reload() {
        let config = DashboardConfig {
            sort_years_ascending: Some(true),
            ..DashboardConfig::default()
        };
        let mut state = AppState::new(&config);
        state.set_dataset(engineers_and_analyst());
        state.set_dataset(dataset(vec![
            RawRow::new("2025", "A", 1.0),
            RawRow::new("2024", "A", 1.0),
        ]));
        assert_eq!(ordered_years(&state), ["2024", "2025"]);

        let view = state.year_table_view();
        assert_eq!(view.order, &[1usize, 0]);
    }

    #[test]
    fn test_config_sort_applied() {
        let config = DashboardConfig {
            sort_years_ascending: Some(false),
            ..DashboardConfig::default()
        };
        let state = AppState::new(&config);
        assert_eq!(
            state.year_sort(),
            Some(YearSort {
                column: YearColumn::Year,
                ascending: false
            })
        );
    }
}
