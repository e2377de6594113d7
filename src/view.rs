use std::ops::Range;

use crate::data::model::YearSummary;

// ---------------------------------------------------------------------------
// Sorting (display only; the aggregates keep first-occurrence order)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearColumn {
    Year,
    TotalJobs,
    AvgSalary,
}

impl YearColumn {
    pub fn label(self) -> &'static str {
        match self {
            YearColumn::Year => "Year",
            YearColumn::TotalJobs => "Total Jobs",
            YearColumn::AvgSalary => "Average Salary (USD)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSort {
    pub column: YearColumn,
    pub ascending: bool,
}

/// Next sort after a header click: ascending, then descending, then unsorted.
pub fn cycle_sort(current: Option<YearSort>, column: YearColumn) -> Option<YearSort> {
    match current {
        Some(s) if s.column == column && s.ascending => Some(YearSort {
            column,
            ascending: false,
        }),
        Some(s) if s.column == column => None,
        _ => Some(YearSort {
            column,
            ascending: true,
        }),
    }
}

/// Indices into `summaries` in display order. Stable, so ties keep
/// first-occurrence order.
pub fn display_order(summaries: &[YearSummary], sort: Option<YearSort>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..summaries.len()).collect();
    if let Some(sort) = sort {
        order.sort_by(|&a, &b| {
            let (a, b) = (&summaries[a], &summaries[b]);
            let ord = match sort.column {
                YearColumn::Year => a.year.cmp(&b.year),
                YearColumn::TotalJobs => a.total_jobs.cmp(&b.total_jobs),
                YearColumn::AvgSalary => a.avg_salary_usd.total_cmp(&b.avg_salary_usd),
            };
            if sort.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
    order
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Index range of the current page, clamped to `len`.
    pub fn range(&self, len: usize) -> Range<usize> {
        let page = self.page.min(self.page_count(len) - 1);
        let start = (page * self.page_size).min(len);
        start..(start + self.page_size).min(len)
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries() -> Vec<YearSummary> {
        vec![
            YearSummary {
                year: "2023".to_string(),
                total_jobs: 5,
                avg_salary_usd: 150000.0,
            },
            YearSummary {
                year: "2021".to_string(),
                total_jobs: 9,
                avg_salary_usd: 90000.0,
            },
            YearSummary {
                year: "2022".to_string(),
                total_jobs: 5,
                avg_salary_usd: 120000.0,
            },
        ]
    }

    fn years(data: &[YearSummary], sort: Option<YearSort>) -> Vec<String> {
        display_order(data, sort)
            .into_iter()
            .map(|i| data[i].year.clone())
            .collect()
    }

    #[test]
    fn test_unsorted_keeps_first_occurrence() {
        assert_eq!(years(&summaries(), None), ["2023", "2021", "2022"]);
    }

    #[test]
    fn test_sort_by_year() {
        let asc = YearSort {
            column: YearColumn::Year,
            ascending: true,
        };
        assert_eq!(years(&summaries(), Some(asc)), ["2021", "2022", "2023"]);
        let desc = YearSort {
            ascending: false,
            ..asc
        };
        assert_eq!(years(&summaries(), Some(desc)), ["2023", "2022", "2021"]);
    }

    #[test]
    fn test_sort_by_jobs_is_stable() {
        let sort = YearSort {
            column: YearColumn::TotalJobs,
            ascending: true,
        };
        assert_eq!(years(&summaries(), Some(sort)), ["2023", "2022", "2021"]);
    }

    #[test]
    fn test_sort_by_salary() {
        let sort = YearSort {
            column: YearColumn::AvgSalary,
            ascending: false,
        };
        assert_eq!(years(&summaries(), Some(sort)), ["2023", "2022", "2021"]);
    }

    #[test]
    fn test_cycle_sort() {
        let s1 = cycle_sort(None, YearColumn::Year);
        assert_eq!(
            s1,
            Some(YearSort {
                column: YearColumn::Year,
                ascending: true
            })
        );
        let s2 = cycle_sort(s1, YearColumn::Year);
        assert_eq!(s2.map(|s| s.ascending), Some(false));
        assert_eq!(cycle_sort(s2, YearColumn::Year), None);
        assert_eq!(
            cycle_sort(s2, YearColumn::TotalJobs).map(|s| s.column),
            Some(YearColumn::TotalJobs)
        );
    }

    #[test]
    fn test_pager_ranges() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.range(0), 0..0);
        assert_eq!(pager.page_count(25), 3);
        assert_eq!(pager.range(25), 0..10);
        pager.page = 2;
        assert_eq!(pager.range(25), 20..25);
    }

    #[test]
    fn test_pager_clamps_past_end() {
        let pager = Pager {
            page: 7,
            page_size: 10,
        };
        assert_eq!(pager.range(15), 10..15);
    }

    #[test]
    fn test_pager_zero_size_clamped() {
        assert_eq!(Pager::new(0).page_size, 1);
    }
}
