use std::collections::HashMap;

use super::model::{RawRow, TitleCount, YearSummary};

// ---------------------------------------------------------------------------
// Yearly aggregation
// ---------------------------------------------------------------------------

/// Running totals for one year before the mean is taken.
struct YearAccumulator<'a> {
    year: &'a str,
    total_jobs: usize,
    sum_salary: f64,
}

/// Group `rows` by year: job count and mean salary per distinct year.
///
/// Years appear in the order they are first seen in `rows`.
pub fn summarize_by_year(rows: &[RawRow]) -> Vec<YearSummary> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut accumulators: Vec<YearAccumulator<'_>> = Vec::new();

    for row in rows {
        match slots.get(row.year.as_str()) {
            Some(&i) => {
                let acc = &mut accumulators[i];
                acc.total_jobs += 1;
                acc.sum_salary += row.salary_usd;
            }
            None => {
                slots.insert(&row.year, accumulators.len());
                accumulators.push(YearAccumulator {
                    year: &row.year,
                    total_jobs: 1,
                    sum_salary: row.salary_usd,
                });
            }
        }
    }

    // Every accumulator was created by a row, so total_jobs >= 1.
    accumulators
        .into_iter()
        .map(|acc| YearSummary {
            year: acc.year.to_string(),
            total_jobs: acc.total_jobs,
            avg_salary_usd: acc.sum_salary / acc.total_jobs as f64,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Drill-down: title counts for one year
// ---------------------------------------------------------------------------

/// Count job titles among the rows whose year equals `year` exactly.
///
/// Titles appear in first-seen order. An unknown year gives an empty result.
pub fn title_counts_for_year(rows: &[RawRow], year: &str) -> Vec<TitleCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TitleCount> = Vec::new();

    for row in rows.iter().filter(|r| r.year == year) {
        match slots.get(row.title.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                slots.insert(&row.title, counts.len());
                counts.push(TitleCount {
                    title: row.title.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}
