//! Writes a synthetic `salaries.csv` with the same columns as the public
//! data-science salary datasets, for trying the dashboard without real data.
//!
//! Usage: `generate_sample [OUTPUT] [ROWS]` (defaults: `salaries.csv`, 2000).

use anyhow::{Context, Result};

/// Deterministic SplitMix64 generator so every run writes the same file.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (title, base salary in USD)
const TITLES: &[(&str, f64)] = &[
    ("Data Scientist", 125_000.0),
    ("Data Engineer", 118_000.0),
    ("Data Analyst", 82_000.0),
    ("Machine Learning Engineer", 142_000.0),
    ("Research Scientist", 150_000.0),
    ("Analytics Engineer", 110_000.0),
    ("Data Architect", 135_000.0),
    ("Head of Data", 175_000.0),
];

/// (experience level, salary multiplier)
const LEVELS: &[(&str, f64)] = &[("EN", 0.65), ("MI", 0.9), ("SE", 1.15), ("EX", 1.5)];

const YEARS: &[(&str, f64)] = &[("2020", 0.88), ("2021", 0.92), ("2022", 1.0), ("2023", 1.06), ("2024", 1.09)];

const CURRENCIES: &[&str] = &["USD", "USD", "USD", "EUR", "GBP", "INR"];

const REMOTE_RATIOS: &[&str] = &["0", "50", "100"];

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "salaries.csv".to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid row count '{n}'"))?,
        None => 2000,
    };

    let mut rng = SplitMix64(42);
    let mut writer = csv::Writer::from_path(&output).with_context(|| format!("creating {output}"))?;
    writer.write_record([
        "work_year",
        "experience_level",
        "job_title",
        "salary_currency",
        "salary_in_usd",
        "remote_ratio",
    ])?;

    for _ in 0..rows {
        // Later years get more postings.
        let year_idx = (rng.next_f64().sqrt() * YEARS.len() as f64) as usize;
        let (year, year_factor) = YEARS[year_idx.min(YEARS.len() - 1)];
        let (title, base) = *rng.pick(TITLES);
        let (level, level_factor) = *rng.pick(LEVELS);
        let noise = 0.8 + rng.next_f64() * 0.4;
        let salary = (base * level_factor * year_factor * noise).round().to_string();
        let currency = *rng.pick(CURRENCIES);
        let remote = *rng.pick(REMOTE_RATIOS);

        writer.write_record([year, level, title, currency, salary.as_str(), remote])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} salary records to {output}");
    Ok(())
}
