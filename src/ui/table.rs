use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::TitleCount;
use crate::state::YearTableView;
use crate::view::{Pager, YearColumn};

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Table widgets
// ---------------------------------------------------------------------------

/// What the user did in the yearly summary table this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearTableEvent {
    RowClicked(String),
    HeaderClicked(YearColumn),
}

/// Render the yearly summary table in its cached display order. Rows are clickable.
pub fn year_table(ui: &mut Ui, view: YearTableView<'_>) -> Option<YearTableEvent> {
    let YearTableView {
        summaries,
        order,
        sort,
        selected_year,
        pager,
    } = view;
    let mut event = None;
    let visible = &order[pager.range(order.len())];

    ui.push_id("year_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .sense(egui::Sense::click())
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                for column in [YearColumn::Year, YearColumn::TotalJobs, YearColumn::AvgSalary] {
                    header.col(|ui: &mut Ui| {
                        let arrow = match sort {
                            Some(s) if s.column == column && s.ascending => " ⏶",
                            Some(s) if s.column == column => " ⏷",
                            _ => "",
                        };
                        let text = format!("{}{arrow}", column.label());
                        if ui
                            .add(egui::Label::new(egui::RichText::new(text).strong()).sense(egui::Sense::click()))
                            .clicked()
                        {
                            event = Some(YearTableEvent::HeaderClicked(column));
                        }
                    });
                }
            })
            .body(|mut body| {
                for &i in visible {
                    let summary = &summaries[i];
                    body.row(ROW_HEIGHT, |mut row| {
                        row.set_selected(selected_year == Some(summary.year.as_str()));
                        row.col(|ui: &mut Ui| {
                            ui.label(&summary.year);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(summary.total_jobs.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format_usd(summary.avg_salary_usd));
                        });
                        if row.response().clicked() {
                            event = Some(YearTableEvent::RowClicked(summary.year.clone()));
                        }
                    });
                }
            });
    });

    pager_controls(ui, pager, order.len());
    event
}

/// Render the job-title drill-down table.
pub fn title_table(ui: &mut Ui, counts: &[TitleCount], pager: &mut Pager) {
    let visible = &counts[pager.range(counts.len())];

    ui.push_id("title_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::remainder().at_least(140.0))
            .column(Column::auto().at_least(50.0))
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("Job Title");
                });
                header.col(|ui: &mut Ui| {
                    ui.strong("Count");
                });
            })
            .body(|mut body| {
                for tc in visible {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(&tc.title);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(tc.count.to_string());
                        });
                    });
                }
            });
    });

    pager_controls(ui, pager, counts.len());
}

/// Prev / next buttons with a page indicator.
fn pager_controls(ui: &mut Ui, pager: &mut Pager, len: usize) {
    let count = pager.page_count(len);
    pager.page = pager.page.min(count - 1);
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(pager.page > 0, egui::Button::new("◀"))
            .clicked()
        {
            pager.page -= 1;
        }
        ui.label(format!("Page {} / {count}", pager.page + 1));
        if ui
            .add_enabled(pager.page + 1 < count, egui::Button::new("▶"))
            .clicked()
        {
            pager.page += 1;
        }
    });
}


/// `123456.789` → `"123,456.79"`.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "0.00");
        assert_eq!(format_usd(999.999), "1,000.00");
        assert_eq!(format_usd(150000.0), "150,000.00");
        assert_eq!(format_usd(1234567.891), "1,234,567.89");
    }
}
