use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::table::{self, YearTableEvent};
use crate::view::cycle_sort;

/// Menu actions that need more than [`AppState`] to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Load(PathBuf),
    Export(PathBuf),
}

// ---------------------------------------------------------------------------
// Left side panel – summary and drill-down tables
// ---------------------------------------------------------------------------

/// Render the yearly summary table and, when a year is selected, its job titles.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Yearly summary");
    ui.separator();

    match state.dataset() {
        None => {
            ui.label("No data available.");
            return;
        }
        Some(ds) if ds.is_empty() => {
            ui.label("The file has a header but no data rows.");
            return;
        }
        Some(_) => {}
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let event = table::year_table(ui, state.year_table_view());

            match event {
                Some(YearTableEvent::RowClicked(year)) => state.select_year(&year),
                Some(YearTableEvent::HeaderClicked(column)) => {
                    state.set_year_sort(cycle_sort(state.year_sort(), column));
                }
                None => {}
            }

            let Some(year) = state.selected_year().map(str::to_owned) else {
                ui.add_space(6.0);
                ui.weak("Click a year to list its job titles.");
                return;
            };

            ui.add_space(12.0);
            ui.horizontal(|ui: &mut Ui| {
                ui.strong(format!("Job titles for {year}"));
                if ui.small_button("✖").on_hover_text("Clear selection").clicked() {
                    state.clear_selection();
                }
            });
            ui.separator();

            if state.title_counts().is_empty() {
                ui.label(format!("No rows for {year} in the current data."));
            } else {
                let (counts, pager) = state.title_table_view();
                table::title_table(ui, counts, pager);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &AppState) -> Option<MenuAction> {
    let mut action = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                action = open_file_dialog().map(MenuAction::Load);
                ui.close_menu();
            }
            let reload = ui.add_enabled(state.source_path.is_some(), egui::Button::new("Reload"));
            if reload.clicked() {
                action = state.source_path.clone().map(MenuAction::Load);
                ui.close_menu();
            }
            ui.separator();
            let export = ui.add_enabled(
                state.dataset().is_some(),
                egui::Button::new("Export summary…"),
            );
            if export.clicked() {
                action = save_file_dialog().map(MenuAction::Export);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.loading {
            ui.spinner();
        }

        if let Some(ds) = state.dataset() {
            ui.label(format!(
                "{} rows, {} years",
                ds.len(),
                state.year_summaries().len()
            ));
            if !ds.warnings.is_empty() {
                ui.label(
                    RichText::new(format!("{} salaries unreadable (counted as 0)", ds.warnings.len()))
                        .color(Color32::YELLOW),
                )
                .on_hover_text(
                    ds.warnings
                        .iter()
                        .take(20)
                        .map(|w| w.to_string())
                        .collect::<Vec<_>>()
                        .join("\n"),
                );
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    action
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn open_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("CSV", &["csv"])
        .pick_file()
}

fn save_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export summary")
        .add_filter("JSON", &["json"])
        .set_file_name("salary-summary.json")
        .save_file()
}
