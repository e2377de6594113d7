use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::error::DataError;
use crate::data::export::{DrillDown, SummaryExport};
use crate::data::loader;
use crate::data::model::ParsedDataset;
use crate::state::{AppState, LoadTicket};
use crate::ui::panels::{self, MenuAction};
use crate::ui::plot;

type LoadMessage = (LoadTicket, Result<ParsedDataset, DataError>);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryDashApp {
    pub state: AppState,
    load_tx: Sender<LoadMessage>,
    load_rx: Receiver<LoadMessage>,
}

impl SalaryDashApp {
    pub fn new(ctx: &egui::Context, config: &DashboardConfig, from_cli: bool) -> Self {
        let (load_tx, load_rx) = mpsc::channel();
        let mut app = Self {
            state: AppState::new(config),
            load_tx,
            load_rx,
        };

        // An explicit path is always attempted so a typo is reported;
        // the configured default only when it is actually there.
        if from_cli || config.data_path.exists() {
            app.start_load(ctx, config.data_path.clone());
        } else {
            log::info!(
                "{} not found, waiting for File → Open",
                config.data_path.display()
            );
        }
        app
    }

    /// Read and parse `path` off the UI thread.
    fn start_load(&mut self, ctx: &egui::Context, path: PathBuf) {
        let ticket = self.state.begin_load(path.clone());
        let tx = self.load_tx.clone();
        let ctx = ctx.clone();
        log::info!("Loading {}", path.display());

        std::thread::spawn(move || {
            let result = loader::load_file(&path);
            // The receiver only goes away when the app is closing.
            let _ = tx.send((ticket, result));
            ctx.request_repaint();
        });
    }

    /// Apply every finished load; superseded ones are dropped by the state.
    fn poll_loads(&mut self) {
        while let Ok((ticket, result)) = self.load_rx.try_recv() {
            self.state.finish_load(ticket, result);
        }
    }

    fn export(&mut self, path: &Path) {
        let state = &self.state;
        let export = SummaryExport {
            source: state.source_path.as_ref().map(|p| p.display().to_string()),
            years: state.year_summaries(),
            drill_down: state.selected_year().map(|year| DrillDown {
                year,
                titles: state.title_counts(),
            }),
        };
        if let Err(e) = export.write_to(path) {
            log::error!("Export failed: {e}");
            self.state.status_message = Some(format!("Export failed: {e}"));
        }
    }
}

impl eframe::App for SalaryDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        // ---- Top panel: menu bar ----
        let action = egui::TopBottomPanel::top("top_bar")
            .show(ctx, |ui| panels::top_bar(ui, &self.state))
            .inner;

        match action {
            Some(MenuAction::Load(path)) => self.start_load(ctx, path),
            Some(MenuAction::Export(path)) => self.export(&path),
            None => {}
        }

        // ---- Left side panel: tables ----
        egui::SidePanel::left("table_panel")
            .default_width(380.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: trend chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::trend_plot(ui, &self.state);
        });
    }
}
