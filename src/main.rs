mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;
mod view;

use std::path::{Path, PathBuf};

use app::SalaryDashApp;
use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let cli_path = std::env::args_os().nth(1).map(PathBuf::from);
    let from_cli = cli_path.is_some();
    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE)).with_cli_path(cli_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(SalaryDashApp::new(&cc.egui_ctx, &config, from_cli)))),
    )
}
