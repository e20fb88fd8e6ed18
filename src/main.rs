use std::process::ExitCode;

use anyhow::Context;
use eframe::egui;
use launch_dash::app::LaunchDashApp;
use launch_dash::config::DashboardConfig;
use launch_dash::data::loader::load_file;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = DashboardConfig::default();

    // A bad dataset is fatal: no window is opened.
    let dataset = load_file(&config.data_file).with_context(|| {
        format!("loading launch records from {}", config.data_file.display())
    })?;
    log::info!(
        "Loaded {} launch records, {} sites, payload {}..={} kg",
        dataset.len(),
        dataset.distinct_sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(config, dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
