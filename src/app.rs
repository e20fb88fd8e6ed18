use eframe::egui;

use crate::bindings::ChartSlot;
use crate::config::DashboardConfig;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(config: DashboardConfig, dataset: Dataset) -> Self {
        Self {
            state: AppState::new(config, dataset),
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.state.config.window_title.as_str());
            });
            ui.separator();

            let state = &self.state;
            let height = ((ui.available_height() - 80.0) / 2.0).max(120.0);
            plot::chart_region(ui, state, state.session.chart(ChartSlot::SuccessPie), height);
            ui.separator();
            plot::chart_region(ui, state, state.session.chart(ChartSlot::PayloadScatter), height);
        });
    }
}
