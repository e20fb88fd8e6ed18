use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::bindings::ChartSlot;
use crate::chart::ChartSpec;
use crate::data::filter::SiteFilter;
use crate::state::{AppState, ColorBy};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            site_selector(ui, state);
            ui.separator();
            payload_selector(ui, state);
            ui.separator();
            color_selector(ui, state);
        });
}

fn site_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch Site");

    let current = state.session.filters().site().clone();
    let mut picked: Option<SiteFilter> = None;

    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in state.session.site_options() {
                if ui
                    .selectable_label(current == option.value, option.label.as_str())
                    .clicked()
                {
                    picked = Some(option.value.clone());
                }
            }
        });

    if let Some(site) = picked {
        state.select_site(site);
    }
}

fn payload_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Payload range (Kg)");

    let limit = state.session.payload_limit();
    let step = state.config.payload_step;
    let range = *state.session.filters().payload();
    let (mut low, mut high) = (range.low(), range.high());

    let low_changed = ui
        .add(Slider::new(&mut low, 0.0..=limit).step_by(step).text("min"))
        .changed();
    let high_changed = ui
        .add(Slider::new(&mut high, 0.0..=limit).step_by(step).text("max"))
        .changed();

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for tick in state.config.payload_ticks(limit) {
            ui.small(RichText::new(format!("{tick}")).color(Color32::GRAY));
        }
    });

    if low_changed || high_changed {
        state.set_payload_range(low, high);
    }
}

fn color_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Color points by");
    ui.horizontal(|ui: &mut Ui| {
        for mode in ColorBy::ALL {
            ui.radio_value(&mut state.color_by, mode, mode.label());
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let shown = state
            .session
            .chart(ChartSlot::PayloadScatter)
            .map(|spec| match spec {
                ChartSpec::Scatter(s) => s.points.len(),
                ChartSpec::Pie(_) => 0,
            })
            .unwrap_or(0);
        ui.label(format!(
            "{} launches loaded, {} in scatter",
            state.session.dataset().len(),
            shown
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}
