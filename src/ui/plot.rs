use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::chart::{ChartSpec, PieChart, ScatterChart};
use crate::color::{outcome_color, SiteColorMap};
use crate::data::model::Outcome;
use crate::state::{AppState, ColorBy};

/// Arc segments per full turn of the pie.
const PIE_RESOLUTION: usize = 96;

const NO_DATA: &str = "No data for the current selection";

// ---------------------------------------------------------------------------
// Chart regions (central panel)
// ---------------------------------------------------------------------------

/// Draw whatever chart the session currently holds for a region.
pub fn chart_region(ui: &mut Ui, state: &AppState, spec: Option<&ChartSpec>, height: f32) {
    let Some(spec) = spec else {
        ui.label("Chart not rendered yet.");
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(spec.title());
    });

    match spec {
        ChartSpec::Pie(pie) => pie_chart(ui, pie, height),
        ChartSpec::Scatter(scatter) => scatter_chart(
            ui,
            scatter,
            state.color_by,
            &state.site_colors,
            state.session.payload_limit(),
            height,
        ),
    }
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, pie: &PieChart, height: f32) {
    Plot::new("success_pie_chart")
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            if pie.is_empty() {
                plot_ui.text(Text::new(PlotPoint::new(0.0, 0.0), RichText::new(NO_DATA).strong()));
                return;
            }

            // Clockwise from twelve o'clock.
            let mut start = FRAC_PI_2;
            for slice in &pie.slices {
                let fraction = pie.fraction(slice.outcome);
                if fraction <= 0.0 {
                    continue;
                }
                let sweep = fraction * TAU;
                let color = outcome_color(slice.outcome);
                let name = format!("{} ({})", slice.outcome, slice.value);

                for wedge in wedges(start, sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(wedge))
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE))
                            .name(&name),
                    );
                }

                let mid = start - sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                    RichText::new(format!("{:.1}%", fraction * 100.0))
                        .strong()
                        .color(label_color(slice.outcome)),
                ));

                start -= sweep;
            }
        });
}

/// Split a pie slice into convex pieces of at most a quarter turn each,
/// since polygon fill only handles convex shapes.
fn wedges(start: f64, sweep: f64) -> Vec<Vec<[f64; 2]>> {
    let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let piece_sweep = sweep / pieces as f64;
    let segments = ((PIE_RESOLUTION as f64 * piece_sweep / TAU).ceil() as usize).max(1);

    (0..pieces)
        .map(|p| {
            let from = start - p as f64 * piece_sweep;
            let mut points = Vec::with_capacity(segments + 2);
            points.push([0.0, 0.0]);
            for s in 0..=segments {
                let angle = from - piece_sweep * s as f64 / segments as f64;
                points.push([angle.cos(), angle.sin()]);
            }
            points
        })
        .collect()
}

fn label_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Failure => Color32::WHITE,
        Outcome::Success => Color32::BLACK,
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn scatter_chart(
    ui: &mut Ui,
    scatter: &ScatterChart,
    color_by: ColorBy,
    site_colors: &SiteColorMap,
    payload_limit: f64,
    height: f32,
) {
    Plot::new("success_payload_scatter_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label(scatter.x_label.as_str())
        .y_axis_label(scatter.y_label.as_str())
        .include_x(0.0)
        .include_x(payload_limit)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if scatter.points.is_empty() {
                plot_ui.text(Text::new(
                    PlotPoint::new(payload_limit / 2.0, 0.5),
                    RichText::new(NO_DATA).strong(),
                ));
                return;
            }

            for (name, color, points) in series(scatter, color_by, site_colors) {
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(name)
                        .color(color)
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}

/// Group scatter points into one legend series per colour key, keeping
/// first-appearance order.
fn series(
    scatter: &ScatterChart,
    color_by: ColorBy,
    site_colors: &SiteColorMap,
) -> Vec<(String, Color32, Vec<[f64; 2]>)> {
    let mut groups: Vec<(String, Color32, Vec<[f64; 2]>)> = Vec::new();

    for point in &scatter.points {
        let (name, color) = match color_by {
            ColorBy::Outcome => (
                format!("{} ({})", point.outcome, point.outcome.class()),
                outcome_color(point.outcome),
            ),
            ColorBy::LaunchSite => (
                point.launch_site.clone(),
                site_colors.color_for(&point.launch_site),
            ),
        };
        let xy = [point.payload_mass_kg, point.outcome.class()];
        match groups.iter_mut().find(|(n, _, _)| *n == name) {
            Some((_, _, pts)) => pts.push(xy),
            None => groups.push((name, color, vec![xy])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ScatterPoint;

    fn point(site: &str, mass: f64, outcome: Outcome) -> ScatterPoint {
        ScatterPoint {
            payload_mass_kg: mass,
            outcome,
            launch_site: site.to_string(),
        }
    }

    #[test]
    fn wedges_stay_within_a_quarter_turn() {
        let full = wedges(FRAC_PI_2, TAU);
        assert_eq!(full.len(), 4);

        let small = wedges(FRAC_PI_2, 0.3);
        assert_eq!(small.len(), 1);
        let first = small[0][1];
        assert!((first[0] - 0.0).abs() < 1e-12 && (first[1] - 1.0).abs() < 1e-12);
        assert!(small[0].iter().all(|p| (p[0].hypot(p[1]) - 1.0).abs() < 1e-9 || *p == [0.0, 0.0]));
    }

    #[test]
    fn series_group_by_color_key() {
        let scatter = ScatterChart {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            points: vec![
                point("A", 100.0, Outcome::Success),
                point("B", 200.0, Outcome::Failure),
                point("A", 300.0, Outcome::Failure),
            ],
        };
        let colors = SiteColorMap::new(&["A".to_string(), "B".to_string()]);

        let by_outcome = series(&scatter, ColorBy::Outcome, &colors);
        let names: Vec<&str> = by_outcome.iter().map(|(n, _, _)| n.as_str()).collect();
        assert_eq!(names, ["Success (1)", "Failure (0)"]);
        assert_eq!(by_outcome[1].2, vec![[200.0, 0.0], [300.0, 0.0]]);

        let by_site = series(&scatter, ColorBy::LaunchSite, &colors);
        assert_eq!(by_site.len(), 2);
        assert_eq!(by_site[0].0, "A");
        assert_eq!(by_site[0].2, vec![[100.0, 1.0], [300.0, 0.0]]);
    }
}
