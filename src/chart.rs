use crate::data::aggregate::{payload_success_rows, success_failure_counts};
use crate::data::filter::{FilterState, SiteFilter};
use crate::data::model::{COL_PAYLOAD_MASS, Dataset, Outcome};

pub const SCATTER_Y_LABEL: &str = "Launch Success (1=Success, 0=Failure)";

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------

/// What a chart region displays.  Produced by the builders below and drawn
/// by `ui::plot`; nothing else interprets it.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }

    /// Whether the chart should render its "no data" state.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Pie(pie) => pie.is_empty(),
            ChartSpec::Scatter(scatter) => scatter.points.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub outcome: Outcome,
    pub value: usize,
}

/// Failure vs success proportions.  Slices are always `[Failure, Success]`,
/// labelled from their outcome, including zero-valued ones.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of `outcome` in `0.0..=1.0`; zero for an empty chart.
    pub fn fraction(&self, outcome: Outcome) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let value: usize = self
            .slices
            .iter()
            .filter(|s| s.outcome == outcome)
            .map(|s| s.value)
            .sum();
        value as f64 / total as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub launch_site: String,
}

/// Payload mass (x) against outcome class (y).
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Pie chart of outcomes for the selected site.  Reads only the site filter.
pub fn success_pie(dataset: &Dataset, filters: &FilterState) -> ChartSpec {
    let site = filters.site();
    let counts = success_failure_counts(dataset, site);

    ChartSpec::Pie(PieChart {
        title: format!("Launch Success vs Failure for {site}"),
        slices: Outcome::ALL
            .into_iter()
            .map(|outcome| PieSlice {
                outcome,
                value: counts.count(outcome),
            })
            .collect(),
    })
}

/// Scatter of payload against outcome for the selected site and payload range.
pub fn payload_scatter(dataset: &Dataset, filters: &FilterState) -> ChartSpec {
    let site = filters.site();
    let rows = payload_success_rows(dataset, site, filters.payload());

    ChartSpec::Scatter(ScatterChart {
        title: scatter_title(site),
        x_label: COL_PAYLOAD_MASS.to_string(),
        y_label: SCATTER_Y_LABEL.to_string(),
        points: rows
            .into_iter()
            .map(|r| ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                outcome: r.outcome,
                launch_site: r.launch_site.clone(),
            })
            .collect(),
    })
}

fn scatter_title(site: &SiteFilter) -> String {
    format!("Payload vs Launch Success for {site}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::PayloadRange;
    use crate::data::model::LaunchRecord;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success),
            LaunchRecord::new("A", 700.0, Outcome::Success),
            LaunchRecord::new("B", 900.0, Outcome::Failure),
        ])
        .unwrap()
    }

    fn pie(spec: ChartSpec) -> PieChart {
        match spec {
            ChartSpec::Pie(pie) => pie,
            other => panic!("expected pie chart, got {other:?}"),
        }
    }

    fn scatter(spec: ChartSpec) -> ScatterChart {
        match spec {
            ChartSpec::Scatter(scatter) => scatter,
            other => panic!("expected scatter chart, got {other:?}"),
        }
    }

    #[test]
    fn pie_labels_come_from_outcomes() {
        let ds = dataset();
        let mut filters = FilterState::new(&ds);
        filters
            .select_site(&ds, SiteFilter::Site("A".into()))
            .unwrap();

        let chart = pie(success_pie(&ds, &filters));
        assert_eq!(chart.title, "Launch Success vs Failure for A");
        // Single-outcome selection keeps both slices in fixed order.
        assert_eq!(
            chart.slices,
            vec![
                PieSlice { outcome: Outcome::Failure, value: 0 },
                PieSlice { outcome: Outcome::Success, value: 2 },
            ]
        );
        assert_eq!(chart.fraction(Outcome::Success), 1.0);
    }

    #[test]
    fn pie_for_all_sites() {
        let ds = dataset();
        let chart = pie(success_pie(&ds, &FilterState::new(&ds)));
        assert_eq!(chart.title, "Launch Success vs Failure for All Sites");
        assert_eq!(chart.total(), 3);
        assert!((chart.fraction(Outcome::Failure) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn scatter_follows_site_and_payload() {
        let ds = dataset();
        let mut filters = FilterState::new(&ds);
        filters
            .set_payload_range(PayloadRange::new(600.0, 1000.0).unwrap(), 10_000.0)
            .unwrap();

        let chart = scatter(payload_scatter(&ds, &filters));
        assert_eq!(chart.title, "Payload vs Launch Success for All Sites");
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, SCATTER_Y_LABEL);
        let masses: Vec<f64> = chart.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, [700.0, 900.0]);
    }

    #[test]
    fn empty_selection_renders_empty_state() {
        let ds = dataset();
        let mut filters = FilterState::new(&ds);
        filters
            .set_payload_range(PayloadRange::new(1000.0, 2000.0).unwrap(), 10_000.0)
            .unwrap();

        let spec = payload_scatter(&ds, &filters);
        assert!(spec.is_empty());
        assert_eq!(spec.title(), "Payload vs Launch Success for All Sites");

        let empty_pie = PieChart {
            title: String::new(),
            slices: Vec::new(),
        };
        assert!(empty_pie.is_empty());
        assert_eq!(empty_pie.fraction(Outcome::Success), 0.0);
    }
}
