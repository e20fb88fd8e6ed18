use std::path::Path;
use std::sync::Arc;

use crate::color::SiteColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::SiteFilter;
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// How scatter points are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorBy {
    #[default]
    Outcome,
    LaunchSite,
}

impl ColorBy {
    pub const ALL: [ColorBy; 2] = [ColorBy::Outcome, ColorBy::LaunchSite];

    pub fn label(self) -> &'static str {
        match self {
            ColorBy::Outcome => "Outcome",
            ColorBy::LaunchSite => "Launch site",
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Filter state and displayed charts for the loaded dataset.
    pub session: Session,

    /// Colouring of the scatter chart.
    pub color_by: ColorBy,

    /// Per-site colours, rebuilt with each dataset.
    pub site_colors: SiteColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig, dataset: Dataset) -> Self {
        let dataset = Arc::new(dataset);
        let site_colors = SiteColorMap::new(dataset.distinct_sites());
        let session = Session::new(dataset, &config);
        Self {
            config,
            session,
            color_by: ColorBy::default(),
            site_colors,
            status_message: None,
        }
    }

    /// Start a fresh session on a newly loaded dataset.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let dataset = Arc::new(dataset);
        self.site_colors = SiteColorMap::new(dataset.distinct_sites());
        self.session = Session::new(dataset, &self.config);
        self.status_message = None;
    }

    /// Load `path` and switch to it.  On failure the current session stays.
    pub fn open_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launch records from {} ({} sites)",
                    dataset.len(),
                    path.display(),
                    dataset.distinct_sites().len()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Forward a dropdown selection to the session.
    pub fn select_site(&mut self, site: SiteFilter) {
        match self.session.select_site(site) {
            Ok(_) => self.status_message = None,
            Err(e) => {
                log::warn!("Rejected site selection: {e}");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Forward a payload selector change to the session.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        match self.session.set_payload_range(low, high) {
            Ok(_) => self.status_message = None,
            Err(e) => {
                log::warn!("Rejected payload range: {e}");
                self.status_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn state() -> AppState {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success),
            LaunchRecord::new("B", 900.0, Outcome::Failure),
        ])
        .unwrap();
        AppState::new(DashboardConfig::default(), dataset)
    }

    #[test]
    fn rejected_input_sets_status_message() {
        let mut state = state();
        state.set_payload_range(900.0, 100.0);
        assert!(state.status_message.as_deref().unwrap().contains("inverted"));

        state.set_payload_range(100.0, 900.0);
        assert!(state.status_message.is_none());
        assert_eq!(state.session.filters().payload().low(), 100.0);
    }

    #[test]
    fn failed_open_keeps_current_session() {
        let mut state = state();
        state.select_site(SiteFilter::Site("A".into()));

        let dir = tempfile::tempdir().unwrap();
        state.open_path(&dir.path().join("missing.csv"));
        assert!(state.status_message.is_some());
        assert_eq!(state.session.filters().site(), &SiteFilter::Site("A".into()));
    }

    #[test]
    fn successful_open_starts_fresh_session() {
        let mut state = state();
        state.select_site(SiteFilter::Site("A".into()));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"Launch Site,Payload Mass (kg),class\nX,100,1\nY,200,0\nX,300,1\n")
            .unwrap();

        state.open_path(&path);
        assert!(state.status_message.is_none());
        assert_eq!(state.session.dataset().len(), 3);
        assert_eq!(state.session.filters().site(), &SiteFilter::All);
        assert_eq!(state.session.dataset().distinct_sites(), &["X", "Y"]);
    }
}
