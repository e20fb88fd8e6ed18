use std::sync::Arc;

use crate::bindings::{ChartSlot, Charts, FilterChange, RenderBindings};
use crate::chart::ChartSpec;
use crate::config::DashboardConfig;
use crate::data::filter::{FilterError, FilterState, PayloadRange, SiteFilter, SiteOption, site_options};
use crate::data::model::Dataset;

/// One user's view of the dashboard.
///
/// The dataset is shared read-only; the filter state and the displayed
/// charts belong to this session alone.  Every accepted input is fully
/// processed (state update, dispatch, chart replacement) before the call
/// returns.
pub struct Session {
    dataset: Arc<Dataset>,
    filters: FilterState,
    bindings: RenderBindings,
    charts: Charts,
    site_options: Vec<SiteOption>,
    payload_limit: f64,
}

impl Session {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let filters = FilterState::new(&dataset);
        let bindings = RenderBindings::dashboard();
        let mut charts = Charts::default();
        bindings.render_all(&dataset, &filters, &mut charts);

        Session {
            site_options: site_options(&dataset),
            payload_limit: config.payload_limit(dataset.max_payload()),
            dataset,
            filters,
            bindings,
            charts,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn chart(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.charts.get(slot)
    }

    pub fn site_options(&self) -> &[SiteOption] {
        &self.site_options
    }

    /// Upper bound of the payload selector.
    pub fn payload_limit(&self) -> f64 {
        self.payload_limit
    }

    /// Apply a site selection.  Invalid input leaves the session untouched.
    pub fn select_site(&mut self, site: SiteFilter) -> Result<Vec<ChartSlot>, FilterError> {
        if !self.filters.select_site(&self.dataset, site.clone())? {
            return Ok(Vec::new());
        }
        Ok(self.dispatch(FilterChange::Site(site)))
    }

    /// Apply a payload interval.  Invalid input leaves the session untouched.
    pub fn set_payload_range(&mut self, low: f64, high: f64) -> Result<Vec<ChartSlot>, FilterError> {
        let range = PayloadRange::new(low, high)?;
        if !self.filters.set_payload_range(range, self.payload_limit)? {
            return Ok(Vec::new());
        }
        Ok(self.dispatch(FilterChange::PayloadRange(range)))
    }

    fn dispatch(&mut self, change: FilterChange) -> Vec<ChartSlot> {
        self.bindings
            .dispatch(&change, &self.dataset, &self.filters, &mut self.charts)
    }
}
