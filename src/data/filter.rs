use std::fmt;

use thiserror::Error;

use super::model::{Dataset, LaunchRecord};

/// Value carried by the "all sites" dropdown entry.
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Site filter
// ---------------------------------------------------------------------------

/// Which launch site the charts are restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// Parse a dropdown value; `"ALL"` means no restriction.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.launch_site == *site,
        }
    }
}

/// Human label, as shown in chart titles and the dropdown.
impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => f.write_str("All Sites"),
            SiteFilter::Site(site) => f.write_str(site),
        }
    }
}

/// One `(label, value)` entry of the site dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteOption {
    pub label: String,
    pub value: SiteFilter,
}

/// Dropdown options: "All Sites" first, then each distinct site in dataset order.
pub fn site_options(dataset: &Dataset) -> Vec<SiteOption> {
    std::iter::once(SiteFilter::All)
        .chain(dataset.distinct_sites().iter().cloned().map(SiteFilter::Site))
        .map(|value| SiteOption {
            label: value.to_string(),
            value,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Inclusive payload interval in kilograms.  Always `0 <= low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, FilterError> {
        for bound in [low, high] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(FilterError::InvalidBound(bound));
            }
        }
        if low > high {
            return Err(FilterError::InvertedRange { low, high });
        }
        Ok(PayloadRange { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.low, self.high)
    }
}

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// Rejected filter input.  Raised at the session boundary; aggregation never
/// sees an invalid filter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("unknown launch site '{0}'")]
    UnknownSite(String),

    #[error("payload range is inverted: {low} > {high}")]
    InvertedRange { low: f64, high: f64 },

    #[error("payload bound {0} is not a finite non-negative number")]
    InvalidBound(f64),

    #[error("payload bound {value} exceeds the selector limit of {limit}")]
    OutOfBounds { value: f64, limit: f64 },
}

/// The user's current selection: one site (or all) and a payload interval.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    site: SiteFilter,
    payload: PayloadRange,
}

impl FilterState {
    /// All sites and the dataset's full payload span.
    pub fn new(dataset: &Dataset) -> Self {
        FilterState {
            site: SiteFilter::All,
            payload: PayloadRange {
                low: dataset.min_payload(),
                high: dataset.max_payload(),
            },
        }
    }

    pub fn site(&self) -> &SiteFilter {
        &self.site
    }

    pub fn payload(&self) -> &PayloadRange {
        &self.payload
    }

    /// Select a site.  Returns whether the state changed.
    pub fn select_site(&mut self, dataset: &Dataset, site: SiteFilter) -> Result<bool, FilterError> {
        if let SiteFilter::Site(name) = &site {
            if !dataset.has_site(name) {
                return Err(FilterError::UnknownSite(name.clone()));
            }
        }
        if self.site == site {
            return Ok(false);
        }
        self.site = site;
        Ok(true)
    }

    /// Replace the payload interval.  `limit` is the selector's upper bound.
    /// Returns whether the state changed.
    pub fn set_payload_range(&mut self, range: PayloadRange, limit: f64) -> Result<bool, FilterError> {
        if range.high > limit {
            return Err(FilterError::OutOfBounds {
                value: range.high,
                limit,
            });
        }
        if self.payload == range {
            return Ok(false);
        }
        self.payload = range;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success),
            LaunchRecord::new("B", 900.0, Outcome::Failure),
        ])
        .unwrap()
    }

    #[test]
    fn defaults_to_all_sites_and_full_span() {
        let state = FilterState::new(&dataset());
        assert_eq!(state.site(), &SiteFilter::All);
        assert_eq!(state.payload().low(), 500.0);
        assert_eq!(state.payload().high(), 900.0);
    }

    #[test]
    fn parses_dropdown_values() {
        assert_eq!(SiteFilter::from_value("ALL"), SiteFilter::All);
        assert_eq!(SiteFilter::from_value("A"), SiteFilter::Site("A".into()));
        assert_eq!(SiteFilter::All.to_string(), "All Sites");
    }

    #[test]
    fn site_options_start_with_all() {
        let options = site_options(&dataset());
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["All Sites", "A", "B"]);
        assert_eq!(options[0].value, SiteFilter::All);
        assert_eq!(options[2].value, SiteFilter::Site("B".into()));
    }

    #[test]
    fn rejects_unknown_site() {
        let ds = dataset();
        let mut state = FilterState::new(&ds);
        let err = state
            .select_site(&ds, SiteFilter::Site("Z".into()))
            .unwrap_err();
        assert_eq!(err, FilterError::UnknownSite("Z".into()));
        assert_eq!(state.site(), &SiteFilter::All);
    }

    #[test]
    fn reports_whether_site_changed() {
        let ds = dataset();
        let mut state = FilterState::new(&ds);
        assert_eq!(state.select_site(&ds, SiteFilter::Site("A".into())), Ok(true));
        assert_eq!(state.select_site(&ds, SiteFilter::Site("A".into())), Ok(false));
        assert_eq!(state.select_site(&ds, SiteFilter::All), Ok(true));
    }

    #[test]
    fn payload_range_validation() {
        assert!(matches!(
            PayloadRange::new(600.0, 100.0),
            Err(FilterError::InvertedRange { .. })
        ));
        assert_eq!(PayloadRange::new(-1.0, 5.0), Err(FilterError::InvalidBound(-1.0)));
        assert!(PayloadRange::new(0.0, f64::INFINITY).is_err());

        let point = PayloadRange::new(700.0, 700.0).unwrap();
        assert!(point.contains(700.0));
        assert!(!point.contains(700.5));
    }

    #[test]
    fn payload_range_respects_selector_limit() {
        let ds = dataset();
        let mut state = FilterState::new(&ds);
        let too_wide = PayloadRange::new(0.0, 12_000.0).unwrap();
        assert!(matches!(
            state.set_payload_range(too_wide, 10_000.0),
            Err(FilterError::OutOfBounds { .. })
        ));
        assert_eq!(state.payload().high(), 900.0);

        let range = PayloadRange::new(0.0, 10_000.0).unwrap();
        assert_eq!(state.set_payload_range(range, 10_000.0), Ok(true));
        assert_eq!(state.set_payload_range(range, 10_000.0), Ok(false));
    }
}
