use std::collections::HashSet;
use std::fmt;

use super::error::DataLoadError;

/// Header names the loaders look for.
pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Result of a launch attempt.
///
/// The mapping to the source `class` column is fixed: `0` is a failure and
/// `1` a success. Charts label slices through this type, never by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub const ALL: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    /// Interpret a numeric class value. Only exact `0` and `1` are accepted.
    pub fn from_class(class: f64) -> Option<Self> {
        if class == 0.0 {
            Some(Outcome::Failure)
        } else if class == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    /// Parse a textual class cell: `0`, `1`, `0.0`, `1.0`, `false` or `true`.
    pub fn parse(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if let Ok(v) = cell.parse::<f64>() {
            return Self::from_class(v);
        }
        match cell {
            "true" => Some(Outcome::Success),
            "false" => Some(Outcome::Failure),
            _ => None,
        }
    }

    /// The numeric class value (`0.0` or `1.0`), used as the scatter y axis.
    pub fn class(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Payload mass in kilograms, finite and non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(launch_site: impl Into<String>, payload_mass_kg: f64, outcome: Outcome) -> Self {
        LaunchRecord {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
        }
    }

    fn validate(&self, row: usize) -> Result<(), DataLoadError> {
        if self.launch_site.trim().is_empty() {
            return Err(DataLoadError::row(row, "empty launch site"));
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DataLoadError::row(
                row,
                format!("payload mass {} is not a non-negative number", self.payload_mass_kg),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded launch records plus the summary statistics derived from them.
///
/// Built once by [`Dataset::from_records`] and never mutated afterwards; the
/// UI shares it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    /// Validate every record and compute the derived attributes.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataLoadError> {
        if records.is_empty() {
            return Err(DataLoadError::NoRecords);
        }

        let mut seen = HashSet::new();
        let mut sites = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for (row, record) in records.iter().enumerate() {
            record.validate(row)?;
            if seen.insert(record.launch_site.as_str()) {
                sites.push(record.launch_site.clone());
            }
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        Ok(Dataset {
            records,
            sites,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn distinct_sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a successfully built dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
