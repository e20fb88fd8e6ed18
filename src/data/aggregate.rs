use super::filter::{PayloadRange, SiteFilter};
use super::model::{Dataset, LaunchRecord, Outcome};

/// Failure/success tallies for the pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    pub failure: usize,
    pub success: usize,
}

impl OutcomeCounts {
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Failure => self.failure,
            Outcome::Success => self.success,
        }
    }

    pub fn total(&self) -> usize {
        self.failure + self.success
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Count failures and successes among the records matching `site`.
///
/// An empty selection yields zero for both; it is not an error.
pub fn success_failure_counts(dataset: &Dataset, site: &SiteFilter) -> OutcomeCounts {
    dataset
        .records()
        .iter()
        .filter(|r| site.matches(r))
        .fold(OutcomeCounts::default(), |mut counts, r| {
            match r.outcome {
                Outcome::Failure => counts.failure += 1,
                Outcome::Success => counts.success += 1,
            }
            counts
        })
}

/// Records matching `site` whose payload lies inside `range` (inclusive),
/// in dataset order.
pub fn payload_success_rows<'a>(
    dataset: &'a Dataset,
    site: &SiteFilter,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| site.matches(r) && range.contains(r.payload_mass_kg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sites() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success),
            LaunchRecord::new("B", 900.0, Outcome::Failure),
        ])
        .unwrap()
    }

    fn mixed() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure),
            LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 2500.0, Outcome::Success),
            LaunchRecord::new("KSC LC-39A", 2500.0, Outcome::Failure),
            LaunchRecord::new("CCAFS LC-40", 2500.0, Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Success),
        ])
        .unwrap()
    }

    fn range(low: f64, high: f64) -> PayloadRange {
        PayloadRange::new(low, high).unwrap()
    }

    #[test]
    fn counts_all_sites() {
        let counts = success_failure_counts(&two_sites(), &SiteFilter::All);
        assert_eq!(counts, OutcomeCounts { failure: 1, success: 1 });
    }

    #[test]
    fn counts_single_site() {
        let counts = success_failure_counts(&two_sites(), &SiteFilter::Site("A".into()));
        assert_eq!(counts, OutcomeCounts { failure: 0, success: 1 });
        assert_eq!(counts.count(Outcome::Success), 1);
    }

    #[test]
    fn payload_window_selects_matching_rows() {
        let ds = two_sites();
        let rows = payload_success_rows(&ds, &SiteFilter::All, &range(0.0, 600.0));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].launch_site, "A");
    }

    #[test]
    fn empty_window_is_not_an_error() {
        let ds = two_sites();
        let rows = payload_success_rows(&ds, &SiteFilter::All, &range(1000.0, 2000.0));
        assert!(rows.is_empty());

        let rows = payload_success_rows(&ds, &SiteFilter::Site("A".into()), &range(1000.0, 2000.0));
        assert!(rows.is_empty());

        // Site present in the filter but absent from the data.
        let none = Dataset::from_records(vec![LaunchRecord::new("B", 1.0, Outcome::Failure)]).unwrap();
        let counts = success_failure_counts(&none, &SiteFilter::Site("A".into()));
        assert!(counts.is_empty());
        assert_eq!(counts, OutcomeCounts::default());
    }

    #[test]
    fn counts_sum_to_matching_rows() {
        let ds = mixed();
        let mut filters = vec![SiteFilter::All];
        filters.extend(ds.distinct_sites().iter().cloned().map(SiteFilter::Site));

        for site in &filters {
            let matching = ds.records().iter().filter(|r| site.matches(r)).count();
            assert_eq!(success_failure_counts(&ds, site).total(), matching, "{site}");
        }
    }

    #[test]
    fn degenerate_range_selects_exact_payload() {
        let ds = mixed();
        let rows = payload_success_rows(&ds, &SiteFilter::All, &range(2500.0, 2500.0));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.payload_mass_kg == 2500.0));

        let site = SiteFilter::Site("CCAFS LC-40".into());
        let rows = payload_success_rows(&ds, &site, &range(2500.0, 2500.0));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.launch_site == "CCAFS LC-40"));
    }

    #[test]
    fn rows_keep_dataset_order() {
        let ds = mixed();
        let rows = payload_success_rows(&ds, &SiteFilter::All, &range(0.0, 10_000.0));
        let expected: Vec<&LaunchRecord> = ds.records().iter().collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let ds = mixed();
        let site = SiteFilter::Site("KSC LC-39A".into());
        let window = range(1000.0, 9600.0);

        assert_eq!(
            success_failure_counts(&ds, &site),
            success_failure_counts(&ds, &site)
        );
        assert_eq!(
            payload_success_rows(&ds, &site, &window),
            payload_success_rows(&ds, &site, &window)
        );
    }
}
