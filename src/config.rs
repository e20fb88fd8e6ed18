use std::path::PathBuf;

/// Compile-time dashboard settings.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Dataset loaded at startup, relative to the working directory.
    pub data_file: PathBuf,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Upper bound of the payload selector in kg.
    pub payload_max: f64,
    /// Payload selector step and tick spacing in kg.
    pub payload_step: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("spacex_launch_dash.csv"),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            inner_size: [1200.0, 900.0],
            min_inner_size: [700.0, 500.0],
            payload_max: 10_000.0,
            payload_step: 1_000.0,
        }
    }
}

impl DashboardConfig {
    /// Selector upper bound for `dataset_max`: the configured maximum, or the
    /// next step above the heaviest payload when that exceeds it.
    pub fn payload_limit(&self, dataset_max: f64) -> f64 {
        if dataset_max <= self.payload_max || self.payload_step <= 0.0 {
            return self.payload_max.max(dataset_max);
        }
        (dataset_max / self.payload_step).ceil() * self.payload_step
    }

    /// Tick positions from 0 up to `limit`, one per step.
    pub fn payload_ticks(&self, limit: f64) -> Vec<f64> {
        if self.payload_step <= 0.0 {
            return vec![0.0, limit];
        }
        let n = (limit / self.payload_step).floor() as usize;
        (0..=n).map(|i| i as f64 * self.payload_step).collect()
    }
}
