/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (fails whole-file on any bad row)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<LaunchRecord>, sites, min/max payload
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌────────────┐
///   │  filter   │ ───▶ │ aggregate  │  outcome counts, payload window rows
///   └──────────┘      └────────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
